/// Fixture loader for the RFC 3986 component tests
///
/// Each entry is either a test object or a bare string used as a comment.
/// A `null` component means the component must be absent.
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub enum TestCase {
    /// A URI test case
    UriTest {
        input: String,
        #[serde(default)]
        scheme: Option<String>,
        #[serde(default)]
        user_info: Option<String>,
        #[serde(default)]
        host: Option<String>,
        #[serde(default)]
        port: Option<String>,
        #[serde(default)]
        path: Option<String>,
        #[serde(default)]
        query: Option<String>,
        #[serde(default)]
        fragment: Option<String>,
        #[serde(default)]
        failure: Option<bool>,
    },
    /// A comment line (string)
    #[allow(dead_code)]
    Comment(String),
}

#[derive(Debug, Clone, Default)]
pub struct FixtureResult {
    pub passed: usize,
    pub failed: usize,
    pub failures: Vec<FixtureFailure>,
}

#[derive(Debug, Clone)]
pub struct FixtureFailure {
    pub test_num: usize,
    pub input: String,
    pub field: String,
    pub expected: String,
    pub actual: String,
}

impl FixtureResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn summary(&self) -> String {
        format!("Passed: {}, Failed: {}", self.passed, self.failed)
    }
}

/// Load the bundled fixture file
pub fn load_fixture() -> Vec<TestCase> {
    let test_data = include_str!("./uritestdata.json");
    serde_json::from_str(test_data).unwrap_or_default()
}
