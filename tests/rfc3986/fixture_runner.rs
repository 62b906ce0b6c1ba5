use super::fixture_loader::{FixtureFailure, FixtureResult, TestCase};
/// Runs the fixture cases against `UriComponents::parse`
use uri_parts::UriComponents;

fn describe(value: Option<&str>) -> String {
    value.map_or_else(|| "<absent>".to_string(), |v| format!("{v:?}"))
}

/// Run fixture cases and return results
pub fn run_fixture(tests: Vec<TestCase>) -> FixtureResult {
    let mut result = FixtureResult::new();
    let mut test_num = 0;

    for test in tests {
        let TestCase::UriTest {
            input,
            scheme,
            user_info,
            host,
            port,
            path,
            query,
            fragment,
            failure,
        } = test
        else {
            continue;
        };
        test_num += 1;

        let parsed = UriComponents::parse(&input);

        if failure == Some(true) {
            if parsed.is_ok() {
                result.failed += 1;
                result.failures.push(FixtureFailure {
                    test_num,
                    input: input.clone(),
                    field: "parsing".to_string(),
                    expected: "failure".to_string(),
                    actual: "success".to_string(),
                });
            } else {
                result.passed += 1;
            }
            continue;
        }

        let Ok(uri) = parsed else {
            result.failed += 1;
            result.failures.push(FixtureFailure {
                test_num,
                input: input.clone(),
                field: "parsing".to_string(),
                expected: "success".to_string(),
                actual: "parse error".to_string(),
            });
            continue;
        };

        let round_trip = uri.to_string();
        let checks = [
            ("scheme", scheme.as_deref(), uri.scheme),
            ("user_info", user_info.as_deref(), uri.user_info),
            ("host", host.as_deref(), uri.host),
            ("port", port.as_deref(), uri.port),
            ("path", path.as_deref(), uri.path),
            ("query", query.as_deref(), uri.query),
            ("fragment", fragment.as_deref(), uri.fragment),
            ("round_trip", Some(input.as_str()), Some(round_trip.as_str())),
        ];

        let mut test_passed = true;
        for (field, expected, actual) in checks {
            if expected != actual {
                result.failures.push(FixtureFailure {
                    test_num,
                    input: input.clone(),
                    field: field.to_string(),
                    expected: describe(expected),
                    actual: describe(actual),
                });
                test_passed = false;
            }
        }

        if test_passed {
            result.passed += 1;
        } else {
            result.failed += 1;
        }
    }

    result
}
