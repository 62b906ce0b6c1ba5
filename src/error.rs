/// Errors that can occur during URI parsing
///
/// Parsing is all-or-nothing: any grammar violation (malformed scheme,
/// disallowed character, unterminated IP literal, non-digit port, empty
/// user-info or host-colon forms) surfaces as the same variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseError {
    /// Input does not match the RFC 3986 `URI` rule
    InvalidUri,
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Self::InvalidUri => "Invalid URI",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

/// Result type for URI parsing operations
pub type Result<T> = core::result::Result<T, ParseError>;
