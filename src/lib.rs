#![cfg_attr(not(feature = "std"), no_std)]

//! Zero-copy RFC 3986 URI parser.
//!
//! The input is validated against the `URI` grammar in a single forward scan
//! and split into scheme, user-info, host, port, path, query and fragment,
//! each a slice of the input. Percent-decoding, host normalization and
//! reference resolution are left to the caller.
//!
//! ```
//! let uri = uri_parts::parse_uri("mailto:fred@example.com").unwrap();
//! assert_eq!(uri.scheme, Some("mailto"));
//! assert_eq!(uri.host, None);
//! assert_eq!(uri.path, Some("fred@example.com"));
//! ```

// Internal modules (not public API)
mod log;

mod authority;
mod character_sets;
mod checkers;
mod cursor;
mod error;
mod parser;
mod uri_components;

// Public API
pub use authority::Authority;
pub use error::{ParseError, Result};
pub use parser::{Parseable, parse, parse_authority, parse_uri, validate_uri};
pub use uri_components::UriComponents;

/// Check if a string is a valid RFC 3986 URI
pub fn is_valid(input: &str) -> bool {
    validate_uri(input).is_ok()
}
