mod component_parser;
mod state;

pub use component_parser::{parse_authority, parse_uri, validate_uri};
pub use state::{HierState, UriState};

use crate::error::Result;

/// Trait for types that can be parsed from URI strings
pub trait Parseable<'a>: Sized {
    /// Parse from input string, borrowing from it
    ///
    /// # Errors
    ///
    /// Returns an error if the input does not match the type's grammar rule.
    fn parse(input: &'a str) -> Result<Self>;
}

/// Parse a URI string into a URI type
///
/// # Errors
///
/// Returns an error if the input does not match the type's grammar rule.
pub fn parse<'a, T: Parseable<'a>>(input: &'a str) -> Result<T> {
    T::parse(input)
}
