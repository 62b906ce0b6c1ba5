use crate::authority::Authority;
use crate::checkers::parse_port;
use crate::error::Result;
use crate::parser::{Parseable, parse_uri};

/// Components of a parsed URI, borrowed from the input
///
/// Layout for "<foo://user@example.com:8042/over/there?name=ferret#nose>":
/// - `scheme`: "foo"
/// - `user_info`: "user"
/// - `host`: "example.com"
/// - `port`: "8042"
/// - `path`: "/over/there"
/// - `query`: "name=ferret"
/// - `fragment`: "nose"
///
/// Delimiters are never part of a component. After a successful parse
/// `scheme` is non-empty and `path` is always present, possibly empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct UriComponents<'a> {
    pub scheme: Option<&'a str>,
    pub user_info: Option<&'a str>,
    pub host: Option<&'a str>,
    pub port: Option<&'a str>,
    pub path: Option<&'a str>,
    pub query: Option<&'a str>,
    pub fragment: Option<&'a str>,
}

impl<'a> UriComponents<'a> {
    /// Parse `input` as an RFC 3986 `URI`.
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_parts::UriComponents;
    ///
    /// let uri = UriComponents::parse("foo://example.com:8042/over/there?name=ferret#nose").unwrap();
    /// assert_eq!(uri.scheme, Some("foo"));
    /// assert_eq!(uri.host, Some("example.com"));
    /// assert_eq!(uri.port, Some("8042"));
    /// assert_eq!(uri.path, Some("/over/there"));
    /// assert_eq!(uri.query, Some("name=ferret"));
    /// assert_eq!(uri.fragment, Some("nose"));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidUri`](crate::ParseError::InvalidUri) if
    /// the input does not match the grammar.
    pub fn parse(input: &'a str) -> Result<Self> {
        parse_uri(input)
    }

    /// Check whether `input` is a valid URI without keeping the components
    pub fn can_parse(input: &str) -> bool {
        parse_uri(input).is_ok()
    }

    /// True when the URI was written with a `//` authority
    pub fn has_authority(&self) -> bool {
        self.host.is_some()
    }

    /// The `[ userinfo "@" ] host [ ":" port ]` view of this URI
    pub fn authority(&self) -> Option<Authority<'a>> {
        self.host.map(|host| Authority {
            user_info: self.user_info,
            host,
            port: self.port,
        })
    }

    /// Numeric port; `None` when absent, empty, or out of range
    pub fn port_number(&self) -> Option<u16> {
        self.port.and_then(parse_port)
    }

    /// RFC 3986 `absolute-URI`: a URI without a fragment
    pub fn is_absolute(&self) -> bool {
        self.scheme.is_some() && self.fragment.is_none()
    }
}

impl<'a> Parseable<'a> for UriComponents<'a> {
    fn parse(input: &'a str) -> Result<Self> {
        parse_uri(input)
    }
}

/// Writes the components back with their delimiters. For a value produced
/// by a successful parse this reproduces the input exactly.
impl core::fmt::Display for UriComponents<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if let Some(scheme) = self.scheme {
            f.write_str(scheme)?;
            f.write_str(":")?;
        }
        if let Some(authority) = self.authority() {
            write!(f, "//{authority}")?;
        }
        if let Some(path) = self.path {
            f.write_str(path)?;
        }
        if let Some(query) = self.query {
            f.write_str("?")?;
            f.write_str(query)?;
        }
        if let Some(fragment) = self.fragment {
            f.write_str("#")?;
            f.write_str(fragment)?;
        }
        Ok(())
    }
}
