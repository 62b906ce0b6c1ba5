use crate::checkers::parse_port;
use crate::error::Result;
use crate::parser::{Parseable, parse_authority};

/// `authority = [ userinfo "@" ] host [ ":" port ]`, borrowed from the input
///
/// `host` is always present but may be empty (`file:///etc`). An IP literal
/// keeps its brackets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Authority<'a> {
    pub user_info: Option<&'a str>,
    pub host: &'a str,
    pub port: Option<&'a str>,
}

impl<'a> Authority<'a> {
    /// Parse `input` as a bare authority, such as the target of an HTTP
    /// `CONNECT` request.
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_parts::Authority;
    ///
    /// let authority = Authority::parse("user@[::1]:8080").unwrap();
    /// assert_eq!(authority.user_info, Some("user"));
    /// assert_eq!(authority.host, "[::1]");
    /// assert_eq!(authority.port, Some("8080"));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidUri`](crate::ParseError::InvalidUri) if
    /// the input is not exactly one authority.
    pub fn parse(input: &'a str) -> Result<Self> {
        parse_authority(input)
    }

    /// True when the host is bracketed (`[v6]` or `[vFuture]`)
    pub fn is_ip_literal(&self) -> bool {
        self.host.starts_with('[')
    }

    /// Numeric port; `None` when absent, empty, or out of range
    pub fn port_number(&self) -> Option<u16> {
        self.port.and_then(parse_port)
    }
}

impl<'a> Parseable<'a> for Authority<'a> {
    fn parse(input: &'a str) -> Result<Self> {
        parse_authority(input)
    }
}

impl core::fmt::Display for Authority<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if let Some(user_info) = self.user_info {
            f.write_str(user_info)?;
            f.write_str("@")?;
        }
        f.write_str(self.host)?;
        if let Some(port) = self.port {
            f.write_str(":")?;
            f.write_str(port)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_ip_literal() {
        assert!(Authority::parse("[v1.fe]").unwrap().is_ip_literal());
        assert!(!Authority::parse("example.com").unwrap().is_ip_literal());
    }

    #[test]
    fn test_display() {
        let authority = Authority {
            user_info: Some("a:b"),
            host: "h",
            port: Some(""),
        };
        assert_eq!(authority.to_string(), "a:b@h:");
    }
}
