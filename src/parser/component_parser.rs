/// Single-pass RFC 3986 scanner that records component boundaries as slices
/// of the input. Nothing is copied; the cursor only moves forward.
use super::{HierState, UriState};
use crate::authority::Authority;
use crate::checkers::{
    is_alnum, is_alpha, is_digit, is_in, is_pchar, is_reg_name_char, is_valid_port,
    is_valid_user_info,
};
use crate::cursor::Cursor;
use crate::error::{ParseError, Result};
use crate::log::{debug, trace};
use crate::uri_components::UriComponents;

/// Grammar rule the scan must match as a whole
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    /// `URI`
    Uri,
    /// `authority` on its own
    Authority,
}

struct ComponentParser<'a> {
    input: &'a str,
    cur: Cursor<'a>,
    target: Target,
    state: UriState,
    hier: HierState,
    /// Start of the component currently being scanned
    first: usize,
    /// Last ':' seen in the authority span
    last_colon: Option<usize>,
    parts: UriComponents<'a>,
}

impl<'a> ComponentParser<'a> {
    fn new(input: &'a str, target: Target) -> Self {
        let (state, hier) = match target {
            Target::Uri => (UriState::Scheme, HierState::FirstSlash),
            Target::Authority => (UriState::HierPart, HierState::Authority),
        };
        Self {
            input,
            cur: Cursor::new(input),
            target,
            state,
            hier,
            first: 0,
            last_colon: None,
            parts: UriComponents::default(),
        }
    }

    /// Consume the whole input, one dispatch per byte, then close whatever
    /// component is still open.
    fn run(mut self) -> Result<UriComponents<'a>> {
        while let Some(b) = self.cur.peek() {
            self.step(b)?;
            if self.target == Target::Authority && self.left_authority() {
                return Err(self.reject("trailing data after authority"));
            }
        }
        self.finish()?;
        trace!("parsed {:?}", self.parts);
        Ok(self.parts)
    }

    fn step(&mut self, b: u8) -> Result<()> {
        match self.state {
            UriState::Scheme => self.scheme(b),
            UriState::HierPart => match self.hier {
                HierState::FirstSlash => {
                    self.first_slash(b);
                    Ok(())
                }
                HierState::SecondSlash => {
                    self.second_slash(b);
                    Ok(())
                }
                HierState::Authority => self.authority(b),
                HierState::Host => self.host(b),
                HierState::HostIpv6 => self.host_ipv6(b),
                HierState::Port => self.port(b),
                HierState::Path => self.path(b),
            },
            UriState::Query => self.query(b),
            UriState::Fragment => self.fragment(b),
        }
    }

    fn scheme(&mut self, b: u8) -> Result<()> {
        if self.cur.pos() == self.first {
            return if is_alpha(&mut self.cur) {
                Ok(())
            } else {
                Err(self.reject("scheme must start with a letter"))
            };
        }

        if b == b':' {
            self.parts.scheme = Some(self.slice(self.first, self.cur.pos())?);
            self.cur.advance(1);
            self.first = self.cur.pos();
            self.state = UriState::HierPart;
            return Ok(());
        }

        if is_alnum(&mut self.cur) || is_in(&mut self.cur, b"+-.") {
            Ok(())
        } else {
            Err(self.reject("invalid scheme character"))
        }
    }

    fn first_slash(&mut self, b: u8) {
        if b == b'/' {
            // Kept in case the second slash never comes
            self.first = self.cur.pos();
            self.cur.advance(1);
            self.hier = HierState::SecondSlash;
        } else {
            self.open_path();
        }
    }

    fn second_slash(&mut self, b: u8) {
        if b == b'/' {
            self.cur.advance(1);
            self.first = self.cur.pos();
            self.last_colon = None;
            self.hier = HierState::Authority;
        } else {
            // path-absolute: the path keeps the first slash
            self.hier = HierState::Path;
        }
    }

    fn authority(&mut self, b: u8) -> Result<()> {
        let pos = self.cur.pos();
        if pos == self.first && matches!(b, b'@' | b':') {
            return Err(self.reject("authority cannot begin with '@' or ':'"));
        }

        match b {
            b'@' => {
                let user_info = self.slice(self.first, pos)?;
                if !is_valid_user_info(user_info) {
                    return Err(self.reject("invalid user-info"));
                }
                self.parts.user_info = Some(user_info);
                self.cur.advance(1);
                self.first = self.cur.pos();
                self.last_colon = None;
                self.hier = if self.cur.peek() == Some(b'[') {
                    HierState::HostIpv6
                } else {
                    HierState::Host
                };
            }
            b'[' if pos == self.first => self.hier = HierState::HostIpv6,
            b':' => {
                self.last_colon = Some(pos);
                self.cur.advance(1);
            }
            b'/' => {
                self.set_host_and_port(pos)?;
                self.open_path();
            }
            b'?' | b'#' => {
                self.set_host_and_port(pos)?;
                self.close_empty_path()?;
                self.open_delimited(b);
            }
            _ => {
                if !is_reg_name_char(&mut self.cur) {
                    return Err(self.reject("invalid authority character"));
                }
            }
        }
        Ok(())
    }

    fn host(&mut self, b: u8) -> Result<()> {
        let pos = self.cur.pos();
        match b {
            b':' if pos == self.first => Err(self.reject("host cannot begin with ':'")),
            b':' => {
                self.parts.host = Some(self.slice(self.first, pos)?);
                self.cur.advance(1);
                self.first = self.cur.pos();
                self.hier = HierState::Port;
                Ok(())
            }
            b'/' => {
                self.parts.host = Some(self.slice(self.first, pos)?);
                self.open_path();
                Ok(())
            }
            b'?' | b'#' => {
                self.parts.host = Some(self.slice(self.first, pos)?);
                self.close_empty_path()?;
                self.open_delimited(b);
                Ok(())
            }
            _ if is_reg_name_char(&mut self.cur) => Ok(()),
            _ => Err(self.reject("invalid host character")),
        }
    }

    /// The bracket content is matched, not validated: anything up to the
    /// first ']' is accepted as the literal.
    fn host_ipv6(&mut self, b: u8) -> Result<()> {
        if b != b'[' || self.cur.pos() != self.first {
            return Err(self.reject("IP literal must start with '['"));
        }
        let Some(offset) = memchr::memchr(b']', self.cur.remaining()) else {
            return Err(self.reject("unterminated IP literal"));
        };
        self.cur.advance(offset + 1);
        self.parts.host = Some(self.slice(self.first, self.cur.pos())?);

        match self.cur.peek() {
            // Closed in `finish`
            None => {}
            Some(b':') => {
                self.cur.advance(1);
                self.first = self.cur.pos();
                self.hier = HierState::Port;
            }
            Some(b'/') => self.open_path(),
            Some(delimiter @ (b'?' | b'#')) => {
                self.close_empty_path()?;
                self.open_delimited(delimiter);
            }
            Some(_) => return Err(self.reject("unexpected character after IP literal")),
        }
        Ok(())
    }

    fn port(&mut self, b: u8) -> Result<()> {
        match b {
            b'/' => {
                self.close_port()?;
                self.open_path();
            }
            b'?' | b'#' => {
                self.close_port()?;
                self.close_empty_path()?;
                self.open_delimited(b);
            }
            _ => {
                if !is_digit(&mut self.cur) {
                    return Err(self.reject("port must be digits"));
                }
            }
        }
        Ok(())
    }

    fn path(&mut self, b: u8) -> Result<()> {
        match b {
            b'?' | b'#' => {
                self.parts.path = Some(self.slice(self.first, self.cur.pos())?);
                self.open_delimited(b);
                Ok(())
            }
            _ if is_pchar(&mut self.cur) || is_in(&mut self.cur, b"/") => Ok(()),
            _ => Err(self.reject("invalid path character")),
        }
    }

    fn query(&mut self, b: u8) -> Result<()> {
        match b {
            b'#' => {
                self.parts.query = Some(self.slice(self.first, self.cur.pos())?);
                self.open_delimited(b);
                Ok(())
            }
            _ if is_pchar(&mut self.cur) || is_in(&mut self.cur, b"/?") => Ok(()),
            _ => Err(self.reject("invalid query character")),
        }
    }

    fn fragment(&mut self, _b: u8) -> Result<()> {
        if is_pchar(&mut self.cur) || is_in(&mut self.cur, b"/?") {
            Ok(())
        } else {
            Err(self.reject("invalid fragment character"))
        }
    }

    /// End of input: close the component of the active phase.
    fn finish(&mut self) -> Result<()> {
        let end = self.input.len();
        match self.state {
            UriState::Scheme => return Err(self.reject("missing ':' after scheme")),
            UriState::HierPart => match self.hier {
                HierState::FirstSlash | HierState::SecondSlash | HierState::Path => {
                    self.parts.path = Some(self.slice(self.first, end)?);
                }
                HierState::Authority => {
                    self.set_host_and_port(end)?;
                    self.close_empty_path()?;
                }
                HierState::Host => {
                    self.parts.host = Some(self.slice(self.first, end)?);
                    self.close_empty_path()?;
                }
                HierState::HostIpv6 => {
                    if self.parts.host.is_none() {
                        return Err(self.reject("unterminated IP literal"));
                    }
                    self.close_empty_path()?;
                }
                HierState::Port => {
                    self.close_port()?;
                    self.close_empty_path()?;
                }
            },
            UriState::Query => self.parts.query = Some(self.slice(self.first, end)?),
            UriState::Fragment => self.parts.fragment = Some(self.slice(self.first, end)?),
        }
        Ok(())
    }

    /// Split the authority span `first..end` at the last colon into host and
    /// port. Without a colon the whole span is the host.
    fn set_host_and_port(&mut self, end: usize) -> Result<()> {
        let (host, port) = match self.last_colon {
            None => (self.slice(self.first, end)?, None),
            Some(colon) => {
                let port = self.slice(colon + 1, end)?;
                if !is_valid_port(port) {
                    return Err(self.reject("port must be digits"));
                }
                (self.slice(self.first, colon)?, Some(port))
            }
        };
        // Only an IP literal may carry colons
        if memchr::memchr(b':', host.as_bytes()).is_some() {
            return Err(self.reject("host contains ':'"));
        }
        self.parts.host = Some(host);
        self.parts.port = port;
        Ok(())
    }

    fn close_port(&mut self) -> Result<()> {
        let port = self.slice(self.first, self.cur.pos())?;
        if !is_valid_port(port) {
            return Err(self.reject("port must be digits"));
        }
        self.parts.port = Some(port);
        Ok(())
    }

    /// Authority followed directly by '?', '#' or the end: path is empty
    fn close_empty_path(&mut self) -> Result<()> {
        let pos = self.cur.pos();
        self.parts.path = Some(self.slice(pos, pos)?);
        Ok(())
    }

    /// Start the path at the current byte without consuming it
    fn open_path(&mut self) {
        self.first = self.cur.pos();
        self.hier = HierState::Path;
    }

    /// Consume a '?' or '#' and enter the query or fragment phase
    fn open_delimited(&mut self, delimiter: u8) {
        self.cur.advance(1);
        self.first = self.cur.pos();
        self.state = if delimiter == b'?' {
            UriState::Query
        } else {
            UriState::Fragment
        };
    }

    fn left_authority(&self) -> bool {
        self.state != UriState::HierPart || self.hier == HierState::Path
    }

    fn slice(&self, start: usize, end: usize) -> Result<&'a str> {
        self.input.get(start..end).ok_or(ParseError::InvalidUri)
    }

    #[cfg_attr(
        not(feature = "log"),
        allow(unused_variables, clippy::unused_self)
    )]
    fn reject(&self, reason: &'static str) -> ParseError {
        debug!(
            "invalid uri at offset {} ({:?}/{:?}): {}",
            self.cur.pos(),
            self.state,
            self.hier,
            reason
        );
        ParseError::InvalidUri
    }
}

/// Parse `input` as an RFC 3986 `URI` into borrowed components.
///
/// # Errors
///
/// Returns [`ParseError::InvalidUri`] on any grammar violation. No partial
/// result is ever returned.
pub fn parse_uri(input: &str) -> Result<UriComponents<'_>> {
    ComponentParser::new(input, Target::Uri).run()
}

/// Parse `input` as a bare `authority` (`[ userinfo "@" ] host [ ":" port ]`).
///
/// # Errors
///
/// Returns [`ParseError::InvalidUri`] if the input is not exactly one
/// authority, including when a path, query or fragment follows it.
pub fn parse_authority(input: &str) -> Result<Authority<'_>> {
    let parts = ComponentParser::new(input, Target::Authority).run()?;
    let host = parts.host.ok_or(ParseError::InvalidUri)?;
    Ok(Authority {
        user_info: parts.user_info,
        host,
        port: parts.port,
    })
}

/// Validate a URI without keeping its components
pub fn validate_uri(input: &str) -> Result<()> {
    parse_uri(input).map(|_| ())
}
