//! Cursor-level grammar predicates.
//!
//! Each predicate either consumes what it matched and returns `true`, or
//! leaves the cursor where it was and returns `false`.

use crate::character_sets::{
    is_alnum as is_alnum_byte, is_alpha as is_alpha_byte, is_digit as is_digit_byte,
    is_hex_digit, is_sub_delim_byte, is_unreserved_byte,
};
use crate::cursor::Cursor;

/// `unreserved`
pub fn is_unreserved(cur: &mut Cursor<'_>) -> bool {
    cur.eat_if(is_unreserved_byte)
}

/// `sub-delims`
pub fn is_sub_delim(cur: &mut Cursor<'_>) -> bool {
    cur.eat_if(is_sub_delim_byte)
}

/// `pct-encoded = "%" HEXDIG HEXDIG`, consumed as a whole triplet
pub fn is_pct_encoded(cur: &mut Cursor<'_>) -> bool {
    match cur.remaining() {
        [b'%', hi, lo, ..] if is_hex_digit(*hi) && is_hex_digit(*lo) => {
            cur.advance(3);
            true
        }
        _ => false,
    }
}

/// `pchar = unreserved / pct-encoded / sub-delims / ":" / "@"`
pub fn is_pchar(cur: &mut Cursor<'_>) -> bool {
    is_unreserved(cur) || is_pct_encoded(cur) || is_sub_delim(cur) || is_in(cur, b":@")
}

pub fn is_alpha(cur: &mut Cursor<'_>) -> bool {
    cur.eat_if(is_alpha_byte)
}

pub fn is_digit(cur: &mut Cursor<'_>) -> bool {
    cur.eat_if(is_digit_byte)
}

pub fn is_alnum(cur: &mut Cursor<'_>) -> bool {
    cur.eat_if(is_alnum_byte)
}

/// Membership in a short literal set of delimiters
pub fn is_in(cur: &mut Cursor<'_>, set: &[u8]) -> bool {
    cur.eat_if(|b| set.contains(&b))
}

/// `reg-name` element: `unreserved / pct-encoded / sub-delims`
pub fn is_reg_name_char(cur: &mut Cursor<'_>) -> bool {
    is_unreserved(cur) || is_pct_encoded(cur) || is_sub_delim(cur)
}

/// `port = *DIGIT`. An empty port is valid.
pub fn is_valid_port(port: &str) -> bool {
    port.bytes().all(is_digit_byte)
}

/// `userinfo = *( unreserved / pct-encoded / sub-delims / ":" )`
pub fn is_valid_user_info(user_info: &str) -> bool {
    let mut cur = Cursor::new(user_info);
    while !cur.is_eof() {
        if !is_reg_name_char(&mut cur) && !is_in(&mut cur, b":") {
            return false;
        }
    }
    true
}

/// Parse a port string to u16.
/// Returns None if empty, contains non-digit characters, or is out of range.
pub fn parse_port(port: &str) -> Option<u16> {
    if port.is_empty() || !is_valid_port(port) {
        return None;
    }
    port.parse::<u16>().ok()
}
