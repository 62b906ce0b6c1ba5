/// Byte classes from the RFC 3986 ABNF, as bit flags
const ALPHA: u8 = 1 << 0;
const DIGIT: u8 = 1 << 1;
const HEXDIG: u8 = 1 << 2;
/// `-` `.` `_` `~`
const UNRESERVED_MARK: u8 = 1 << 3;
/// `!` `$` `&` `'` `(` `)` `*` `+` `,` `;` `=`
const SUB_DELIM: u8 = 1 << 4;

/// ASCII-only classification table, independent of any locale.
/// Every byte >= 0x80 maps to 0 (no class).
const CHAR_TABLE: [u8; 256] = {
    let mut table = [0u8; 256];

    let mut i = b'a';
    while i <= b'z' {
        table[i as usize] = ALPHA;
        i += 1;
    }
    let mut i = b'A';
    while i <= b'Z' {
        table[i as usize] = ALPHA;
        i += 1;
    }
    let mut i = b'0';
    while i <= b'9' {
        table[i as usize] = DIGIT | HEXDIG;
        i += 1;
    }
    let mut i = 0;
    while i < 6 {
        table[(b'a' + i) as usize] |= HEXDIG;
        table[(b'A' + i) as usize] |= HEXDIG;
        i += 1;
    }

    table[b'-' as usize] = UNRESERVED_MARK;
    table[b'.' as usize] = UNRESERVED_MARK;
    table[b'_' as usize] = UNRESERVED_MARK;
    table[b'~' as usize] = UNRESERVED_MARK;

    table[b'!' as usize] = SUB_DELIM;
    table[b'$' as usize] = SUB_DELIM;
    table[b'&' as usize] = SUB_DELIM;
    table[b'\'' as usize] = SUB_DELIM;
    table[b'(' as usize] = SUB_DELIM;
    table[b')' as usize] = SUB_DELIM;
    table[b'*' as usize] = SUB_DELIM;
    table[b'+' as usize] = SUB_DELIM;
    table[b',' as usize] = SUB_DELIM;
    table[b';' as usize] = SUB_DELIM;
    table[b'=' as usize] = SUB_DELIM;

    table
};

#[inline]
fn class(b: u8) -> u8 {
    CHAR_TABLE[b as usize]
}

/// `ALPHA`
#[inline]
pub fn is_alpha(b: u8) -> bool {
    class(b) & ALPHA != 0
}

/// `DIGIT`
#[inline]
pub fn is_digit(b: u8) -> bool {
    class(b) & DIGIT != 0
}

/// `ALPHA / DIGIT`
#[inline]
pub fn is_alnum(b: u8) -> bool {
    class(b) & (ALPHA | DIGIT) != 0
}

/// `HEXDIG`, case-insensitive
#[inline]
pub fn is_hex_digit(b: u8) -> bool {
    class(b) & HEXDIG != 0
}

/// `unreserved = ALPHA / DIGIT / "-" / "." / "_" / "~"`
#[inline]
pub fn is_unreserved_byte(b: u8) -> bool {
    class(b) & (ALPHA | DIGIT | UNRESERVED_MARK) != 0
}

/// `sub-delims`
#[inline]
pub fn is_sub_delim_byte(b: u8) -> bool {
    class(b) & SUB_DELIM != 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unreserved() {
        for b in b"azAZ09-._~" {
            assert!(is_unreserved_byte(*b), "{}", *b as char);
        }
        for b in b"!$%:/?#[]@ " {
            assert!(!is_unreserved_byte(*b), "{}", *b as char);
        }
    }

    #[test]
    fn test_sub_delims() {
        for b in b"!$&'()*+,;=" {
            assert!(is_sub_delim_byte(*b));
        }
        assert!(!is_sub_delim_byte(b':'));
        assert!(!is_sub_delim_byte(b'a'));
    }

    #[test]
    fn test_hex_digit() {
        assert!(is_hex_digit(b'0'));
        assert!(is_hex_digit(b'f'));
        assert!(is_hex_digit(b'F'));
        assert!(!is_hex_digit(b'g'));
        assert!(!is_hex_digit(b'G'));
    }

    #[test]
    fn test_non_ascii_has_no_class() {
        for b in 0x80..=0xFF_u8 {
            assert!(!is_alnum(b));
            assert!(!is_unreserved_byte(b));
            assert!(!is_sub_delim_byte(b));
        }
    }
}
