/// Forward-only position over the input bytes.
///
/// The end boundary is fixed at construction; every read is bounds checked,
/// so no method can observe bytes past the end.
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            bytes: input.as_bytes(),
            pos: 0,
        }
    }

    /// Current byte offset from the start of the input
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    /// Bytes from the current position to the end
    #[inline]
    pub fn remaining(&self) -> &'a [u8] {
        self.bytes.get(self.pos..).unwrap_or_default()
    }

    /// Move forward by `n` bytes, saturating at the end
    #[inline]
    pub fn advance(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.bytes.len());
    }

    /// Consume the current byte if `pred` accepts it
    #[inline]
    pub fn eat_if(&mut self, pred: impl FnOnce(u8) -> bool) -> bool {
        match self.peek() {
            Some(b) if pred(b) => {
                self.pos += 1;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_saturates() {
        let mut cur = Cursor::new("ab");
        cur.advance(5);
        assert_eq!(cur.pos(), 2);
        assert!(cur.is_eof());
        assert_eq!(cur.peek(), None);
        assert!(cur.remaining().is_empty());
    }

    #[test]
    fn test_eat_if() {
        let mut cur = Cursor::new("a1");
        assert!(!cur.eat_if(|b| b.is_ascii_digit()));
        assert_eq!(cur.pos(), 0);
        assert!(cur.eat_if(|b| b.is_ascii_alphabetic()));
        assert_eq!(cur.remaining(), b"1");
    }
}
