/// A cursor for byte-by-byte span parsing.
///
/// Operates over the inline data handed to a span handler; positions are
/// indices into that data, so a handler can start mid-slice (at its trigger
/// byte) and report consumed lengths relative to where it started.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The bytes being parsed.
    pub s: &'a [u8],
    /// Current index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor positioned at `offset` in `s`.
    pub fn at(s: &'a [u8], offset: usize) -> Self {
        Self { s, i: offset }
    }

    /// Returns the current index.
    pub fn pos(&self) -> usize {
        self.i
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.s.get(self.i).copied()
    }

    /// Checks if the remaining input starts with the given byte pattern.
    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.s.get(self.i..).is_some_and(|rest| rest.starts_with(pat))
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.i += 1;
        Some(b)
    }

    /// Advances by `n` bytes.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }

    /// Advances while `pred` holds, returning how many bytes were skipped.
    pub fn bump_while(&mut self, pred: impl Fn(u8) -> bool) -> usize {
        let start = self.i;
        while let Some(b) = self.peek() {
            if !pred(b) {
                break;
            }
            self.i += 1;
        }
        self.i - start
    }

    /// The bytes between `start` and the current position.
    pub fn since(&self, start: usize) -> &'a [u8] {
        &self.s[start..self.i.min(self.s.len())]
    }
}
