/// A cursor for byte-by-byte inline parsing.
///
/// Operates over the raw inline text of one block. All structural markers are
/// ASCII, so scanning works on bytes; characters are only decoded where
/// Unicode classes matter (emphasis flanking).
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The bytes being parsed.
    pub s: &'a [u8],
    /// Current index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `s`.
    pub fn new(s: &'a [u8]) -> Self {
        Self { s, i: 0 }
    }

    /// Returns the current byte position.
    pub fn pos(&self) -> usize {
        self.i
    }

    /// Returns true if at end of input.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.s.get(self.i).copied()
    }

    /// Peeks `n` bytes ahead of the current position.
    pub fn peek_at(&self, n: usize) -> Option<u8> {
        self.s.get(self.i + n).copied()
    }

    /// Checks if the remaining input starts with the given byte pattern.
    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.rest().starts_with(pat)
    }

    /// The unconsumed input.
    pub fn rest(&self) -> &'a [u8] {
        self.s.get(self.i..).unwrap_or_default()
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

    /// Number of consecutive `b` bytes at the current position.
    pub fn run_of(&self, b: u8) -> usize {
        self.rest().iter().take_while(|&&c| c == b).count()
    }

    /// Decodes the character ending just before byte `pos`.
    ///
    /// `None` at the start of input. Invalid UTF-8 decodes as U+FFFD.
    pub fn char_before(&self, pos: usize) -> Option<char> {
        if pos == 0 || pos > self.s.len() {
            return None;
        }
        let start = (pos.saturating_sub(4)..pos)
            .rev()
            .find(|&i| !is_utf8_continuation(self.s[i]))
            .unwrap_or(pos - 1);
        Some(
            std::str::from_utf8(&self.s[start..pos])
                .ok()
                .and_then(|t| t.chars().next_back())
                .unwrap_or(char::REPLACEMENT_CHARACTER),
        )
    }

    /// Decodes the character starting at byte `pos`.
    ///
    /// `None` at the end of input. Invalid UTF-8 decodes as U+FFFD.
    pub fn char_at(&self, pos: usize) -> Option<char> {
        let first = *self.s.get(pos)?;
        let width = match first {
            0x00..=0x7F => 1,
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        };
        let end = (pos + width).min(self.s.len());
        Some(
            std::str::from_utf8(&self.s[pos..end])
                .ok()
                .and_then(|t| t.chars().next())
                .unwrap_or(char::REPLACEMENT_CHARACTER),
        )
    }
}

fn is_utf8_continuation(b: u8) -> bool {
    b & 0b1100_0000 == 0b1000_0000
}
