/// Backslash escapes.
pub struct Escape;

impl Escape {
    pub const BACKSLASH: u8 = b'\\';

    /// Only ASCII punctuation can be escaped; a backslash before anything
    /// else is a literal backslash.
    pub fn is_escapable(b: u8) -> bool {
        b.is_ascii_punctuation()
    }

    /// Removes backslashes that escape ASCII punctuation.
    pub fn unescape(s: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(s.len());
        let mut i = 0;
        while i < s.len() {
            if s[i] == Self::BACKSLASH
                && let Some(&next) = s.get(i + 1)
                && Self::is_escapable(next)
            {
                out.push(next);
                i += 2;
            } else {
                out.push(s[i]);
                i += 1;
            }
        }
        out
    }
}
