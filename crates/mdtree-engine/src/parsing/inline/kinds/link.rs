use super::escape::Escape;

/// Maximum nesting of unescaped parentheses in a bare destination.
const MAX_PAREN_DEPTH: usize = 32;

/// Inline links `[text](dest "title")` and images `![alt](dest "title")`.
pub struct InlineLink;

/// The `(destination "title")` part after a closing bracket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkTail {
    /// Destination with backslash escapes removed.
    pub destination: Vec<u8>,
    /// Title with backslash escapes removed; empty when absent.
    pub title: Vec<u8>,
    /// Bytes consumed, including both parentheses.
    pub len: usize,
}

impl InlineLink {
    pub const OPEN: u8 = b'[';
    pub const CLOSE: u8 = b']';
    pub const IMAGE: &'static [u8] = b"![";
    pub const TAIL_OPEN: u8 = b'(';
    pub const TAIL_CLOSE: u8 = b')';

    /// Parses a link tail at the start of `s` (the byte after `]`).
    ///
    /// The destination is either `<...>` without line breaks or a run of
    /// non-space bytes with balanced parentheses. A title must be separated
    /// from it by whitespace and quoted with `"`, `'` or `(...)`.
    pub fn tail(s: &[u8]) -> Option<LinkTail> {
        if s.first() != Some(&Self::TAIL_OPEN) {
            return None;
        }
        let mut i = skip_whitespace(s, 1);

        let (destination, after_dest) = if s.get(i) == Some(&b'<') {
            angle_destination(s, i)?
        } else {
            bare_destination(s, i)?
        };
        i = skip_whitespace(s, after_dest);

        let mut title = Vec::new();
        if i > after_dest
            && let Some(close) = s.get(i).and_then(|&b| title_close(b))
        {
            let (parsed, after_title) = quoted_title(s, i, close)?;
            title = parsed;
            i = skip_whitespace(s, after_title);
        }

        if s.get(i) != Some(&Self::TAIL_CLOSE) {
            return None;
        }
        Some(LinkTail {
            destination,
            title,
            len: i + 1,
        })
    }
}

fn skip_whitespace(s: &[u8], mut i: usize) -> usize {
    while s.get(i).is_some_and(|b| matches!(b, b' ' | b'\t' | b'\n')) {
        i += 1;
    }
    i
}

fn angle_destination(s: &[u8], open: usize) -> Option<(Vec<u8>, usize)> {
    let mut j = open + 1;
    loop {
        match *s.get(j)? {
            b'>' => break,
            b'\n' | b'<' => return None,
            Escape::BACKSLASH if s.get(j + 1).is_some_and(|&b| Escape::is_escapable(b)) => j += 2,
            _ => j += 1,
        }
    }
    Some((Escape::unescape(&s[open + 1..j]), j + 1))
}

fn bare_destination(s: &[u8], start: usize) -> Option<(Vec<u8>, usize)> {
    let mut j = start;
    let mut depth = 0usize;
    while let Some(&b) = s.get(j) {
        match b {
            Escape::BACKSLASH if s.get(j + 1).is_some_and(|&n| Escape::is_escapable(n)) => j += 2,
            b'(' => {
                depth += 1;
                if depth > MAX_PAREN_DEPTH {
                    return None;
                }
                j += 1;
            }
            b')' if depth == 0 => break,
            b')' => {
                depth -= 1;
                j += 1;
            }
            b if b.is_ascii_whitespace() || b.is_ascii_control() => break,
            _ => j += 1,
        }
    }
    if depth != 0 {
        return None;
    }
    Some((Escape::unescape(&s[start..j]), j))
}

fn title_close(open: u8) -> Option<u8> {
    match open {
        b'"' => Some(b'"'),
        b'\'' => Some(b'\''),
        b'(' => Some(b')'),
        _ => None,
    }
}

fn quoted_title(s: &[u8], open: usize, close: u8) -> Option<(Vec<u8>, usize)> {
    let mut j = open + 1;
    loop {
        match *s.get(j)? {
            b if b == close => break,
            b'(' if close == b')' => return None,
            Escape::BACKSLASH if s.get(j + 1).is_some_and(|&b| Escape::is_escapable(b)) => j += 2,
            _ => j += 1,
        }
    }
    Some((Escape::unescape(&s[open + 1..j]), j + 1))
}
