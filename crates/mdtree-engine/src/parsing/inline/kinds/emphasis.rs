/// Emphasis delimiter runs: `*` and `_`.
pub struct Emphasis;

/// Whether a delimiter run may open and/or close emphasis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flanking {
    pub can_open: bool,
    pub can_close: bool,
}

impl Emphasis {
    pub const STAR: u8 = b'*';
    pub const UNDERSCORE: u8 = b'_';

    pub fn is_delimiter(b: u8) -> bool {
        b == Self::STAR || b == Self::UNDERSCORE
    }

    /// Classifies a run of `ch` from the characters around it. `None` means
    /// the start or end of the inline content, which counts as whitespace.
    ///
    /// `_` may not open or close inside a word.
    pub fn flanking(ch: u8, before: Option<char>, after: Option<char>) -> Flanking {
        let before_ws = before.is_none_or(char::is_whitespace);
        let after_ws = after.is_none_or(char::is_whitespace);
        let before_punct = before.is_some_and(is_punctuation);
        let after_punct = after.is_some_and(is_punctuation);

        let left = !after_ws && (!after_punct || before_ws || before_punct);
        let right = !before_ws && (!before_punct || after_ws || after_punct);

        if ch == Self::UNDERSCORE {
            Flanking {
                can_open: left && (!right || before_punct),
                can_close: right && (!left || after_punct),
            }
        } else {
            Flanking {
                can_open: left,
                can_close: right,
            }
        }
    }

    /// The "rule of three": a run that can both open and close cannot pair
    /// with another when their combined length is a multiple of three,
    /// unless both lengths are.
    pub fn blocks_pair(opener: (usize, Flanking), closer: (usize, Flanking)) -> bool {
        let (open_len, open_flank) = opener;
        let (close_len, close_flank) = closer;
        (close_flank.can_open || open_flank.can_close)
            && (open_len + close_len) % 3 == 0
            && !(open_len % 3 == 0 && close_len % 3 == 0)
    }
}

/// ASCII punctuation plus the common Unicode punctuation blocks.
fn is_punctuation(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_punctuation();
    }
    matches!(
        c,
        '\u{00A1}'..='\u{00BF}'
            | '\u{2010}'..='\u{2027}'
            | '\u{2030}'..='\u{205E}'
            | '\u{3001}'..='\u{3003}'
            | '\u{3008}'..='\u{3011}'
            | '\u{FF01}'..='\u{FF0F}'
    )
}
