use crate::parsing::inline::kinds::Escape;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceKind {
    Backticks,
    Tildes,
}

impl FenceKind {
    pub fn from_byte(b: u8) -> Option<Self> {
        match b {
            CodeFence::BACKTICK => Some(Self::Backticks),
            CodeFence::TILDE => Some(Self::Tildes),
            _ => None,
        }
    }

    pub fn byte(self) -> u8 {
        match self {
            Self::Backticks => CodeFence::BACKTICK,
            Self::Tildes => CodeFence::TILDE,
        }
    }
}

/// An opening fence line: its kind, run length and info string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenceOpen {
    pub kind: FenceKind,
    pub length: usize,
    pub info: Vec<u8>,
}

pub struct CodeFence;

impl CodeFence {
    pub const BACKTICK: u8 = b'`';
    pub const TILDE: u8 = b'~';
    pub const MIN_LENGTH: usize = 3;

    /// Recognizes an opening fence. `rest` starts at the first non-space byte.
    pub fn open(rest: &[u8]) -> Option<FenceOpen> {
        let kind = FenceKind::from_byte(*rest.first()?)?;
        let length = run_length(rest, kind.byte());
        if length < Self::MIN_LENGTH {
            return None;
        }

        let info = rest[length..].trim_ascii();
        // A backtick fence's info string may not contain backticks, or inline
        // code spans like ```` ```foo``` ```` would open a block.
        if kind == FenceKind::Backticks && info.contains(&Self::BACKTICK) {
            return None;
        }

        Some(FenceOpen {
            kind,
            length,
            info: Escape::unescape(info),
        })
    }

    /// Whether `rest` closes a fence opened with `kind` and `length`.
    ///
    /// The closing run must use the same byte, be at least as long as the
    /// opener, and be followed only by whitespace.
    pub fn closes(kind: FenceKind, length: usize, rest: &[u8]) -> bool {
        let run = run_length(rest, kind.byte());
        run >= length.max(Self::MIN_LENGTH) && rest[run..].iter().all(u8::is_ascii_whitespace)
    }
}

fn run_length(s: &[u8], b: u8) -> usize {
    s.iter().take_while(|&&c| c == b).count()
}
