use std::sync::OnceLock;

use regex::bytes::Regex;

fn atx_marker() -> &'static Regex {
    static ATX_MARKER: OnceLock<Regex> = OnceLock::new();
    ATX_MARKER.get_or_init(|| Regex::new(r"^#{1,6}(?:[ \t]+|$)").expect("Invalid ATX marker regex"))
}

fn atx_closing() -> &'static Regex {
    static ATX_CLOSING: OnceLock<Regex> = OnceLock::new();
    ATX_CLOSING
        .get_or_init(|| Regex::new(r"(?:^|[ \t]+)#+[ \t]*$").expect("Invalid ATX closing regex"))
}

fn setext_underline() -> &'static Regex {
    static SETEXT: OnceLock<Regex> = OnceLock::new();
    SETEXT.get_or_init(|| Regex::new(r"^(?:=+|-+)[ \t]*$").expect("Invalid setext regex"))
}

/// An ATX heading line split into level and raw inline content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtxHeading<'a> {
    pub level: u8,
    pub content: &'a [u8],
}

/// Heading syntax: `#` prefixed (ATX) and underlined (setext) forms.
pub struct Heading;

impl Heading {
    pub const MARKER: u8 = b'#';
    pub const MAX_LEVEL: u8 = 6;

    /// Parses an ATX heading. `rest` starts at the first non-space byte.
    ///
    /// The opening run is 1-6 `#` followed by a space, tab or end of line. An
    /// optional closing run of `#` preceded by whitespace is dropped.
    pub fn atx(rest: &[u8]) -> Option<AtxHeading<'_>> {
        let m = atx_marker().find(rest)?;
        let level = rest[..m.end()]
            .iter()
            .take_while(|&&b| b == Self::MARKER)
            .count();

        let mut content = &rest[m.end()..];
        if let Some(close) = atx_closing().find(content) {
            content = &content[..close.start()];
        }

        Some(AtxHeading {
            level: level as u8,
            content: content.trim_ascii(),
        })
    }

    /// Recognizes a setext underline, returning the heading level it produces.
    ///
    /// `=` underlines make level 1 headings and `-` underlines level 2.
    pub fn setext_level(rest: &[u8]) -> Option<u8> {
        if !setext_underline().is_match(rest) {
            return None;
        }
        match rest.first()? {
            b'=' => Some(1),
            _ => Some(2),
        }
    }
}
