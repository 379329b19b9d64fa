use super::{
    kinds::{BlockQuote, CodeFence, FenceOpen, Heading, ListItem, ListItemStart, ThematicBreak},
    line::{CODE_INDENT, Line},
};

/// A block start recognized at the current position of a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockStart {
    /// The `>` marker has been consumed.
    BlockQuote,
    /// The whole line has been consumed.
    AtxHeading { level: u8, content: Vec<u8> },
    /// The whole line has been consumed; the info string is in `open`.
    Fence { open: FenceOpen, offset: usize },
    /// Turns the open paragraph into a heading. The line has been consumed.
    SetextHeading { level: u8 },
    /// The whole line has been consumed.
    ThematicBreak,
    /// The line is positioned at the item content.
    ListItem(ListItemStart),
    /// Four columns of indentation have been consumed.
    IndentedCode,
}

/// Where the line is being matched.
#[derive(Debug, Clone, Copy, Default)]
pub struct StartContext {
    /// The innermost matched container is a paragraph.
    pub container_is_paragraph: bool,
    /// The deepest open block is a paragraph, matched or not.
    pub tip_is_paragraph: bool,
}

/// Bytes that can begin a non-indented block start.
fn maybe_special(b: u8) -> bool {
    matches!(b, b'#' | b'`' | b'~' | b'>' | b'*' | b'+' | b'-' | b'=' | b'_') || b.is_ascii_digit()
}

/// Tries each block start in precedence order.
///
/// Expects `find_next_nonspace` to have been called on `line`. On success the
/// line is advanced past whatever the start consumed; on failure it is left
/// untouched.
pub fn try_open(line: &mut Line<'_>, cx: StartContext) -> Option<BlockStart> {
    if line.is_indented_code() {
        return (!cx.tip_is_paragraph && !line.is_blank()).then(|| {
            line.advance_offset(CODE_INDENT, true);
            BlockStart::IndentedCode
        });
    }
    if !line.peek_nonspace().is_some_and(maybe_special) {
        return None;
    }

    if BlockQuote::consume_marker(line) {
        return Some(BlockStart::BlockQuote);
    }

    let rest = line.rest_from_nonspace();
    if let Some(atx) = Heading::atx(rest) {
        let start = BlockStart::AtxHeading {
            level: atx.level,
            content: atx.content.to_vec(),
        };
        line.finish();
        return Some(start);
    }
    if let Some(open) = CodeFence::open(rest) {
        let offset = line.indent();
        line.finish();
        return Some(BlockStart::Fence { open, offset });
    }
    if cx.container_is_paragraph
        && let Some(level) = Heading::setext_level(rest)
    {
        line.finish();
        return Some(BlockStart::SetextHeading { level });
    }
    if ThematicBreak::matches(rest) {
        line.finish();
        return Some(BlockStart::ThematicBreak);
    }
    ListItem::start(line, cx.container_is_paragraph).map(BlockStart::ListItem)
}
