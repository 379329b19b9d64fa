use crate::parsing::blocks::line::Line;

/// Blockquote block type with owned delimiter constant.
///
/// All blockquote-related syntax knowledge lives here, not scattered in the
/// builder. The same rule both opens a quote and continues an open one.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: u8 = b'>';

    /// Consumes a `>` marker and one optional following space or tab.
    ///
    /// Expects `find_next_nonspace` to have been called on `line`. Returns
    /// `false` without consuming anything when the line has no marker within
    /// three columns of indentation.
    pub fn consume_marker(line: &mut Line<'_>) -> bool {
        if line.is_indented_code() || line.peek_nonspace() != Some(Self::PREFIX) {
            return false;
        }
        line.advance_next_nonspace();
        line.advance_offset(1, false);
        if matches!(line.peek(), Some(b' ' | b'\t')) {
            line.advance_offset(1, true);
        }
        true
    }
}
