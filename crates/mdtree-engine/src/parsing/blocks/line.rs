use std::borrow::Cow;

/// Tab stops are every four columns.
pub const TAB_STOP: usize = 4;
/// Indentation (in columns) at which a line becomes indented code.
pub const CODE_INDENT: usize = 4;

/// A cursor over one line of input, tracking both byte offset and column.
///
/// Container prefixes are consumed from the left as each open block claims
/// the line. Tabs advance to the next tab stop; when a prefix ends part way
/// through a tab, the remaining columns of that tab are kept as spaces.
#[derive(Debug, Clone, Copy)]
pub struct Line<'a> {
    bytes: &'a [u8],
    offset: usize,
    column: usize,
    partially_consumed_tab: bool,
    next_nonspace: usize,
    next_nonspace_column: usize,
    blank: bool,
}

impl<'a> Line<'a> {
    /// `bytes` is the line content without its line ending.
    pub fn new(bytes: &'a [u8]) -> Self {
        let mut line = Self {
            bytes,
            offset: 0,
            column: 0,
            partially_consumed_tab: false,
            next_nonspace: 0,
            next_nonspace_column: 0,
            blank: false,
        };
        line.find_next_nonspace();
        line
    }

    /// Scans forward from the current offset to the next non-space byte,
    /// recording its position, the indentation and whether the rest is blank.
    pub fn find_next_nonspace(&mut self) {
        let mut i = self.offset;
        let mut cols = self.column;
        while let Some(&b) = self.bytes.get(i) {
            match b {
                b' ' => cols += 1,
                b'\t' => cols += TAB_STOP - cols % TAB_STOP,
                _ => break,
            }
            i += 1;
        }
        self.blank = i >= self.bytes.len();
        self.next_nonspace = i;
        self.next_nonspace_column = cols;
    }

    /// Columns between the current position and the next non-space byte.
    pub fn indent(&self) -> usize {
        self.next_nonspace_column - self.column
    }

    pub fn is_indented_code(&self) -> bool {
        self.indent() >= CODE_INDENT
    }

    /// Whether the line holds only whitespace from the current position.
    pub fn is_blank(&self) -> bool {
        self.blank
    }

    pub fn column(&self) -> usize {
        self.column
    }

    /// The byte at the current offset.
    pub fn peek(&self) -> Option<u8> {
        self.bytes.get(self.offset).copied()
    }

    /// The first non-space byte from the current position.
    pub fn peek_nonspace(&self) -> Option<u8> {
        self.bytes.get(self.next_nonspace).copied()
    }

    /// Raw bytes from the next non-space byte to the end of the line.
    pub fn rest_from_nonspace(&self) -> &'a [u8] {
        &self.bytes[self.next_nonspace.min(self.bytes.len())..]
    }

    pub fn advance_next_nonspace(&mut self) {
        self.offset = self.next_nonspace;
        self.column = self.next_nonspace_column;
        self.partially_consumed_tab = false;
    }

    /// Advances by `count` bytes, or by `count` columns when `columns` is set.
    ///
    /// Advancing by columns may stop inside a tab, leaving it partially consumed.
    pub fn advance_offset(&mut self, mut count: usize, columns: bool) {
        while count > 0 {
            let Some(&b) = self.bytes.get(self.offset) else {
                break;
            };
            if b == b'\t' {
                let to_tab_stop = TAB_STOP - self.column % TAB_STOP;
                if columns {
                    self.partially_consumed_tab = to_tab_stop > count;
                    let advance = to_tab_stop.min(count);
                    self.column += advance;
                    if !self.partially_consumed_tab {
                        self.offset += 1;
                    }
                    count -= advance;
                } else {
                    self.partially_consumed_tab = false;
                    self.column += to_tab_stop;
                    self.offset += 1;
                    count -= 1;
                }
            } else {
                self.partially_consumed_tab = false;
                self.offset += 1;
                self.column += 1;
                count -= 1;
            }
        }
    }

    /// Consumes up to `max` columns of leading spaces or tabs.
    pub fn skip_spaces(&mut self, max: usize) {
        let mut remaining = max;
        while remaining > 0 && matches!(self.peek(), Some(b' ' | b'\t')) {
            self.advance_offset(1, true);
            remaining -= 1;
        }
    }

    /// Whether the whole line has been consumed.
    pub fn at_end(&self) -> bool {
        self.offset >= self.bytes.len()
    }

    /// Consumes the rest of the line.
    pub fn finish(&mut self) {
        self.offset = self.bytes.len();
        self.partially_consumed_tab = false;
    }

    /// The line content from the current position, with any partially consumed
    /// tab expanded to the spaces it still covers.
    pub fn rest(&self) -> Cow<'a, [u8]> {
        if self.offset >= self.bytes.len() {
            return Cow::Borrowed(&[]);
        }
        if self.partially_consumed_tab {
            let spaces = TAB_STOP - self.column % TAB_STOP;
            let mut owned = vec![b' '; spaces];
            owned.extend_from_slice(&self.bytes[self.offset + 1..]);
            Cow::Owned(owned)
        } else {
            Cow::Borrowed(&self.bytes[self.offset..])
        }
    }
}
