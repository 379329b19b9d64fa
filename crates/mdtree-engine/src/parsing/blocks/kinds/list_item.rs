use std::sync::OnceLock;

use regex::bytes::Regex;

use crate::parsing::blocks::line::Line;

fn ordered_marker() -> &'static Regex {
    static ORDERED: OnceLock<Regex> = OnceLock::new();
    ORDERED.get_or_init(|| Regex::new(r"^(\d{1,9})([.)])").expect("Invalid ordered marker regex"))
}

/// The marker that introduced a list item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMarker {
    /// `-`, `+` or `*`.
    Bullet(u8),
    /// `1.` or `1)`.
    Ordered { number: u32, delimiter: u8 },
}

impl ListMarker {
    pub fn is_ordered(self) -> bool {
        matches!(self, Self::Ordered { .. })
    }

    /// Whether an item with marker `next` belongs to the same list as an item
    /// with this marker: same bullet character, or same ordered delimiter.
    pub fn continues_list(self, next: ListMarker) -> bool {
        match (self, next) {
            (Self::Bullet(a), Self::Bullet(b)) => a == b,
            (Self::Ordered { delimiter: a, .. }, Self::Ordered { delimiter: b, .. }) => a == b,
            _ => false,
        }
    }
}

/// Geometry of a recognized list item start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListItemStart {
    pub marker: ListMarker,
    /// Columns of indentation before the marker.
    pub marker_offset: usize,
    /// Columns from the marker to the item content.
    pub padding: usize,
    /// The item's first line holds no content.
    pub starts_blank: bool,
}

impl ListItemStart {
    /// Columns a continuation line must be indented to belong to this item.
    pub fn content_offset(self) -> usize {
        self.marker_offset + self.padding
    }
}

pub struct ListItem;

impl ListItem {
    pub const BULLETS: [u8; 3] = [b'-', b'+', b'*'];
    /// Beyond this many spaces after the marker the content is indented code.
    const MAX_PADDING: usize = 4;

    /// Recognizes a list marker at the line's next non-space position and, on
    /// success, advances `line` to the start of the item content.
    ///
    /// When `interrupts_paragraph` is set the item must have content and an
    /// ordered item must start at 1, so ordinary prose like "2009. A year" does
    /// not break a paragraph.
    pub fn start(line: &mut Line<'_>, interrupts_paragraph: bool) -> Option<ListItemStart> {
        if line.is_indented_code() {
            return None;
        }
        let rest = line.rest_from_nonspace();
        let first = *rest.first()?;

        let (marker, marker_len) = if Self::BULLETS.contains(&first) {
            (ListMarker::Bullet(first), 1)
        } else {
            let caps = ordered_marker().captures(rest)?;
            let digits = caps.get(1)?.as_bytes();
            let number = std::str::from_utf8(digits).ok()?.parse::<u32>().ok()?;
            if interrupts_paragraph && number != 1 {
                return None;
            }
            let delimiter = caps.get(2)?.as_bytes()[0];
            (ListMarker::Ordered { number, delimiter }, caps.get(0)?.len())
        };

        match rest.get(marker_len) {
            None | Some(b' ' | b'\t') => {}
            Some(_) => return None,
        }
        if interrupts_paragraph && rest[marker_len..].iter().all(|&b| b == b' ' || b == b'\t') {
            return None;
        }

        let marker_offset = line.indent();
        line.advance_next_nonspace();
        line.advance_offset(marker_len, true);

        let before_spaces = *line;
        let spaces_start = line.column();
        loop {
            line.advance_offset(1, true);
            let within = line.column() - spaces_start <= Self::MAX_PADDING;
            if !(within && matches!(line.peek(), Some(b' ' | b'\t'))) {
                break;
            }
        }
        let starts_blank = line.peek().is_none();
        let spaces_after_marker = line.column() - spaces_start;

        let padding = if spaces_after_marker > Self::MAX_PADDING
            || spaces_after_marker < 1
            || starts_blank
        {
            // Content is indented code or absent: it starts one column after
            // the marker.
            *line = before_spaces;
            if matches!(line.peek(), Some(b' ' | b'\t')) {
                line.advance_offset(1, true);
            }
            marker_len + 1
        } else {
            marker_len + spaces_after_marker
        };

        Some(ListItemStart {
            marker,
            marker_offset,
            padding,
            starts_blank,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn start(s: &str, interrupts: bool) -> Option<(ListItemStart, Vec<u8>)> {
        let mut line = Line::new(s.as_bytes());
        line.find_next_nonspace();
        ListItem::start(&mut line, interrupts).map(|st| (st, line.rest().into_owned()))
    }

    #[rstest]
    #[case("- item", ListMarker::Bullet(b'-'), 2, "item")]
    #[case("* item", ListMarker::Bullet(b'*'), 2, "item")]
    #[case("+   item", ListMarker::Bullet(b'+'), 4, "item")]
    #[case("1. item", ListMarker::Ordered { number: 1, delimiter: b'.' }, 3, "item")]
    #[case("42) item", ListMarker::Ordered { number: 42, delimiter: b')' }, 4, "item")]
    fn recognizes_markers(
        #[case] input: &str,
        #[case] marker: ListMarker,
        #[case] padding: usize,
        #[case] content: &str,
    ) {
        let (st, rest) = start(input, false).unwrap();
        assert_eq!(st.marker, marker);
        assert_eq!(st.padding, padding);
        assert_eq!(rest, content.as_bytes());
    }

    #[test]
    fn indented_code_after_marker_keeps_extra_spaces() {
        let (st, rest) = start("-      code", false).unwrap();
        assert_eq!(st.padding, 2);
        assert_eq!(rest, b"     code");
    }

    #[test]
    fn blank_item() {
        let (st, rest) = start("-", false).unwrap();
        assert!(st.starts_blank);
        assert_eq!(st.padding, 2);
        assert!(rest.is_empty());
    }

    #[test]
    fn marker_offset_counts_leading_indent() {
        let (st, _) = start("  - item", false).unwrap();
        assert_eq!(st.marker_offset, 2);
        assert_eq!(st.content_offset(), 4);
    }

    #[rstest]
    #[case("-item")]
    #[case("1.item")]
    #[case("1234567890. too long")]
    #[case("    - indented code")]
    #[case("text")]
    fn rejects_non_markers(#[case] input: &str) {
        assert!(start(input, false).is_none());
    }

    #[test]
    fn interrupting_paragraph_needs_content_and_start_one() {
        assert!(start("-", true).is_none());
        assert!(start("2. two", true).is_none());
        assert!(start("1. one", true).is_some());
        assert!(start("- x", true).is_some());
    }

    #[test]
    fn list_membership() {
        let dash = ListMarker::Bullet(b'-');
        assert!(dash.continues_list(ListMarker::Bullet(b'-')));
        assert!(!dash.continues_list(ListMarker::Bullet(b'*')));
        let dot = ListMarker::Ordered {
            number: 1,
            delimiter: b'.',
        };
        assert!(dot.continues_list(ListMarker::Ordered {
            number: 7,
            delimiter: b'.'
        }));
        assert!(!dot.continues_list(ListMarker::Ordered {
            number: 2,
            delimiter: b')'
        }));
        assert!(!dot.continues_list(dash));
    }
}
