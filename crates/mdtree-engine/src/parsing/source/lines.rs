use super::span::Span;

/// A reference to a single line of the source with its byte span.
#[derive(Debug, Clone, Copy)]
pub struct LineRef<'a> {
    /// Byte span of this line in the source (includes the line ending if present).
    pub span: Span,
    /// The line content without its `\n` or `\r\n` ending.
    pub text: &'a [u8],
}

/// Returns an iterator over lines with their byte spans.
///
/// Line endings are kept in `span` so consecutive spans tile the whole input,
/// but stripped from `text`. A trailing line without a newline is still yielded;
/// an input ending in `\n` does not produce an extra empty line.
pub fn lines_with_spans(src: &[u8]) -> impl Iterator<Item = LineRef<'_>> + '_ {
    let mut offset = 0usize;
    std::iter::from_fn(move || {
        if offset >= src.len() {
            return None;
        }
        let start = offset;
        let rest = &src[start..];
        let (len, text_len) = match rest.iter().position(|&b| b == b'\n') {
            Some(nl) => {
                let text_len = if nl > 0 && rest[nl - 1] == b'\r' {
                    nl - 1
                } else {
                    nl
                };
                (nl + 1, text_len)
            }
            None => (rest.len(), rest.len()),
        };
        offset += len;
        Some(LineRef {
            span: Span {
                start,
                end: offset,
            },
            text: &rest[..text_len],
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(src: &str) -> Vec<&[u8]> {
        lines_with_spans(src.as_bytes()).map(|l| l.text).collect()
    }

    #[test]
    fn splits_on_newlines() {
        assert_eq!(texts("a\nbc\n"), vec![&b"a"[..], &b"bc"[..]]);
    }

    #[test]
    fn keeps_final_line_without_newline() {
        assert_eq!(texts("a\nb"), vec![&b"a"[..], &b"b"[..]]);
    }

    #[test]
    fn strips_carriage_returns() {
        assert_eq!(texts("a\r\nb\r\n"), vec![&b"a"[..], &b"b"[..]]);
    }

    #[test]
    fn spans_tile_the_input() {
        let src = b"one\r\n\ntwo";
        let spans: Vec<_> = lines_with_spans(src).map(|l| l.span).collect();
        assert_eq!(
            spans,
            vec![Span::new(0, 5), Span::new(5, 6), Span::new(6, 9)]
        );
    }

    #[test]
    fn empty_input_has_no_lines() {
        assert_eq!(lines_with_spans(b"").count(), 0);
    }
}
