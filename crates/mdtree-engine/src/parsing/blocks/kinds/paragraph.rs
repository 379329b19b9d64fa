/// Paragraph block type.
///
/// Paragraphs have no delimiters - they are the default leaf block when no
/// other block opener matches. Inline parsing is applied to their content.
pub struct Paragraph;

impl Paragraph {
    /// Joins collected lines into the raw inline text of the paragraph.
    ///
    /// Leading whitespace is dropped from every line and trailing whitespace
    /// from the last one. Trailing spaces on inner lines are kept, since two
    /// or more of them before the newline make a hard line break.
    pub fn raw_content(lines: &[Vec<u8>]) -> Vec<u8> {
        let mut out = Vec::new();
        for (i, line) in lines.iter().enumerate() {
            if i > 0 {
                out.push(b'\n');
            }
            out.extend_from_slice(line.trim_ascii_start());
        }
        let trimmed = out.trim_ascii_end().len();
        out.truncate(trimmed);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_and_trims_lines() {
        let lines = vec![b"  first  ".to_vec(), b"\tsecond  ".to_vec()];
        assert_eq!(Paragraph::raw_content(&lines), b"first  \nsecond");
    }

    #[test]
    fn single_line() {
        assert_eq!(Paragraph::raw_content(&[b"only".to_vec()]), b"only");
    }
}
