/// Body assembly shared by fenced and indented code blocks.
pub struct CodeBody;

impl CodeBody {
    /// Concatenates body lines, each terminated by `\n`.
    pub fn fenced(lines: &[Vec<u8>]) -> Vec<u8> {
        let mut out = Vec::with_capacity(lines.iter().map(|l| l.len() + 1).sum());
        for line in lines {
            out.extend_from_slice(line);
            out.push(b'\n');
        }
        out
    }

    /// Like [`CodeBody::fenced`], but trailing blank lines are not part of an
    /// indented code block.
    pub fn indented(lines: &[Vec<u8>]) -> Vec<u8> {
        let keep = lines
            .iter()
            .rposition(|l| !l.trim_ascii().is_empty())
            .map_or(0, |i| i + 1);
        Self::fenced(&lines[..keep])
    }
}
