/// Code span inline type with owned delimiter constant.
///
/// Code spans are "raw zones": no other inline parsing occurs inside them,
/// backslash escapes included.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: u8 = b'`';

    /// Length of the backtick run at the start of `s`.
    pub fn run_length(s: &[u8]) -> usize {
        s.iter().take_while(|&&b| b == Self::TICK).count()
    }

    /// Parses a code span at the start of `s`, which must begin with a
    /// backtick run.
    ///
    /// The span closes at the next run of exactly the same length. Returns the
    /// normalized content and the number of bytes consumed, or `None` when no
    /// closing run exists.
    pub fn parse(s: &[u8]) -> Option<(Vec<u8>, usize)> {
        let open = Self::run_length(s);
        if open == 0 {
            return None;
        }
        let mut i = open;
        while i < s.len() {
            if s[i] != Self::TICK {
                i += 1;
                continue;
            }
            let run = Self::run_length(&s[i..]);
            if run == open {
                return Some((Self::normalize(&s[open..i]), i + run));
            }
            i += run;
        }
        None
    }

    /// Line endings become spaces; one leading and one trailing space are
    /// stripped when both are present and the content is not all spaces.
    fn normalize(content: &[u8]) -> Vec<u8> {
        let mut out: Vec<u8> = content
            .iter()
            .map(|&b| if b == b'\n' { b' ' } else { b })
            .collect();
        if out.len() >= 2
            && out.first() == Some(&b' ')
            && out.last() == Some(&b' ')
            && out.iter().any(|&b| b != b' ')
        {
            out.pop();
            out.remove(0);
        }
        out
    }
}
