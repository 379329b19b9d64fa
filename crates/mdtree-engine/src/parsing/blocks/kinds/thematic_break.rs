/// Thematic break (`***`, `---`, `___`).
pub struct ThematicBreak;

impl ThematicBreak {
    pub const MARKERS: [u8; 3] = [b'*', b'-', b'_'];
    pub const MIN_COUNT: usize = 3;

    /// `rest` starts at the first non-space byte. Three or more of the same
    /// marker with only spaces or tabs between them.
    pub fn matches(rest: &[u8]) -> bool {
        let Some(&marker) = rest.first() else {
            return false;
        };
        if !Self::MARKERS.contains(&marker) {
            return false;
        }

        let mut count = 0;
        for &b in rest {
            match b {
                b if b == marker => count += 1,
                b' ' | b'\t' => {}
                _ => return false,
            }
        }
        count >= Self::MIN_COUNT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("***", true)]
    #[case("- - -", true)]
    #[case("_____", true)]
    #[case("**  * ** * **", true)]
    #[case("--", false)]
    #[case("*-*", false)]
    #[case("--- a", false)]
    #[case("", false)]
    fn recognizes_breaks(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(ThematicBreak::matches(input.as_bytes()), expected);
    }
}
