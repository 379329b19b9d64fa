use std::sync::OnceLock;

use regex::bytes::Regex;

fn uri() -> &'static Regex {
    static URI: OnceLock<Regex> = OnceLock::new();
    URI.get_or_init(|| {
        Regex::new(r"^<([A-Za-z][A-Za-z0-9.+-]{1,31}:[^<>\x00-\x20]*)>")
            .expect("Invalid autolink URI regex")
    })
}

fn email() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(
            r"^<([a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*)>",
        )
        .expect("Invalid autolink email regex")
    })
}

/// An autolink `<scheme:rest>` or `<user@example.com>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Autolink {
    pub destination: Vec<u8>,
    /// Link text: the address exactly as written.
    pub text: Vec<u8>,
    /// Bytes consumed, including the angle brackets.
    pub len: usize,
}

impl Autolink {
    pub const OPEN: u8 = b'<';
    const MAILTO: &'static [u8] = b"mailto:";

    /// Parses an autolink at the start of `s`. Email addresses get a
    /// `mailto:` destination.
    pub fn parse(s: &[u8]) -> Option<Self> {
        if let Some(caps) = uri().captures(s) {
            let addr = caps.get(1)?.as_bytes();
            return Some(Self {
                destination: addr.to_vec(),
                text: addr.to_vec(),
                len: caps.get(0)?.end(),
            });
        }
        let caps = email().captures(s)?;
        let addr = caps.get(1)?.as_bytes();
        Some(Self {
            destination: [Self::MAILTO, addr].concat(),
            text: addr.to_vec(),
            len: caps.get(0)?.end(),
        })
    }
}
