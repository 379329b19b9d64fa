//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`Escape`**: `BACKSLASH`, escapable ASCII punctuation and unescaping
//! - **`CodeSpan`**: `TICK = b'\`'`, matching backtick runs of equal length
//! - **`Emphasis`**: `*` and `_` delimiter runs and their flanking rules
//! - **`InlineLink`**: `[`, `![`, `]` and the `(destination "title")` tail
//! - **`Autolink`**: `<scheme:...>` and `<user@host>` forms
//!
//! ## Design Principle
//!
//! All delimiter constants live here, not scattered in parser code.
//! The parser calls these constants; it never hardcodes `[` or `` ` ``.

pub mod autolink;
pub mod code_span;
pub mod emphasis;
pub mod escape;
pub mod link;

pub use autolink::Autolink;
pub use code_span::CodeSpan;
pub use emphasis::{Emphasis, Flanking};
pub use escape::Escape;
pub use link::{InlineLink, LinkTail};
