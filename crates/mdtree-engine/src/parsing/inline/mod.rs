//! # Inline Parsing
//!
//! Turns the raw text of a paragraph or heading into Text, Emphasis, Strong,
//! CodeSpan, Link, Image and LineBreak nodes.
//!
//! ## Architecture
//!
//! Inline parsing is separate from block parsing and runs once per
//! inline-eligible block after all blocks are closed. It works on bytes;
//! invalid UTF-8 is carried through as text.
//!
//! ## Modules
//!
//! - **`types`**: `Inline`, an owned node with children, attached to the
//!   arena by `Document::append_inlines`
//! - **`kinds`**: Inline-specific types with owned delimiters
//! - **`cursor`**: `Cursor` for byte-by-byte parsing with character lookaround
//! - **`parser`**: `parse_inline()` with the delimiter and bracket stacks
//!
//! ## Raw Zone Precedence
//!
//! Code spans and autolinks take precedence: `` `*a*` `` parses as a single
//! CodeSpan, not as text containing emphasis.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::parse_inline;
pub use types::Inline;
