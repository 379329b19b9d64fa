//! # Block Kinds
//!
//! Block-specific types that own their syntax delimiters. The builder asks
//! these types whether a line opens or continues a block; it never hardcodes
//! `>`, `#` or fence characters itself.

pub mod block_quote;
pub mod code_block;
pub mod code_fence;
pub mod heading;
pub mod list_item;
pub mod paragraph;
pub mod thematic_break;

pub use block_quote::BlockQuote;
pub use code_block::CodeBody;
pub use code_fence::{CodeFence, FenceKind, FenceOpen};
pub use heading::{AtxHeading, Heading};
pub use list_item::{ListItem, ListItemStart, ListMarker};
pub use paragraph::Paragraph;
pub use thematic_break::ThematicBreak;
