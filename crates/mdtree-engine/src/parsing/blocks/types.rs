use crate::tree::{Fence, NodeId, NodeKind};

use super::kinds::ListItemStart;

/// Parser-side state of a block that is still open.
///
/// Headings and thematic breaks never appear here: they are complete after a
/// single line and go straight into the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockState {
    Document,
    BlockQuote,
    List,
    ListItem(ListItemStart),
    Paragraph {
        /// Line contents after container prefixes.
        lines: Vec<Vec<u8>>,
    },
    FencedCode {
        fence: Fence,
        lines: Vec<Vec<u8>>,
    },
    IndentedCode {
        lines: Vec<Vec<u8>>,
    },
}

impl BlockState {
    /// Whether a node of kind `child` may be appended inside this block.
    ///
    /// List items only live in lists, and lists only hold list items.
    pub fn can_contain(&self, child: &NodeKind) -> bool {
        match self {
            Self::Document | Self::BlockQuote | Self::ListItem(_) => {
                child.is_block() && !matches!(child, NodeKind::ListItem(_))
            }
            Self::List => matches!(child, NodeKind::ListItem(_)),
            Self::Paragraph { .. } | Self::FencedCode { .. } | Self::IndentedCode { .. } => false,
        }
    }

    /// Leaf blocks that collect the remainder of each line.
    pub fn lines_mut(&mut self) -> Option<&mut Vec<Vec<u8>>> {
        match self {
            Self::Paragraph { lines }
            | Self::FencedCode { lines, .. }
            | Self::IndentedCode { lines } => Some(lines),
            _ => None,
        }
    }

    pub fn accepts_lines(&self) -> bool {
        matches!(
            self,
            Self::Paragraph { .. } | Self::FencedCode { .. } | Self::IndentedCode { .. }
        )
    }

    pub fn is_paragraph(&self) -> bool {
        matches!(self, Self::Paragraph { .. })
    }

    pub fn is_code(&self) -> bool {
        matches!(self, Self::FencedCode { .. } | Self::IndentedCode { .. })
    }
}

/// An open block: its arena node plus the state needed to continue it.
#[derive(Debug, Clone)]
pub struct OpenBlock {
    pub id: NodeId,
    pub state: BlockState,
}
