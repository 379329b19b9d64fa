use crate::parsing::blocks::kinds::{FenceKind, ListMarker};

/// Heading level and style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadingData {
    /// 1 to 6.
    pub level: u8,
    /// Written as an underlined (`===`/`---`) heading rather than `#` prefixed.
    pub setext: bool,
}

/// Data shared by all items of a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListData {
    /// Marker of the first item; later items use the same bullet or delimiter.
    pub marker: ListMarker,
    /// No blank lines between items or between blocks inside items.
    pub tight: bool,
}

impl ListData {
    pub fn is_ordered(&self) -> bool {
        self.marker.is_ordered()
    }

    /// The number of the first item of an ordered list.
    pub fn start(&self) -> Option<u32> {
        match self.marker {
            ListMarker::Ordered { number, .. } => Some(number),
            ListMarker::Bullet(_) => None,
        }
    }
}

/// The opening fence of a fenced code block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fence {
    pub kind: FenceKind,
    /// Number of fence characters.
    pub length: usize,
    /// Indentation of the opening fence, stripped from body lines.
    pub offset: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CodeBlockData {
    /// `None` for indented code blocks.
    pub fence: Option<Fence>,
    /// Info string after the opening fence (e.g. a language name).
    pub info: Vec<u8>,
    /// The code, each line terminated by `\n`.
    pub literal: Vec<u8>,
}

impl CodeBlockData {
    pub fn is_fenced(&self) -> bool {
        self.fence.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LinkData {
    pub destination: Vec<u8>,
    /// Empty when the link has no title.
    pub title: Vec<u8>,
}

/// What a node is, together with the data only that kind carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Document,
    BlockQuote,
    List(ListData),
    ListItem(ListMarker),
    Paragraph,
    Heading(HeadingData),
    ThematicBreak,
    CodeBlock(CodeBlockData),
    Text(Vec<u8>),
    Emphasis,
    Strong,
    CodeSpan(Vec<u8>),
    Link(LinkData),
    Image(LinkData),
    LineBreak { hard: bool },
}

impl NodeKind {
    /// Short type name used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Document => "Document",
            Self::BlockQuote => "BlockQuote",
            Self::List(_) => "List",
            Self::ListItem(_) => "ListItem",
            Self::Paragraph => "Paragraph",
            Self::Heading(_) => "Heading",
            Self::ThematicBreak => "ThematicBreak",
            Self::CodeBlock(_) => "CodeBlock",
            Self::Text(_) => "Text",
            Self::Emphasis => "Emphasis",
            Self::Strong => "Strong",
            Self::CodeSpan(_) => "CodeSpan",
            Self::Link(_) => "Link",
            Self::Image(_) => "Image",
            Self::LineBreak { .. } => "LineBreak",
        }
    }

    /// Whether nodes of this kind may have children.
    ///
    /// The walker delivers enter and leave events for container kinds, and a
    /// single enter event for the rest, even when a container happens to be
    /// empty.
    pub fn is_container(&self) -> bool {
        matches!(
            self,
            Self::Document
                | Self::BlockQuote
                | Self::List(_)
                | Self::ListItem(_)
                | Self::Paragraph
                | Self::Heading(_)
                | Self::Emphasis
                | Self::Strong
                | Self::Link(_)
                | Self::Image(_)
        )
    }

    /// Whether this kind occupies whole lines.
    pub fn is_block(&self) -> bool {
        matches!(
            self,
            Self::Document
                | Self::BlockQuote
                | Self::List(_)
                | Self::ListItem(_)
                | Self::Paragraph
                | Self::Heading(_)
                | Self::ThematicBreak
                | Self::CodeBlock(_)
        )
    }

    /// Raw text of text-bearing kinds.
    pub fn literal(&self) -> Option<&[u8]> {
        match self {
            Self::Text(lit) | Self::CodeSpan(lit) => Some(lit),
            Self::CodeBlock(data) => Some(&data.literal),
            _ => None,
        }
    }
}
