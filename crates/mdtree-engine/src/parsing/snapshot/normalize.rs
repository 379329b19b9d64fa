use crate::tree::{Document, OutlineOptions, outline};

/// Renders `doc` as an outline with block spans.
///
/// ```text
/// Document @0..8
///   Heading(1) @0..8
///     Text "Title"
/// ```
pub fn normalize(doc: &Document) -> String {
    outline(doc.root(), OutlineOptions { spans: true })
}
