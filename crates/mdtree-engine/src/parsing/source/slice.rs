/// Renders bytes as text, replacing invalid UTF-8 sequences.
///
/// Literals keep the raw bytes; this is only for human-readable output.
pub fn lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// Renders bytes as text, truncating to `max` bytes with "..." suffix if needed.
///
/// Used for one-line node diagnostics. Truncation happens on the raw bytes, so
/// a multi-byte character cut in half shows as a replacement character.
pub fn preview(bytes: &[u8], max: usize) -> String {
    if bytes.len() > max {
        let mut s = lossy(&bytes[..max]);
        s.push_str("...");
        s
    } else {
        lossy(bytes)
    }
}
