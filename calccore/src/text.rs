//! UTF-8 safe text helpers.
//!
//! Display text can carry multi-byte glyphs (`×`, `÷`, `√`), so byte-indexed
//! slicing is never used on it directly.

/// Snap a byte position back to the nearest valid UTF-8 character boundary.
pub fn snap_to_char_boundary(s: &str, byte_pos: usize) -> usize {
    if byte_pos >= s.len() {
        return s.len();
    }
    (0..=byte_pos)
        .rev()
        .find(|&pos| s.is_char_boundary(pos))
        .unwrap_or(0)
}

/// The first `max_chars` characters of `s`.
pub fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((byte_pos, _)) => &s[..snap_to_char_boundary(s, byte_pos)],
        None => s,
    }
}
