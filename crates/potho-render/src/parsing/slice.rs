use super::span::Span;

/// Returns the text a span covers, or an empty string if the span does not
/// fall on valid boundaries of `text`.
pub fn slice(text: &str, sp: Span) -> &str {
    text.get(sp.start..sp.end).unwrap_or("")
}

/// Extracts text for a span, truncating to `max` bytes with "..." suffix if needed.
///
/// Used for human-readable snapshot output. Truncation backs off to the
/// nearest char boundary so multi-byte text never splits.
pub fn preview(text: &str, sp: Span, max: usize) -> String {
    let s = slice(text, sp);
    if s.len() <= max {
        return s.to_string();
    }
    let mut cut = max;
    while !s.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}...", &s[..cut])
}
