//! # Text Formatting
//!
//! Description preview truncation for result and product cards.
//!
//! ## Truncation Contract
//! - length > 100 characters → first 100 characters + "…"
//! - length ≤ 100 characters → unchanged
//!
//! Truncation counts characters, not bytes, so multi-byte text never gets
//! split inside a code point.

use crate::DESCRIPTION_PREVIEW_CHARS;

/// Truncates a description to the preview length.
///
/// ## Example
/// ```rust
/// use shopfront_core::text::truncate_description;
///
/// assert_eq!(truncate_description("short"), "short");
/// assert_eq!(truncate_description(&"x".repeat(150)).chars().count(), 101);
/// ```
pub fn truncate_description(description: &str) -> String {
    truncate_chars(description, DESCRIPTION_PREVIEW_CHARS)
}

/// Truncates `text` to at most `max` characters, appending an ellipsis when
/// anything was cut.
pub fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }

    let mut preview: String = text.chars().take(max).collect();
    preview.push('…');
    preview
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_description_unchanged() {
        assert_eq!(truncate_description("Compact and light"), "Compact and light");
    }

    #[test]
    fn test_exactly_100_chars_unchanged() {
        let text = "a".repeat(100);
        assert_eq!(truncate_description(&text), text);
    }

    #[test]
    fn test_long_description_cut_at_100_plus_ellipsis() {
        let text = "b".repeat(101);
        let preview = truncate_description(&text);
        assert_eq!(preview.chars().count(), 101);
        assert!(preview.ends_with('…'));
        assert!(preview.starts_with(&"b".repeat(100)));
    }

    #[test]
    fn test_truncation_is_char_based_not_byte_based() {
        // 150 multi-byte characters; byte-based slicing would panic or split
        // a code point.
        let text = "日".repeat(150);
        let preview = truncate_description(&text);
        assert_eq!(preview.chars().count(), 101);
        assert!(preview.starts_with(&"日".repeat(100)));
    }

    #[test]
    fn test_empty_description() {
        assert_eq!(truncate_description(""), "");
    }
}
