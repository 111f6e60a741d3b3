//! Small text helpers for display surfaces.

/// Truncate `text` to at most `max_chars` characters, appending `...` when
/// anything was cut.
///
/// Counts characters, not bytes, so multibyte input never splits inside a
/// code point.
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let mut cut: String = text.chars().take(max_chars).collect();
    cut.push_str("...");
    cut
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(truncate("hello", 10), "hello");
    }

    #[test]
    fn text_at_the_limit_is_untouched() {
        assert_eq!(truncate("hello", 5), "hello");
    }

    #[test]
    fn long_text_is_cut_with_ellipsis() {
        assert_eq!(truncate("hello world", 5), "hello...");
    }

    #[test]
    fn counts_characters_not_bytes() {
        assert_eq!(truncate("héllo wörld", 7), "héllo w...");
    }

    #[test]
    fn zero_limit_keeps_only_the_ellipsis() {
        assert_eq!(truncate("hi", 0), "...");
        assert_eq!(truncate("", 0), "");
    }
}
