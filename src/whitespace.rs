//! Whitespace normalization for assembled phrases.
//!
//! Every whitespace run (ASCII or Unicode `White_Space`) becomes one ASCII
//! space and the edges are trimmed. Already-clean text is returned as
//! `Cow::Borrowed` without allocating, so normalizing twice is free and
//! yields the same string as normalizing once.
use std::borrow::Cow;

/// Does `text` contain leading, trailing, repeated or non-space whitespace?
pub fn needs_normalization(text: &str) -> bool {
    let bytes = text.as_bytes();
    if bytes.is_empty() {
        return false;
    }

    // Fast path: pure ASCII, byte-level scan
    if text.is_ascii() {
        if bytes[0].is_ascii_whitespace() || bytes[bytes.len() - 1].is_ascii_whitespace() {
            return true;
        }
        let mut prev_ws = false;
        for &b in bytes {
            let is_ws = b.is_ascii_whitespace();
            if is_ws && (prev_ws || b != b' ') {
                return true;
            }
            prev_ws = is_ws;
        }
        return false;
    }

    // Leading whitespace counts as a run that started before the text.
    let mut prev_ws = true;
    for c in text.chars() {
        let is_ws = c.is_whitespace();
        if is_ws && (prev_ws || c != ' ') {
            return true;
        }
        prev_ws = is_ws;
    }
    prev_ws
}

/// Collapse whitespace runs to a single space and trim both ends.
pub fn normalize_whitespace(text: Cow<'_, str>) -> Cow<'_, str> {
    if !needs_normalization(&text) {
        return text;
    }
    let mut out = String::with_capacity(text.len());
    for word in text.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_text_is_borrowed() {
        let input = "One Hundred Taka Only";
        let result = normalize_whitespace(Cow::Borrowed(input));
        assert!(matches!(result, Cow::Borrowed(s) if s.as_ptr() == input.as_ptr()));
    }

    #[test]
    fn collapses_and_trims() {
        assert_eq!(normalize_whitespace("  One   Taka  Only ".into()), "One Taka Only");
        assert_eq!(normalize_whitespace("One\tTaka\nOnly".into()), "One Taka Only");
        assert_eq!(normalize_whitespace("   ".into()), "");
        assert_eq!(normalize_whitespace("".into()), "");
    }

    #[test]
    fn unicode_whitespace() {
        assert_eq!(
            normalize_whitespace("এক\u{00A0}\u{2003}টাকা  মাত্র\u{3000}".into()),
            "এক টাকা মাত্র"
        );
        assert!(!needs_normalization("এক টাকা মাত্র"));
        assert!(needs_normalization(" এক"));
        assert!(needs_normalization("এক "));
    }

    #[test]
    fn detection() {
        assert!(!needs_normalization("a"));
        assert!(!needs_normalization("a b c"));
        assert!(needs_normalization("a  b"));
        assert!(needs_normalization("a\tb"));
        assert!(needs_normalization(" a"));
        assert!(needs_normalization("a "));
    }

    #[test]
    fn idempotent() {
        let once = normalize_whitespace(" \t Twelve  Lakh \u{2009} Only ".into()).into_owned();
        let twice = normalize_whitespace(Cow::Borrowed(once.as_str()));
        assert_eq!(once, twice);
        assert!(matches!(twice, Cow::Borrowed(_)));
    }
}
