use crate::lang::{BEN, Lang};
use std::borrow::Cow;

/// Replace ASCII digits `0`-`9` with the language's native glyphs. Every other
/// character, including digits of other scripts, passes through.
///
/// Zero-copy when the language writes ASCII digits or `text` has none.
pub fn transliterate_digits(text: &str, lang: Lang) -> Cow<'_, str> {
    let entry = lang.entry();
    if entry.uses_ascii_digits() || !text.bytes().any(|b| b.is_ascii_digit()) {
        return Cow::Borrowed(text);
    }

    // Bengali digits are 3 bytes each in UTF-8
    let mut out = String::with_capacity(text.len() * 3);
    for c in text.chars() {
        let native = c
            .to_digit(10)
            .and_then(|d| entry.native_digit(d as u8))
            .unwrap_or(c);
        out.push(native);
    }
    Cow::Owned(out)
}

#[inline]
pub fn to_bengali_digits(text: &str) -> Cow<'_, str> {
    transliterate_digits(text, BEN)
}
