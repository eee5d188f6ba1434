pub mod data;

pub use data::{BEN, ENG, LANG_TABLE, Lang};

use crate::words::{RenderError, group::GroupIndex};
use phf::Map;

pub const DEFAULT_LANG: Lang = ENG;

/// Every supported language, in declaration order.
#[inline]
pub fn all_langs() -> &'static [Lang] {
    data::ALL_LANGS
}

impl Lang {
    /// Look a language up by its three-letter code (`"BEN"`) or ISO 639-1
    /// tag (`"bn"`). Case-insensitive.
    pub fn from_code(code: &str) -> Option<Lang> {
        let upper = code.trim().to_uppercase();
        LANG_TABLE.get(upper.as_str()).copied()
    }
}

impl Default for Lang {
    fn default() -> Self {
        DEFAULT_LANG
    }
}

/// Scale words addressed by [`GroupIndex`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScaleWords {
    pub hundred: &'static str,
    pub thousand: &'static str,
    pub lakh: &'static str,
    pub crore: &'static str,
}

impl ScaleWords {
    #[inline(always)]
    pub const fn word(&self, index: GroupIndex) -> &'static str {
        match index {
            GroupIndex::Hundred => self.hundred,
            GroupIndex::Thousand => self.thousand,
            GroupIndex::Lakh => self.lakh,
            GroupIndex::Crore => self.crore,
        }
    }
}

/// Everything the renderer needs to speak one language.
///
/// The phrase table maps the canonical numerals `"0"..="99"` (no leading
/// zero) to their word form. Callers that need different unit words can copy
/// the entry and override fields through [`Context::with_modified`].
///
/// [`Context::with_modified`]: crate::context::Context::with_modified
#[derive(Clone, Copy, Debug)]
pub struct LangEntry {
    pub phrases: &'static Map<&'static str, &'static str>,
    pub scale: ScaleWords,
    pub major_unit: &'static str,
    pub minor_unit: &'static str,
    pub terminal: &'static str,
    pub native_digits: [char; 10],
}

impl LangEntry {
    /// Word form of a canonical one- or two-digit numeral.
    #[inline]
    pub fn phrase(&self, key: &str) -> Result<&'static str, RenderError> {
        self.phrases
            .get(key)
            .copied()
            .ok_or_else(|| RenderError::MissingPhrase {
                key: key.to_owned(),
            })
    }

    /// The word for zero.
    #[inline]
    pub fn zero(&self) -> Result<&'static str, RenderError> {
        self.phrase("0")
    }

    #[inline(always)]
    pub fn native_digit(&self, digit: u8) -> Option<char> {
        self.native_digits.get(usize::from(digit)).copied()
    }

    /// Whether this language writes numerals with ASCII digits.
    #[inline]
    pub fn uses_ascii_digits(&self) -> bool {
        self.native_digits
            .iter()
            .zip('0'..='9')
            .all(|(native, ascii)| *native == ascii)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_code_accepts_both_forms() {
        assert_eq!(Lang::from_code("BEN"), Some(BEN));
        assert_eq!(Lang::from_code("bn"), Some(BEN));
        assert_eq!(Lang::from_code("eng"), Some(ENG));
        assert_eq!(Lang::from_code(" En "), Some(ENG));
        assert_eq!(Lang::from_code("hin"), None);
        assert_eq!(Lang::from_code(""), None);
    }

    #[test]
    fn code_and_name() {
        assert_eq!(BEN.code(), "BEN");
        assert_eq!(BEN.name(), "Bengali");
        assert_eq!(ENG.code(), "ENG");
        assert_eq!(Lang::default(), ENG);
        assert_eq!(all_langs(), &[BEN, ENG]);
    }

    #[test]
    fn scale_words_by_index() {
        let scale = ENG.entry().scale;
        assert_eq!(scale.word(GroupIndex::Hundred), "Hundred");
        assert_eq!(scale.word(GroupIndex::Thousand), "Thousand");
        assert_eq!(scale.word(GroupIndex::Lakh), "Lakh");
        assert_eq!(scale.word(GroupIndex::Crore), "Crore");
        assert_eq!(BEN.entry().scale.word(GroupIndex::Crore), "কোটি");
    }

    #[test]
    fn phrase_lookup_miss_is_an_error() {
        let entry = ENG.entry();
        assert_eq!(entry.phrase("42").unwrap(), "Forty Two");
        assert_eq!(entry.zero().unwrap(), "Zero");
        assert!(matches!(
            entry.phrase("05"),
            Err(RenderError::MissingPhrase { ref key }) if key == "05"
        ));
        assert!(entry.phrase("100").is_err());
    }

    #[test]
    fn native_digits() {
        assert!(ENG.entry().uses_ascii_digits());
        assert!(!BEN.entry().uses_ascii_digits());
        assert_eq!(BEN.entry().native_digit(7), Some('৭'));
        assert_eq!(BEN.entry().native_digit(10), None);
    }
}
