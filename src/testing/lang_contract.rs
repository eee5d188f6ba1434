use crate::{
    context::Context,
    lang::{Lang, all_langs},
    whitespace::needs_normalization,
    words::{assemble::assemble, group::GroupIndex},
};

/// Assert that a language satisfies every table contract the renderer relies on.
///
/// 1. `phrase_table_is_complete` → keys are exactly `"0"..="99"`, each non-empty
/// 2. `phrases_are_normalized` → no stray whitespace inside any table word
/// 3. `scale_words_are_distinct` → four non-empty, pairwise different scale words
/// 4. `connector_words_present` → major, minor and terminal words set and distinct
/// 5. `renders_every_group_width` → sample amounts render without error
///
/// A failure means the renderer would degrade for that language.
#[macro_export]
macro_rules! assert_lang_contract {
    ($lang:expr) => {
        $crate::testing::lang_contract::phrase_table_is_complete($lang);
        $crate::testing::lang_contract::phrases_are_normalized($lang);
        $crate::testing::lang_contract::scale_words_are_distinct($lang);
        $crate::testing::lang_contract::connector_words_present($lang);
        $crate::testing::lang_contract::renders_every_group_width($lang);
    };
}

pub fn phrase_table_is_complete(lang: Lang) {
    let entry = lang.entry();
    assert_eq!(entry.phrases.len(), 100, "{lang:?}: phrase table size");
    for n in 0..100u8 {
        let key = n.to_string();
        let phrase = entry
            .phrase(&key)
            .unwrap_or_else(|e| panic!("{lang:?}: {e}"));
        assert!(!phrase.is_empty(), "{lang:?}: empty phrase for {key}");
    }
    for padded in ["00", "01", "09"] {
        assert!(
            entry.phrase(padded).is_err(),
            "{lang:?}: zero-padded key `{padded}` must not be in the table"
        );
    }
}

pub fn phrases_are_normalized(lang: Lang) {
    let entry = lang.entry();
    for (key, phrase) in entry.phrases.entries() {
        assert!(
            !needs_normalization(phrase),
            "{lang:?}: phrase for {key} has stray whitespace: {phrase:?}"
        );
    }
}

pub fn scale_words_are_distinct(lang: Lang) {
    let scale = lang.entry().scale;
    let words = [
        scale.word(GroupIndex::Hundred),
        scale.word(GroupIndex::Thousand),
        scale.word(GroupIndex::Lakh),
        scale.word(GroupIndex::Crore),
    ];
    for (i, a) in words.iter().enumerate() {
        assert!(!a.is_empty(), "{lang:?}: empty scale word");
        for b in &words[i + 1..] {
            assert_ne!(a, b, "{lang:?}: duplicate scale word");
        }
    }
}

pub fn connector_words_present(lang: Lang) {
    let entry = lang.entry();
    let words = [entry.major_unit, entry.minor_unit, entry.terminal];
    assert!(words.iter().all(|w| !w.is_empty()), "{lang:?}: empty connector");
    assert_ne!(entry.major_unit, entry.minor_unit);
    assert_ne!(entry.minor_unit, entry.terminal);
}

pub fn renders_every_group_width(lang: Lang) {
    let ctx = Context::new(lang);
    let mut digits = String::new();
    for width in 1..=28 {
        digits.push(char::from(b'0' + (width % 10) as u8));
        let text = format!("{digits}.{}", width % 100);
        let words = assemble(&text, &ctx).unwrap_or_else(|e| panic!("{lang:?} `{text}`: {e}"));
        assert!(words.ends_with(ctx.lang_entry.terminal));
        assert!(!needs_normalization(&words));
    }
}

/// Run the contract for every supported language.
pub fn all_languages_satisfy_contract() {
    for &lang in all_langs() {
        assert_lang_contract!(lang);
    }
}
