mod prop_tests {
    use crate::{
        BEN, Decimal, ENG, NullSink, Rendered, TakaWords,
        format::grouping::group_south_asian,
        whitespace::{needs_normalization, normalize_whitespace},
        words::group::digit_groups,
    };
    use proptest::prelude::*;
    use std::{borrow::Cow, str::FromStr, sync::Arc};

    fn quiet(lang: crate::Lang) -> TakaWords {
        TakaWords::builder().lang(lang).sink(Arc::new(NullSink)).build()
    }

    proptest! {
        #[test]
        fn grouping_round_trip(s in "[1-9][0-9]{0,40}") {
            let joined: String = digit_groups(&s).unwrap().map(|g| g.digits).collect();
            prop_assert_eq!(joined, s);
        }

        #[test]
        fn groups_are_at_most_two_significant_digits(s in "[0-9]{1,40}") {
            for group in digit_groups(&s).unwrap() {
                prop_assert!(group.significant().len() <= 2);
            }
        }

        #[test]
        fn one_crore_word_per_seven_digits(s in "[1-9][0-9]{0,40}") {
            let words = quiet(ENG).render_text(&s);
            prop_assert!(!words.is_degraded());
            prop_assert_eq!(words.as_str().matches("Crore").count(), (s.len() - 1) / 7);
        }

        #[test]
        fn valid_amounts_always_render(s in "(0|[1-9][0-9]{0,27})(\\.[0-9]{1,6})?") {
            for lang in [BEN, ENG] {
                let taka = quiet(lang);
                let rendered = taka.render_text(&s);
                prop_assert!(!rendered.is_degraded(), "{} degraded", s);
                let text = rendered.as_str();
                prop_assert!(text.ends_with(lang.entry().terminal));
                prop_assert!(!needs_normalization(text));
            }
        }

        #[test]
        fn decimal_input_renders(mantissa in any::<i64>().prop_map(i64::unsigned_abs), scale in 0u32..=6) {
            let amount = Decimal::from_i128_with_scale(i128::from(mantissa), scale);
            prop_assert!(!quiet(ENG).render(&amount).is_degraded());
        }

        #[test]
        fn malformed_input_comes_back_unchanged(s in "[0-9]{1,6}[a-zA-Z,+ -][0-9]{0,3}") {
            let rendered = quiet(ENG).render_text(&s);
            let is_unchanged = matches!(&rendered, Rendered::Degraded { text, .. } if *text == s);
            prop_assert!(is_unchanged);
        }

        #[test]
        fn whitespace_normalization_idempotent(s in "\\PC*") {
            let once = normalize_whitespace(Cow::Borrowed(s.as_str())).into_owned();
            let twice = normalize_whitespace(Cow::Borrowed(once.as_str()));
            prop_assert!(matches!(twice, Cow::Borrowed(_)));
            prop_assert_eq!(twice.as_ref(), once.as_str());
            prop_assert!(!once.contains("  "));
            prop_assert_eq!(once.trim(), once.as_str());
        }

        #[test]
        fn separators_only_add_commas(s in "[1-9][0-9]{0,25}(\\.[0-9]{1,4})?") {
            let grouped = group_south_asian(&s);
            prop_assert_eq!(grouped.replace(',', ""), s.clone());
            let integer = grouped.split('.').next().unwrap_or_default();
            let blocks: Vec<&str> = integer.split(',').collect();
            prop_assert!(blocks.last().is_some_and(|b| b.len() <= 3));
        }

        #[test]
        fn decimal_text_is_canonical(s in "[1-9][0-9]{0,20}\\.[0-9]{1,4}") {
            let amount = Decimal::from_str(&s).unwrap();
            prop_assert_eq!(amount.to_string(), s);
        }
    }
}
