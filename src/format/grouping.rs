//! Separator grouping for display.
//!
//! South-Asian grouping puts a comma after the lowest three digits and then
//! after every two, restarting the cycle at each crore:
//! `1234567890.50` → `123,45,67,890.50`. Western grouping uses threes.
use crate::{
    format::digits::transliterate_digits,
    lang::{BEN, Lang},
    words::split_decimal,
};
use rust_decimal::{Decimal, RoundingStrategy};
use std::borrow::Cow;

const MAX_FRACTION_DIGITS: u32 = 28;

fn split_sign(text: &str) -> (&str, &str) {
    match text.strip_prefix('-') {
        Some(unsigned) => ("-", unsigned),
        None => ("", text),
    }
}

fn group_integer(text: &str, comma_after: impl Fn(usize) -> bool) -> Cow<'_, str> {
    let (sign, unsigned) = split_sign(text);
    let (integer, fraction) = split_decimal(unsigned);
    let len = integer.chars().count();
    if len <= 3 {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + len / 2 + 1);
    out.push_str(sign);
    for (i, c) in integer.chars().enumerate() {
        out.push(c);
        let position_from_right = len - 1 - i;
        if position_from_right > 0 && comma_after(position_from_right) {
            out.push(',');
        }
    }
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    Cow::Owned(out)
}

/// Insert South-Asian separators into plain decimal text.
pub fn group_south_asian(text: &str) -> Cow<'_, str> {
    group_integer(text, |position_from_right| {
        matches!(position_from_right % 7, 0 | 3 | 5)
    })
}

/// Insert thousands separators into plain decimal text.
pub fn group_western(text: &str) -> Cow<'_, str> {
    group_integer(text, |position_from_right| position_from_right % 3 == 0)
}

/// Round to `dp` places with `strategy` and keep exactly `dp` places.
fn rounded(amount: &Decimal, dp: u32, strategy: RoundingStrategy) -> Decimal {
    let dp = dp.min(MAX_FRACTION_DIGITS);
    let mut value = amount.round_dp_with_strategy(dp, strategy);
    value.rescale(dp);
    value
}

/// Round up to two places and group South-Asian style: `1234567.891` →
/// `12,34,567.90`.
pub fn group_with_separators(amount: &Decimal) -> String {
    let text = rounded(amount, 2, RoundingStrategy::ToPositiveInfinity).to_string();
    group_south_asian(&text).into_owned()
}

/// [`group_with_separators`] written with Bengali digits.
pub fn format_taka(amount: &Decimal) -> String {
    let grouped = group_with_separators(amount);
    transliterate_digits(&grouped, BEN).into_owned()
}

fn localize(text: &str, lang: Lang) -> String {
    match lang {
        Lang::Bengali => transliterate_digits(&group_south_asian(text), lang).into_owned(),
        Lang::English => group_western(text).into_owned(),
    }
}

/// Money with exactly two places, rounded half up.
///
/// Bengali: `৩,১৩,১২৩.২১`. English: `313,123.21`.
pub fn format_money(amount: &Decimal, lang: Lang) -> String {
    let text = rounded(amount, 2, RoundingStrategy::MidpointAwayFromZero).to_string();
    localize(&text, lang)
}

/// A plain number rounded half up to at most `max_fraction_digits` places,
/// trailing fraction zeros removed.
pub fn format_number(amount: &Decimal, max_fraction_digits: u32, lang: Lang) -> String {
    let dp = max_fraction_digits.min(MAX_FRACTION_DIGITS);
    let value = amount
        .round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    localize(&value.to_string(), lang)
}
