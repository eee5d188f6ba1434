use crate::{
    lang::LangEntry,
    policy::FractionPolicy,
    words::{Phrase, RenderError, validate_digits},
};
use std::borrow::Cow;

/// Render the digits after the decimal point with a single table lookup.
///
/// `offset` is where `digits` starts in the amount text and is only used for
/// error positions.
pub fn render_fraction(
    digits: &str,
    offset: usize,
    entry: &LangEntry,
    policy: FractionPolicy,
) -> Result<Phrase, RenderError> {
    validate_digits(digits, offset)?;
    let key = fraction_key(digits, policy);
    Ok(Phrase {
        text: entry.phrase(&key)?.to_owned(),
        is_zero: key == "0",
    })
}

/// Canonical phrase-table key (`"0"..="99"`, no leading zero) for validated
/// fraction digits.
pub fn fraction_key(digits: &str, policy: FractionPolicy) -> Cow<'_, str> {
    let truncated = &digits[..digits.len().min(2)];
    match policy {
        FractionPolicy::Paisa => match truncated.as_bytes() {
            [] | [b'0'] | [b'0', b'0'] => Cow::Borrowed("0"),
            [b'0', _] => Cow::Borrowed(&truncated[1..]),
            [tens] => {
                let mut key = String::with_capacity(2);
                key.push(char::from(*tens));
                key.push('0');
                Cow::Owned(key)
            }
            _ => Cow::Borrowed(truncated),
        },
        FractionPolicy::Digits => {
            if truncated.is_empty() {
                Cow::Borrowed("0")
            } else if truncated.len() > 1 && truncated.starts_with('0') {
                Cow::Borrowed(&truncated[1..])
            } else {
                Cow::Borrowed(truncated)
            }
        }
    }
}
