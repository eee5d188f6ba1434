use crate::{
    context::Context,
    policy::SegmentPolicy,
    whitespace::normalize_whitespace,
    words::{
        RenderError, fraction::render_fraction, integer::render_integer, split_decimal,
    },
};
use smallvec::SmallVec;
use std::borrow::Cow;

/// Render canonical decimal text (`"1234567.89"`, no sign, no exponent) into
/// a complete phrase: integer, major unit, fraction, minor unit, terminal.
pub fn assemble(text: &str, ctx: &Context) -> Result<String, RenderError> {
    let entry = &ctx.lang_entry;
    let (integer_digits, fraction_digits) = split_decimal(text);

    let integer = render_integer(integer_digits, entry)?;
    let fraction = fraction_digits
        .map(|digits| render_fraction(digits, integer_digits.len() + 1, entry, ctx.policy.fraction))
        .transpose()?;

    let mut words: SmallVec<[&str; 6]> = SmallVec::new();
    match ctx.policy.segments {
        SegmentPolicy::Always => {
            words.push(&integer.text);
            words.push(entry.major_unit);
            if let Some(fraction) = &fraction {
                words.push(&fraction.text);
                words.push(entry.minor_unit);
            }
        }
        SegmentPolicy::OmitZero => {
            let fraction = fraction.as_ref().filter(|f| !f.is_zero);
            if !integer.is_zero || fraction.is_none() {
                words.push(&integer.text);
                words.push(entry.major_unit);
            }
            if let Some(fraction) = fraction {
                words.push(&fraction.text);
                words.push(entry.minor_unit);
            }
        }
    }
    words.push(entry.terminal);

    let joined = words.join(" ");
    Ok(normalize_whitespace(Cow::Owned(joined)).into_owned())
}
