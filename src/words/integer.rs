use crate::{
    lang::LangEntry,
    words::{
        Phrase, RenderError,
        group::{GroupIndex, Slot, digit_groups},
    },
};

/// Render the integer part of an amount.
///
/// All-zero groups are skipped together with their scale word, except a
/// crore group once something has been said: `"100000000000000"` reads
/// "One Crore Crore". A value with no significant digit reads as the zero
/// phrase.
pub fn render_integer(digits: &str, entry: &LangEntry) -> Result<Phrase, RenderError> {
    if digits.is_empty() {
        return Err(RenderError::EmptyInteger);
    }

    let mut out = String::with_capacity(digits.len() * 12);
    for group in digit_groups(digits)? {
        let significant = group.significant();
        match group.slot {
            Slot::Scale(index) => {
                if !significant.is_empty() {
                    push_word(&mut out, entry.phrase(significant)?);
                    push_word(&mut out, entry.scale.word(index));
                } else if index == GroupIndex::Crore && !out.is_empty() {
                    push_word(&mut out, entry.scale.word(index));
                }
            }
            Slot::Units => {
                if !significant.is_empty() {
                    push_word(&mut out, entry.phrase(significant)?);
                }
            }
        }
    }

    if out.is_empty() {
        return Ok(Phrase {
            text: entry.zero()?.to_owned(),
            is_zero: true,
        });
    }
    Ok(Phrase {
        text: out,
        is_zero: false,
    })
}

#[inline(always)]
fn push_word(out: &mut String, word: &str) {
    if !out.is_empty() {
        out.push(' ');
    }
    out.push_str(word);
}
