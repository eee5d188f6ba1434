//! Amount-to-words rendering.
//!
//! An amount arrives as canonical decimal text (`"1234567.89"`). The integer
//! part is cut into South-Asian groups by [`group`]: the rightmost three
//! digits, then two-digit blocks for thousand, lakh and crore, after which the
//! two-digit cadence repeats and every further block is another crore
//! (`"… Crore Crore"`). [`integer`] turns the groups into words, [`fraction`]
//! derives the paisa phrase and [`assemble`] joins segments, unit words and
//! the terminal word.
//!
//! Every step returns `Result<_, RenderError>`. Turning an error into a
//! degraded, still-printable result is left to [`crate::taka`].

pub mod assemble;
pub mod fraction;
pub mod group;
pub mod integer;

use thiserror::Error;

/// Why an amount could not be rendered as words.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("amount has no integer digits")]
    EmptyInteger,

    #[error("unexpected character {ch:?} at position {position}")]
    UnexpectedChar { ch: char, position: usize },

    #[error("no phrase for numeral `{key}`")]
    MissingPhrase { key: String },
}

/// A rendered segment together with whether it stands for zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phrase {
    pub text: String,
    pub is_zero: bool,
}

/// Split plain decimal text at its first `.`.
#[inline]
pub(crate) fn split_decimal(text: &str) -> (&str, Option<&str>) {
    match memchr::memchr(b'.', text.as_bytes()) {
        Some(dot) => (&text[..dot], Some(&text[dot + 1..])),
        None => (text, None),
    }
}

/// Reject anything but ASCII digits. `offset` is where `digits` starts inside
/// the full amount text, so reported positions point into the caller's input.
pub(crate) fn validate_digits(digits: &str, offset: usize) -> Result<(), RenderError> {
    match digits.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
        Some((position, ch)) => Err(RenderError::UnexpectedChar {
            ch,
            position: offset + position,
        }),
        None => Ok(()),
    }
}
