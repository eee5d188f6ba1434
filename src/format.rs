//! Display helpers that live next to the word renderer: native-digit
//! transliteration, separator grouping of numeric strings, and localized
//! calendar formatting. They share no state with [`crate::words`].

pub mod date;
pub mod digits;
pub mod grouping;
