//! South-Asian digit grouping.
//!
//! Each digit's distance from the right maps to a position inside its group:
//!
//! | position from right | 0 | 1 | 2 | 3 | 4 | 5 | 6 | 7 | 8 | 9 | 10 | … |
//! |---------------------|---|---|---|---|---|---|---|---|---|---|----|---|
//! | position in group   |-2 |-1 | 0 | 1 | 2 | 3 | 4 | 5 | 6 | 0 | 1  | … |
//!
//! A group closes on the digit whose position in group is 5 (crore), 3 (lakh),
//! 1 (thousand), 0 (hundred) or -2 (units). From position 9 on the pattern
//! repeats every seven digits, so a crore block is followed by another
//! hundred/thousand/lakh/crore cycle.
use crate::words::{RenderError, validate_digits};
use std::iter::FusedIterator;

/// Structural label of a scaled group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum GroupIndex {
    Hundred = 0,
    Thousand = 1,
    Lakh = 3,
    Crore = 5,
}

impl GroupIndex {
    #[inline(always)]
    pub const fn value(self) -> i8 {
        self as i8
    }
}

/// What a group contributes: a numeral followed by a scale word, or the
/// trailing units numeral on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Scale(GroupIndex),
    Units,
}

const UNITS_POSITION: isize = -2;

#[inline(always)]
pub const fn position_in_group(position_from_right: usize) -> isize {
    let p = position_from_right as isize;
    if position_from_right < 9 {
        p - 2
    } else {
        (p - 2) % 7
    }
}

impl Slot {
    /// The slot closed by the digit at `position_from_right`, if any.
    #[inline]
    pub const fn closed_at(position_from_right: usize) -> Option<Slot> {
        match position_in_group(position_from_right) {
            5 => Some(Slot::Scale(GroupIndex::Crore)),
            3 => Some(Slot::Scale(GroupIndex::Lakh)),
            1 => Some(Slot::Scale(GroupIndex::Thousand)),
            0 => Some(Slot::Scale(GroupIndex::Hundred)),
            UNITS_POSITION => Some(Slot::Units),
            _ => None,
        }
    }
}

/// A run of digits borrowed from the integer text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitGroup<'a> {
    pub digits: &'a str,
    pub slot: Slot,
}

impl<'a> DigitGroup<'a> {
    /// Digits with leading zeros dropped; `"05"` becomes `"5"`, `"00"` becomes `""`.
    #[inline]
    pub fn significant(&self) -> &'a str {
        self.digits.trim_start_matches('0')
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.significant().is_empty()
    }
}

/// Left-to-right iterator over the groups of an integer digit string.
#[derive(Debug, Clone)]
pub struct DigitGroups<'a> {
    text: &'a str,
    start: usize,
    pos: usize,
}

/// Partition `digits` into groups. Fails on anything but ASCII digits.
///
/// Concatenating the `digits` of every yielded group gives back the input.
pub fn digit_groups(digits: &str) -> Result<DigitGroups<'_>, RenderError> {
    validate_digits(digits, 0)?;
    Ok(DigitGroups {
        text: digits,
        start: 0,
        pos: 0,
    })
}

impl<'a> Iterator for DigitGroups<'a> {
    type Item = DigitGroup<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let len = self.text.len();
        while self.pos < len {
            let position_from_right = len - 1 - self.pos;
            self.pos += 1;
            if let Some(slot) = Slot::closed_at(position_from_right) {
                // ASCII-only input, every index is a char boundary
                let digits = &self.text[self.start..self.pos];
                self.start = self.pos;
                return Some(DigitGroup { digits, slot });
            }
        }
        None
    }
}

impl FusedIterator for DigitGroups<'_> {}
