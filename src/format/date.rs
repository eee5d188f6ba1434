//! Calendar formatting: fixed day-first patterns, digits in the language's
//! script. Meridiem markers stay `AM`/`PM` in both languages.
use crate::{format::digits::transliterate_digits, lang::Lang};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::fmt::Display;

const DATE: &str = "%d/%m/%Y";
const TIME: &str = "%I:%M %p";
const DATE_TIME: &str = "%d/%m/%Y %I:%M %p";

fn localized(formatted: impl Display, lang: Lang) -> String {
    let text = formatted.to_string();
    transliterate_digits(&text, lang).into_owned()
}

/// `19/10/2026`
pub fn format_date(date: &NaiveDate, lang: Lang) -> String {
    localized(date.format(DATE), lang)
}

/// `07:05 PM`
pub fn format_time(time: &NaiveTime, lang: Lang) -> String {
    localized(time.format(TIME), lang)
}

/// `19/10/2026 07:05 PM`
pub fn format_date_time(date_time: &NaiveDateTime, lang: Lang) -> String {
    localized(date_time.format(DATE_TIME), lang)
}

pub fn day_of_month(date: &NaiveDate, lang: Lang) -> String {
    localized(date.format("%d"), lang)
}

pub fn month_value(date: &NaiveDate, lang: Lang) -> String {
    localized(date.format("%m"), lang)
}

pub fn year(date: &NaiveDate, lang: Lang) -> String {
    localized(date.format("%Y"), lang)
}
