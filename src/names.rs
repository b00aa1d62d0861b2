//! Month and weekday names.
//!
//! Weekday tables start at Saturday, the first day of the Persian week.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::error::RangeError;
use crate::prelude::*;

/// Language used when rendering names, designators and numbers.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    #[display(fmt = "persian")]
    Persian,
    #[display(fmt = "english")]
    English,
}

const PERSIAN_MONTHS: [&str; 12] = [
    "فروردین",
    "اردیبهشت",
    "خرداد",
    "تیر",
    "مرداد",
    "شهریور",
    "مهر",
    "آبان",
    "آذر",
    "دی",
    "بهمن",
    "اسفند",
];

const ENGLISH_MONTHS: [&str; 12] = [
    "Farvardin",
    "Ordibehesht",
    "Khordad",
    "Tir",
    "Mordad",
    "Shahrivar",
    "Mehr",
    "Aban",
    "Azar",
    "Dey",
    "Bahman",
    "Esfand",
];

const PERSIAN_WEEKDAYS: [&str; 7] = [
    "شنبه",
    "یکشنبه",
    "دوشنبه",
    "ﺳﻪشنبه",
    "چهارشنبه",
    "پنجشنبه",
    "جمعه",
];

const PERSIAN_WEEKDAY_ABBRS: [&str; 7] = ["ش", "ی", "د", "س", "چ", "پ", "ج"];

const ENGLISH_WEEKDAYS: [&str; 7] = [
    "Saturday",
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
];

const ENGLISH_WEEKDAY_ABBRS: [&str; 7] = ["Sat", "Sun", "Mon", "Tue", "Wed", "Thu", "Fri"];

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Sat,
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
];

fn lookup(table: &[&'static str], index: usize) -> Result<&'static str, RangeError> {
    table.get(index).copied().ok_or(RangeError::NameIndex(index))
}

/// Name of `month` (1 = Farvardin).
///
/// # Errors
/// Returns `RangeError::NameIndex` unless `month` is in `1..=12`.
pub fn month_name(locale: Locale, month: u8) -> Result<&'static str, RangeError> {
    let index = usize::from(month)
        .checked_sub(1)
        .ok_or(RangeError::NameIndex(usize::from(month)))?;
    match locale {
        Locale::Persian => lookup(&PERSIAN_MONTHS, index),
        Locale::English => lookup(&ENGLISH_MONTHS, index),
    }
}

/// Genitive month name. Persian does not inflect month names, so this is
/// the same as `month_name`.
///
/// # Errors
/// Returns `RangeError::NameIndex` unless `month` is in `1..=12`.
pub fn month_genitive_name(locale: Locale, month: u8) -> Result<&'static str, RangeError> {
    month_name(locale, month)
}

/// Name of the weekday at `index`, with Saturday at 0.
///
/// # Errors
/// Returns `RangeError::NameIndex` unless `index` is in `0..=6`.
pub fn weekday_name(locale: Locale, index: usize) -> Result<&'static str, RangeError> {
    match locale {
        Locale::Persian => lookup(&PERSIAN_WEEKDAYS, index),
        Locale::English => lookup(&ENGLISH_WEEKDAYS, index),
    }
}

/// Abbreviated weekday name, with Saturday at 0.
///
/// # Errors
/// Returns `RangeError::NameIndex` unless `index` is in `0..=6`.
pub fn weekday_abbr(locale: Locale, index: usize) -> Result<&'static str, RangeError> {
    match locale {
        Locale::Persian => lookup(&PERSIAN_WEEKDAY_ABBRS, index),
        Locale::English => lookup(&ENGLISH_WEEKDAY_ABBRS, index),
    }
}

/// Position of `weekday` in the Persian week (Saturday = 0, Friday = 6).
pub fn weekday_index(weekday: Weekday) -> usize {
    ((weekday.num_days_from_sunday() + 1) % 7) as usize
}

/// Inverse of `weekday_index`.
///
/// # Errors
/// Returns `RangeError::NameIndex` unless `index` is in `0..=6`.
pub fn weekday_from_index(index: usize) -> Result<Weekday, RangeError> {
    WEEKDAYS
        .get(index)
        .copied()
        .ok_or(RangeError::NameIndex(index))
}

/// Name of `weekday` in `locale`.
pub fn weekday(locale: Locale, weekday: Weekday) -> &'static str {
    let index = weekday_index(weekday);
    match locale {
        Locale::Persian => PERSIAN_WEEKDAYS[index],
        Locale::English => ENGLISH_WEEKDAYS[index],
    }
}

/// Abbreviated name of `weekday` in `locale`.
pub fn weekday_short(locale: Locale, weekday: Weekday) -> &'static str {
    let index = weekday_index(weekday);
    match locale {
        Locale::Persian => PERSIAN_WEEKDAY_ABBRS[index],
        Locale::English => ENGLISH_WEEKDAY_ABBRS[index],
    }
}

pub const fn am_designator(locale: Locale) -> &'static str {
    match locale {
        Locale::Persian => "ق.ظ",
        Locale::English => "AM",
    }
}

pub const fn pm_designator(locale: Locale) -> &'static str {
    match locale {
        Locale::Persian => "ب.ظ",
        Locale::English => "PM",
    }
}

/// Designator for `hour` (0-23): PM from noon on.
pub const fn designator(locale: Locale, hour: u8) -> &'static str {
    if hour >= 12 {
        pm_designator(locale)
    } else {
        am_designator(locale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_month_is_farvardin() {
        assert_eq!(month_name(Locale::Persian, 1).unwrap(), "فروردین");
        assert_eq!(month_name(Locale::English, 1).unwrap(), "Farvardin");
        assert_eq!(month_name(Locale::Persian, 12).unwrap(), "اسفند");
        assert_eq!(
            month_genitive_name(Locale::Persian, 4).unwrap(),
            month_name(Locale::Persian, 4).unwrap()
        );
    }

    #[test]
    fn test_month_name_out_of_range() {
        assert_eq!(month_name(Locale::Persian, 0), Err(RangeError::NameIndex(0)));
        assert_eq!(month_name(Locale::Persian, 13), Err(RangeError::NameIndex(12)));
    }

    #[test]
    fn test_weekday_name_mapping() {
        let expected = [
            "شنبه",
            "یکشنبه",
            "دوشنبه",
            "ﺳﻪشنبه",
            "چهارشنبه",
            "پنجشنبه",
            "جمعه",
        ];
        for (index, name) in expected.iter().enumerate() {
            assert_eq!(weekday_name(Locale::Persian, index).unwrap(), *name);
        }
    }

    #[test]
    fn test_weekday_abbr_mapping() {
        let expected = ["ش", "ی", "د", "س", "چ", "پ", "ج"];
        for (index, abbr) in expected.iter().enumerate() {
            assert_eq!(weekday_abbr(Locale::Persian, index).unwrap(), *abbr);
        }
    }

    #[test]
    fn test_weekday_index_out_of_range() {
        assert_eq!(weekday_name(Locale::Persian, 7), Err(RangeError::NameIndex(7)));
        assert_eq!(weekday_abbr(Locale::English, 7), Err(RangeError::NameIndex(7)));
        assert_eq!(weekday_from_index(7), Err(RangeError::NameIndex(7)));
    }

    #[test]
    fn test_weekday_index_starts_at_saturday() {
        struct TestCase {
            weekday: Weekday,
            index: usize,
        }

        let cases = [
            TestCase { weekday: Weekday::Sat, index: 0 },
            TestCase { weekday: Weekday::Sun, index: 1 },
            TestCase { weekday: Weekday::Mon, index: 2 },
            TestCase { weekday: Weekday::Tue, index: 3 },
            TestCase { weekday: Weekday::Wed, index: 4 },
            TestCase { weekday: Weekday::Thu, index: 5 },
            TestCase { weekday: Weekday::Fri, index: 6 },
        ];

        for case in &cases {
            assert_eq!(weekday_index(case.weekday), case.index, "{}", case.weekday);
            assert_eq!(weekday_from_index(case.index), Ok(case.weekday));
        }
    }

    #[test]
    fn test_weekday_by_value() {
        assert_eq!(weekday(Locale::Persian, Weekday::Fri), "جمعه");
        assert_eq!(weekday(Locale::English, Weekday::Sat), "Saturday");
        assert_eq!(weekday_short(Locale::English, Weekday::Thu), "Thu");
    }

    #[test]
    fn test_designators() {
        assert_eq!(designator(Locale::Persian, 0), "ق.ظ");
        assert_eq!(designator(Locale::Persian, 11), "ق.ظ");
        assert_eq!(designator(Locale::Persian, 12), "ب.ظ");
        assert_eq!(designator(Locale::English, 23), "PM");
    }

    #[test]
    fn test_locale_display_and_serde() {
        assert_eq!(Locale::default(), Locale::Persian);
        assert_eq!(Locale::English.to_string(), "english");

        let json = serde_json::to_string(&Locale::English).unwrap();
        assert_eq!(json, "\"english\"");
        let locale: Locale = serde_json::from_str("\"persian\"").unwrap();
        assert_eq!(locale, Locale::Persian);
    }
}
