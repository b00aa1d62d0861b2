//! Rendering Persian dates through named and custom patterns.

use std::fmt::Write;

use crate::PersianDate;
use crate::names::{self, Locale};

/// Output layout for `PersianDate::format`.
///
/// Named layouts are selected by their single-letter specifier (`"d"`, `"G"`,
/// ...). Longer strings are custom patterns.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub enum DateFormat {
    /// `yyyy/MM/dd`
    #[default]
    ShortDate,
    /// `dddd dd MMMM yyyy`
    LongDate,
    /// `dddd dd MMMM yyyy HH:mm`
    FullShortTime,
    /// `dddd dd MMMM yyyy hh:mm:ss tt`
    FullLongTime,
    /// `yyyy/MM/dd hh:mm tt`
    GeneralShort,
    /// `yyyy/MM/dd hh:mm:ss tt`
    General,
    /// `MMMM dd`
    MonthDay,
    /// `yyyy MMMM`
    YearMonth,
    /// `yyyy-MM-ddTHH:mm:ss`
    Sortable,
    /// `hh:mm tt`
    ShortTime,
    /// `hh:mm:ss tt`
    LongTime,
    /// `dddd d MMMM yyyy`
    Written,
    Custom(String),
}

impl DateFormat {
    /// The pattern this format renders with.
    pub fn pattern(&self) -> &str {
        match self {
            Self::ShortDate => "yyyy/MM/dd",
            Self::LongDate => "dddd dd MMMM yyyy",
            Self::FullShortTime => "dddd dd MMMM yyyy HH:mm",
            Self::FullLongTime => "dddd dd MMMM yyyy hh:mm:ss tt",
            Self::GeneralShort => "yyyy/MM/dd hh:mm tt",
            Self::General => "yyyy/MM/dd hh:mm:ss tt",
            Self::MonthDay => "MMMM dd",
            Self::YearMonth => "yyyy MMMM",
            Self::Sortable => "yyyy-MM-dd'T'HH:mm:ss",
            Self::ShortTime => "hh:mm tt",
            Self::LongTime => "hh:mm:ss tt",
            Self::Written => "dddd d MMMM yyyy",
            Self::Custom(pattern) => pattern,
        }
    }
}

impl From<&str> for DateFormat {
    fn from(specifier: &str) -> Self {
        match specifier {
            "d" => Self::ShortDate,
            "D" | "dddd, MMMM dd, yyyy" => Self::LongDate,
            "f" => Self::FullShortTime,
            "F" | "dddd, MMMM dd, yyyy hh:mm:ss tt" => Self::FullLongTime,
            "g" => Self::GeneralShort,
            "G" => Self::General,
            "MMMM dd" | "dd MMMM" => Self::MonthDay,
            "M" | "m" | "Y" | "y" | "MMMM, yyyy" => Self::YearMonth,
            "s" => Self::Sortable,
            "t" | "hh:mm tt" => Self::ShortTime,
            "T" | "hh:mm:ss tt" => Self::LongTime,
            "w" | "W" => Self::Written,
            _ if specifier.chars().count() <= 1 => Self::ShortDate,
            _ => Self::Custom(specifier.to_string()),
        }
    }
}

/// Hour on a 12-hour clock. Midnight stays 0.
const fn small_hour(hour: u8) -> u8 {
    if hour > 12 { hour - 12 } else { hour }
}

/// Renders `date` with `format`.
pub fn format(date: &PersianDate, format: &DateFormat, locale: Locale) -> String {
    render(date, format.pattern(), locale)
}

fn render(date: &PersianDate, pattern: &str, locale: Locale) -> String {
    let mut out = String::with_capacity(pattern.len() * 2);
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\'' {
            for literal in chars.by_ref() {
                if literal == '\'' {
                    break;
                }
                out.push(literal);
            }
            continue;
        }

        let mut count = 1;
        while chars.next_if_eq(&c).is_some() {
            count += 1;
        }

        match c {
            'y' => match count {
                1 => push_number(&mut out, date.year() % 100, 1),
                2 => push_number(&mut out, date.year() % 100, 2),
                _ => push_number(&mut out, date.year(), count.max(4)),
            },
            'M' if count >= 3 => {
                out.push_str(names::month_name(locale, date.month()).unwrap_or_default());
            }
            'M' => push_number(&mut out, date.month(), count),
            'd' if count >= 4 => out.push_str(names::weekday(locale, date.day_of_week())),
            'd' if count == 3 => out.push_str(names::weekday_short(locale, date.day_of_week())),
            'd' => push_number(&mut out, date.day(), count),
            'H' => push_number(&mut out, date.hour(), count.min(2)),
            'h' => push_number(&mut out, small_hour(date.hour()), count.min(2)),
            'm' => push_number(&mut out, date.minute(), count.min(2)),
            's' => push_number(&mut out, date.second(), count.min(2)),
            'f' => push_fraction(&mut out, date.millisecond(), count),
            't' => {
                let designator = names::designator(locale, date.hour());
                if count == 1 {
                    out.extend(designator.chars().next());
                } else {
                    out.push_str(designator);
                }
            }
            _ => out.extend(std::iter::repeat_n(c, count)),
        }
    }

    out
}

fn push_number(out: &mut String, value: impl Into<u32>, width: usize) {
    let _ = write!(out, "{:0width$}", value.into());
}

/// Writes the leading `digits` digits of the millisecond fraction.
fn push_fraction(out: &mut String, millisecond: u16, digits: usize) {
    let fraction = format!("{millisecond:03}");
    let shown = digits.min(fraction.len());
    out.push_str(&fraction[..shown]);
    out.extend(std::iter::repeat_n('0', digits - shown));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(time: (u8, u8, u8, u16)) -> PersianDate {
        let (h, mi, s, ms) = time;
        PersianDate::with_millis(1380, 1, 1, h, mi, s, ms).unwrap()
    }

    #[test]
    fn test_named_formats_persian() {
        struct TestCase {
            format: DateFormat,
            time: (u8, u8, u8, u16),
            expected: &'static str,
        }

        let cases = [
            TestCase { format: DateFormat::ShortDate, time: (0, 0, 0, 0), expected: "1380/01/01" },
            TestCase {
                format: DateFormat::General,
                time: (0, 0, 0, 0),
                expected: "1380/01/01 00:00:00 ق.ظ",
            },
            TestCase {
                format: DateFormat::General,
                time: (12, 30, 5, 0),
                expected: "1380/01/01 12:30:05 ب.ظ",
            },
            TestCase {
                format: DateFormat::GeneralShort,
                time: (13, 5, 0, 0),
                expected: "1380/01/01 01:05 ب.ظ",
            },
            TestCase {
                format: DateFormat::LongDate,
                time: (0, 0, 0, 0),
                expected: "چهارشنبه 01 فروردین 1380",
            },
            TestCase {
                format: DateFormat::FullShortTime,
                time: (21, 30, 0, 0),
                expected: "چهارشنبه 01 فروردین 1380 21:30",
            },
            TestCase {
                format: DateFormat::FullLongTime,
                time: (14, 30, 22, 0),
                expected: "چهارشنبه 01 فروردین 1380 02:30:22 ب.ظ",
            },
            TestCase { format: DateFormat::MonthDay, time: (0, 0, 0, 0), expected: "فروردین 01" },
            TestCase { format: DateFormat::YearMonth, time: (0, 0, 0, 0), expected: "1380 فروردین" },
            TestCase {
                format: DateFormat::Sortable,
                time: (21, 5, 9, 0),
                expected: "1380-01-01T21:05:09",
            },
            TestCase { format: DateFormat::ShortTime, time: (9, 7, 0, 0), expected: "09:07 ق.ظ" },
            TestCase {
                format: DateFormat::LongTime,
                time: (12, 22, 30, 0),
                expected: "12:22:30 ب.ظ",
            },
            TestCase {
                format: DateFormat::Written,
                time: (0, 0, 0, 0),
                expected: "چهارشنبه 1 فروردین 1380",
            },
        ];

        for case in &cases {
            assert_eq!(
                format(&date(case.time), &case.format, Locale::Persian),
                case.expected,
                "{:?}",
                case.format
            );
        }
    }

    #[test]
    fn test_named_formats_english() {
        let value = date((23, 59, 0, 0));
        assert_eq!(
            format(&value, &DateFormat::FullLongTime, Locale::English),
            "Wednesday 01 Farvardin 1380 11:59:00 PM"
        );
        assert_eq!(
            format(&value, &DateFormat::Written, Locale::English),
            "Wednesday 1 Farvardin 1380"
        );
    }

    #[test]
    fn test_custom_patterns() {
        let value = date((21, 5, 9, 250));

        struct TestCase {
            pattern: &'static str,
            expected: &'static str,
        }

        let cases = [
            TestCase { pattern: "yyyy/M/d HH:mm:ss.fff", expected: "1380/1/1 21:05:09.250" },
            TestCase { pattern: "yy-MM-dd", expected: "80-01-01" },
            TestCase { pattern: "h:m tt", expected: "9:5 ب.ظ" },
            TestCase { pattern: "ddd، dd MMM", expected: "چ، 01 فروردین" },
            TestCase { pattern: "'day' d 'of' M", expected: "day 1 of 1" },
            TestCase { pattern: "ss.f", expected: "09.2" },
            TestCase { pattern: "fffff", expected: "25000" },
        ];

        for case in &cases {
            let custom = DateFormat::from(case.pattern);
            assert_eq!(format(&value, &custom, Locale::Persian), case.expected, "{}", case.pattern);
        }
    }

    #[test]
    fn test_format_from_specifier() {
        assert_eq!(DateFormat::from("d"), DateFormat::ShortDate);
        assert_eq!(DateFormat::from("G"), DateFormat::General);
        assert_eq!(DateFormat::from("m"), DateFormat::YearMonth);
        assert_eq!(DateFormat::from("dd MMMM"), DateFormat::MonthDay);
        assert_eq!(DateFormat::from("W"), DateFormat::Written);
        assert_eq!(DateFormat::from("x"), DateFormat::ShortDate);
        assert_eq!(DateFormat::from(""), DateFormat::ShortDate);
        assert_eq!(
            DateFormat::from("yyyy MM"),
            DateFormat::Custom("yyyy MM".to_string())
        );
        assert_eq!(DateFormat::default(), DateFormat::ShortDate);
    }

    #[test]
    fn test_small_hour() {
        assert_eq!(small_hour(0), 0);
        assert_eq!(small_hour(12), 12);
        assert_eq!(small_hour(13), 1);
        assert_eq!(small_hour(23), 11);
    }
}
