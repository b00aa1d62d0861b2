mod calendar;
mod consts;
mod convert;
mod error;
mod format;
mod leap;
pub mod names;
mod prelude;
mod pretty;
mod types;
mod words;

pub use calendar::{CalendarConfig, PersianCalendar};
pub use consts::*;
pub use convert::{is_supported, max_supported, min_supported, to_gregorian, to_persian};
pub use error::{ComparisonError, Field, FieldError, RangeError};
pub use format::DateFormat;
pub use leap::{days_in_year, is_leap_year, leap_years_elapsed};
pub use names::Locale;
pub use pretty::{Duration, PrettyTime, TimeUnit};
pub use types::{Day, Month, Year};
pub use words::{to_latin_digits, to_persian_digits, to_words};

use crate::prelude::*;
use chrono::{Datelike, Local, NaiveDateTime, NaiveTime, TimeDelta, Timelike, Weekday};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use types::{check_hour, check_millisecond, check_minute, check_second, days_in_month};

/// A validated date and time in the solar hijri calendar, at millisecond
/// precision.
///
/// Ordering compares year, month, day, hour, minute, second and millisecond
/// in that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PersianDate {
    year: Year,
    month: Month,
    day: Day,
    hour: u8,
    minute: u8,
    second: u8,
    millisecond: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "{_0}")]
    InvalidField(FieldError),
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

impl From<FieldError> for ParseError {
    fn from(err: FieldError) -> Self {
        Self::InvalidField(err)
    }
}

impl PersianDate {
    /// 1/1/1 00:00:00.000, the Persian date of `min_supported()`.
    pub const MIN: Self = Self {
        year: Year::MIN,
        month: Month::MIN,
        day: Day::MIN,
        hour: 0,
        minute: 0,
        second: 0,
        millisecond: 0,
    };

    /// 9378/10/10 23:59:59.999, the Persian date of `max_supported()`.
    pub const MAX: Self = Self {
        year: Year::LAST_SUPPORTED,
        month: Month::DEY,
        day: Day::TENTH,
        hour: MAX_HOUR,
        minute: MAX_MINUTE,
        second: MAX_SECOND,
        millisecond: MAX_MILLISECOND,
    };

    /// Creates a date at midnight.
    ///
    /// # Errors
    /// Returns a `FieldError` naming the first invalid component.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, FieldError> {
        Self::with_millis(year, month, day, 0, 0, 0, 0)
    }

    /// # Errors
    /// Returns a `FieldError` naming the first invalid component.
    pub fn with_time(
        year: u16,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> Result<Self, FieldError> {
        Self::with_millis(year, month, day, hour, minute, second, 0)
    }

    /// # Errors
    /// Returns a `FieldError` naming the first invalid component.
    #[allow(clippy::too_many_arguments)]
    pub fn with_millis(
        year: u16,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
        millisecond: u16,
    ) -> Result<Self, FieldError> {
        let year = Year::new(year)?;
        let month = Month::new(month)?;
        let day = Day::new(day, year, month)?;

        Ok(Self {
            year,
            month,
            day,
            hour: check_hour(hour)?,
            minute: check_minute(minute)?,
            second: check_second(second)?,
            millisecond: check_millisecond(millisecond)?,
        })
    }

    /// Persian date of a Gregorian instant, or `None` outside the supported range.
    pub fn from_gregorian(dt: NaiveDateTime) -> Option<Self> {
        convert::to_persian(dt)
    }

    pub fn to_gregorian(&self) -> NaiveDateTime {
        convert::to_gregorian(self)
    }

    /// Parses the date in `date` and takes the time of day from `time`.
    ///
    /// # Errors
    /// Returns a `ParseError` if `date` does not parse.
    pub fn from_date_and_time(date: &str, time: NaiveTime) -> Result<Self, ParseError> {
        let date: Self = date.parse()?;
        let millisecond = u16::try_from(time.nanosecond() / 1_000_000)
            .unwrap_or(MAX_MILLISECOND)
            .min(MAX_MILLISECOND);

        Ok(Self::with_millis(
            date.year(),
            date.month(),
            date.day(),
            u8::try_from(time.hour()).unwrap_or(u8::MAX),
            u8::try_from(time.minute()).unwrap_or(u8::MAX),
            u8::try_from(time.second()).unwrap_or(u8::MAX),
            millisecond,
        )?)
    }

    /// The current local date and time.
    pub fn now() -> Option<Self> {
        Self::from_gregorian(Local::now().naive_local())
    }

    /// The current local date at midnight.
    pub fn today() -> Option<Self> {
        Self::now().map(|now| now.at_midnight())
    }

    /// Parses `s`, returning `None` instead of an error.
    pub fn try_parse(s: &str) -> Option<Self> {
        s.parse().ok()
    }

    /// Orders two optional dates. A missing date has no place in the order.
    ///
    /// # Errors
    /// Returns `ComparisonError::NoValue` if either side is `None`.
    pub fn checked_cmp(a: Option<&Self>, b: Option<&Self>) -> Result<Ordering, ComparisonError> {
        match (a, b) {
            (Some(a), Some(b)) => Ok(a.cmp(b)),
            _ => Err(ComparisonError::NoValue),
        }
    }

    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    pub const fn hour(&self) -> u8 {
        self.hour
    }

    pub const fn minute(&self) -> u8 {
        self.minute
    }

    pub const fn second(&self) -> u8 {
        self.second
    }

    pub const fn millisecond(&self) -> u16 {
        self.millisecond
    }

    pub const fn year_typed(&self) -> Year {
        self.year
    }

    pub const fn month_typed(&self) -> Month {
        self.month
    }

    pub const fn day_typed(&self) -> Day {
        self.day
    }

    /// Time of day.
    pub fn time(&self) -> NaiveTime {
        self.to_gregorian().time()
    }

    pub fn day_of_week(&self) -> Weekday {
        self.to_gregorian().weekday()
    }

    /// 1-based day within the year (1..=366).
    pub fn day_of_year(&self) -> u16 {
        let days = convert::days_before_month(self.month()) + i32::from(self.day());
        u16::try_from(days).unwrap_or(DAYS_IN_LEAP_YEAR)
    }

    /// Days in this date's month.
    pub fn days_in_month(&self) -> u8 {
        days_in_month(self.year(), self.month())
    }

    pub const fn is_leap_year(&self) -> bool {
        self.year.is_leap()
    }

    pub fn is_min_value(&self) -> bool {
        *self == Self::MIN
    }

    // Validated setters

    /// # Errors
    /// Returns a `FieldError` if the result is not a valid date.
    pub fn with_year(&self, year: u16) -> Result<Self, FieldError> {
        self.replace(year, self.month(), self.day())
    }

    /// # Errors
    /// Returns a `FieldError` if the result is not a valid date.
    pub fn with_month(&self, month: u8) -> Result<Self, FieldError> {
        self.replace(self.year(), month, self.day())
    }

    /// # Errors
    /// Returns a `FieldError` if the result is not a valid date.
    pub fn with_day(&self, day: u8) -> Result<Self, FieldError> {
        self.replace(self.year(), self.month(), day)
    }

    /// # Errors
    /// Returns a `FieldError` for an hour outside `0..=23`.
    pub fn with_hour(&self, hour: u8) -> Result<Self, FieldError> {
        Ok(Self {
            hour: check_hour(hour)?,
            ..*self
        })
    }

    /// # Errors
    /// Returns a `FieldError` for a minute outside `0..=59`.
    pub fn with_minute(&self, minute: u8) -> Result<Self, FieldError> {
        Ok(Self {
            minute: check_minute(minute)?,
            ..*self
        })
    }

    /// # Errors
    /// Returns a `FieldError` for a second outside `0..=59`.
    pub fn with_second(&self, second: u8) -> Result<Self, FieldError> {
        Ok(Self {
            second: check_second(second)?,
            ..*self
        })
    }

    /// # Errors
    /// Returns a `FieldError` for a millisecond outside `0..=999`.
    pub fn with_millisecond(&self, millisecond: u16) -> Result<Self, FieldError> {
        Ok(Self {
            millisecond: check_millisecond(millisecond)?,
            ..*self
        })
    }

    fn replace(&self, year: u16, month: u8, day: u8) -> Result<Self, FieldError> {
        Self::with_millis(
            year,
            month,
            day,
            self.hour,
            self.minute,
            self.second,
            self.millisecond,
        )
    }

    const fn at_midnight(self) -> Self {
        Self {
            hour: 0,
            minute: 0,
            second: 0,
            millisecond: 0,
            ..self
        }
    }

    // Arithmetic

    /// Moves by whole days, or `None` when the result leaves the supported range.
    pub fn add_days(&self, days: i64) -> Option<Self> {
        let shifted = self
            .to_gregorian()
            .checked_add_signed(TimeDelta::try_days(days)?)?;
        Self::from_gregorian(shifted)
    }

    /// Moves by `months`, clamping the day to the target month.
    ///
    /// # Errors
    /// See `PersianCalendar::add_months`.
    pub fn add_months(&self, months: i32) -> Result<Self, RangeError> {
        let dt = PersianCalendar::new().add_months(self.to_gregorian(), months)?;
        Self::from_gregorian(dt).ok_or(RangeError::DateOutOfRange(dt))
    }

    /// Moves by `years`; 30 Esfand becomes 29 Esfand in common years.
    ///
    /// # Errors
    /// See `PersianCalendar::add_years`.
    pub fn add_years(&self, years: i32) -> Result<Self, RangeError> {
        let dt = PersianCalendar::new().add_years(self.to_gregorian(), years)?;
        Self::from_gregorian(dt).ok_or(RangeError::DateOutOfRange(dt))
    }

    /// Saturday of this week, keeping the time of day.
    pub fn start_of_week(&self) -> Option<Self> {
        let offset = names::weekday_index(self.day_of_week());
        self.add_days(-i64::try_from(offset).ok()?)
    }

    /// Friday of this week, keeping the time of day.
    pub fn end_of_week(&self) -> Option<Self> {
        let offset = 6 - names::weekday_index(self.day_of_week());
        self.add_days(i64::try_from(offset).ok()?)
    }

    /// First day of this month, keeping the time of day.
    pub const fn start_of_month(&self) -> Self {
        Self {
            day: Day::MIN,
            ..*self
        }
    }

    /// Last day of this month, keeping the time of day.
    pub fn end_of_month(&self) -> Self {
        let last = self.days_in_month();
        self.with_day(last).unwrap_or(*self)
    }

    /// This date with the time of day of `other`.
    pub const fn combine(&self, other: &Self) -> Self {
        Self {
            hour: other.hour,
            minute: other.minute,
            second: other.second,
            millisecond: other.millisecond,
            ..*self
        }
    }

    // Formatting

    pub fn format(&self, format: &DateFormat, locale: Locale) -> String {
        format::format(self, format, locale)
    }

    /// Weekday, day, month name and year, e.g. "دوشنبه 1 فروردین 1384".
    pub fn to_written(&self, locale: Locale) -> String {
        self.format(&DateFormat::Written, locale)
    }
}

impl fmt::Display for PersianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(&DateFormat::General, Locale::Persian))
    }
}

impl Hash for PersianDate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.format(&DateFormat::Sortable, Locale::Persian)
            .hash(state);
    }
}

impl TryFrom<NaiveDateTime> for PersianDate {
    type Error = RangeError;

    fn try_from(dt: NaiveDateTime) -> Result<Self, Self::Error> {
        Self::from_gregorian(dt).ok_or(RangeError::DateOutOfRange(dt))
    }
}

impl From<PersianDate> for NaiveDateTime {
    fn from(date: PersianDate) -> Self {
        date.to_gregorian()
    }
}

// Parsing

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Meridiem {
    Am,
    Pm,
}

impl FromStr for PersianDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = to_latin_digits(s.trim());
        if normalized.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let mut tokens = normalized.split_whitespace();
        let date = tokens.next().ok_or(ParseError::EmptyInput)?;
        let time = tokens.next();
        let meridiem = tokens.next().map(Self::parse_meridiem).transpose()?;
        if tokens.next().is_some() {
            return Err(ParseError::InvalidFormat(s.to_owned()));
        }

        let (year, month, day) = Self::parse_date(date)?;
        let (hour, minute, second) = match time {
            Some(time) => Self::parse_time(time)?,
            None => (0, 0, 0),
        };
        let hour = match meridiem {
            Some(meridiem) => Self::to_24_hour(hour, meridiem)?,
            None => hour,
        };

        Ok(Self::with_time(year, month, day, hour, minute, second)?)
    }
}

impl PersianDate {
    /// Helper to parse an all-digit token
    fn parse_number<T: FromStr>(token: &str) -> Result<T, ParseError> {
        if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseError::InvalidFormat(token.to_owned()));
        }
        token
            .parse::<T>()
            .map_err(|_| ParseError::InvalidFormat(token.to_owned()))
    }

    /// `yyyy/mm/dd`; a one- or two-digit year is taken as 13xx.
    fn parse_date(token: &str) -> Result<(u16, u8, u8), ParseError> {
        let parts: Vec<&str> = token.split(DATE_SEPARATOR).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(ParseError::InvalidFormat(format!(
                "Expected yyyy{DATE_SEPARATOR}mm{DATE_SEPARATOR}dd, found {token}"
            )));
        };

        let mut year_value = Self::parse_number::<u16>(year)?;
        if year.len() <= 2 {
            year_value += PARSE_CENTURY;
        }
        Ok((
            year_value,
            Self::parse_number(month)?,
            Self::parse_number(day)?,
        ))
    }

    /// `hh:mm` or `hh:mm:ss`
    fn parse_time(token: &str) -> Result<(u8, u8, u8), ParseError> {
        let parts: Vec<&str> = token.split(TIME_SEPARATOR).collect();
        match parts.as_slice() {
            [hour, minute] => Ok((Self::parse_number(hour)?, Self::parse_number(minute)?, 0)),
            [hour, minute, second] => Ok((
                Self::parse_number(hour)?,
                Self::parse_number(minute)?,
                Self::parse_number(second)?,
            )),
            _ => Err(ParseError::InvalidFormat(format!(
                "Expected hh{TIME_SEPARATOR}mm[{TIME_SEPARATOR}ss], found {token}"
            ))),
        }
    }

    fn parse_meridiem(token: &str) -> Result<Meridiem, ParseError> {
        let am = [names::am_designator(Locale::English), names::am_designator(Locale::Persian)];
        let pm = [names::pm_designator(Locale::English), names::pm_designator(Locale::Persian)];

        if am.iter().any(|d| d.eq_ignore_ascii_case(token)) {
            Ok(Meridiem::Am)
        } else if pm.iter().any(|d| d.eq_ignore_ascii_case(token)) {
            Ok(Meridiem::Pm)
        } else {
            Err(ParseError::InvalidFormat(format!("Unknown designator: {token}")))
        }
    }

    fn to_24_hour(hour: u8, meridiem: Meridiem) -> Result<u8, ParseError> {
        if hour > 12 {
            return Err(FieldError::new(Field::Hour, u32::from(hour)).into());
        }
        Ok(match (meridiem, hour) {
            (Meridiem::Am, 12) => 0,
            (Meridiem::Pm, 0..12) => hour + 12,
            _ => hour,
        })
    }
}
