//! Calendar arithmetic and queries over Gregorian instants.

use chrono::{Datelike, NaiveDateTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::PersianDate;
use crate::consts::{
    DEFAULT_TWO_DIGIT_YEAR_MAX, ESFAND, MAX_CALENDAR_YEAR, MAX_MONTH, MAX_MONTH_DIFFERENCE,
    MAX_YEAR, MIN_TWO_DIGIT_YEAR_MAX, MIN_YEAR, MONTHS_IN_YEAR, PERSIAN_ERA,
};
use crate::convert;
use crate::error::RangeError;
use crate::leap;
use crate::names::Locale;
use crate::types::{Day, Month, Year, clamp_day};

/// Host-embeddable calendar settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    /// Last year a two-digit year expands to.
    pub two_digit_year_max: i32,
    /// Language for names, designators and numbers.
    pub locale: Locale,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            two_digit_year_max: DEFAULT_TWO_DIGIT_YEAR_MAX,
            locale: Locale::default(),
        }
    }
}

/// The solar hijri calendar.
///
/// All instant-based operations fail with `RangeError::DateOutOfRange` for
/// instants without a Persian equivalent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PersianCalendar {
    two_digit_year_max: i32,
}

impl Default for PersianCalendar {
    fn default() -> Self {
        Self::new()
    }
}

impl PersianCalendar {
    pub const fn new() -> Self {
        Self {
            two_digit_year_max: DEFAULT_TWO_DIGIT_YEAR_MAX,
        }
    }

    /// Builds a calendar from `config`, validating the two-digit year pivot.
    ///
    /// # Errors
    /// Returns `RangeError::TwoDigitYearMax` if the pivot is outside `99..=9378`.
    pub fn from_config(config: &CalendarConfig) -> Result<Self, RangeError> {
        let mut calendar = Self::new();
        calendar.set_two_digit_year_max(config.two_digit_year_max)?;
        Ok(calendar)
    }

    pub const fn two_digit_year_max(&self) -> i32 {
        self.two_digit_year_max
    }

    /// # Errors
    /// Returns `RangeError::TwoDigitYearMax` if `value` is outside `99..=9378`.
    pub fn set_two_digit_year_max(&mut self, value: i32) -> Result<(), RangeError> {
        if !(MIN_TWO_DIGIT_YEAR_MAX..=MAX_CALENDAR_YEAR).contains(&value) {
            return Err(RangeError::TwoDigitYearMax(value));
        }
        self.two_digit_year_max = value;
        Ok(())
    }

    /// Expands a two-digit year into the century window ending at
    /// `two_digit_year_max`. Years of 100 and above are returned unchanged.
    ///
    /// # Errors
    /// Returns `RangeError::YearOutOfRange` for negative years and years above 9378.
    pub fn to_four_digit_year(&self, year: i32) -> Result<i32, RangeError> {
        if year < 0 || year > MAX_CALENDAR_YEAR {
            return Err(RangeError::YearOutOfRange(i64::from(year)));
        }
        if year >= 100 {
            return Ok(year);
        }

        let max = self.two_digit_year_max;
        let century = max / 100 - i32::from(year > max % 100);
        Ok(century * 100 + year)
    }

    pub fn min_supported_date_time(&self) -> NaiveDateTime {
        convert::min_supported()
    }

    pub fn max_supported_date_time(&self) -> NaiveDateTime {
        convert::max_supported()
    }

    fn persian(dt: NaiveDateTime) -> Result<PersianDate, RangeError> {
        convert::to_persian(dt).ok_or(RangeError::DateOutOfRange(dt))
    }

    /// Adds `months` to `dt`, clamping the day to the length of the target month.
    /// The time of day is kept.
    ///
    /// # Errors
    /// Returns `RangeError::MonthDelta` if `|months|` exceeds 120000, and a
    /// range error if the result leaves the supported range.
    pub fn add_months(&self, dt: NaiveDateTime, months: i32) -> Result<NaiveDateTime, RangeError> {
        if months.unsigned_abs() > MAX_MONTH_DIFFERENCE.unsigned_abs() {
            return Err(RangeError::MonthDelta(months));
        }

        let date = Self::persian(dt)?;
        let index = i64::from(date.month()) - 1 + i64::from(months);
        let months_in_year = i64::from(MONTHS_IN_YEAR);
        let year = i64::from(date.year()) + index.div_euclid(months_in_year);
        let month = u8::try_from(index.rem_euclid(months_in_year) + 1).unwrap_or(MAX_MONTH);

        Self::shift(dt, &date, year, month)
    }

    /// Adds `years` to `dt`. 30 Esfand becomes 29 Esfand when the target year
    /// is not leap.
    ///
    /// # Errors
    /// Returns a range error if the result leaves the supported range.
    pub fn add_years(&self, dt: NaiveDateTime, years: i32) -> Result<NaiveDateTime, RangeError> {
        let date = Self::persian(dt)?;
        let year = i64::from(date.year()) + i64::from(years);

        Self::shift(dt, &date, year, date.month())
    }

    /// Moves `dt` to `year`/`month`, keeping its day where possible and its time.
    fn shift(
        dt: NaiveDateTime,
        date: &PersianDate,
        year: i64,
        month: u8,
    ) -> Result<NaiveDateTime, RangeError> {
        let year = u16::try_from(year)
            .ok()
            .filter(|y| (MIN_YEAR..=MAX_YEAR).contains(y))
            .ok_or(RangeError::YearOutOfRange(year))?;
        let day = clamp_day(year, month, date.day());

        let target = PersianDate::new(year, month, day)?.to_gregorian();
        let result = target.date().and_time(dt.time());
        if !convert::is_supported(result) {
            return Err(RangeError::DateOutOfRange(result));
        }
        Ok(result)
    }

    /// Weekday of `dt`. Weeks start on Saturday; see `names::weekday_index`.
    ///
    /// # Errors
    /// Returns `RangeError::DateOutOfRange` outside the supported range.
    pub fn day_of_week(&self, dt: NaiveDateTime) -> Result<Weekday, RangeError> {
        Self::persian(dt).map(|_| dt.weekday())
    }

    /// 1-based day within the Persian year (1..=366).
    ///
    /// # Errors
    /// Returns `RangeError::DateOutOfRange` outside the supported range.
    pub fn day_of_year(&self, dt: NaiveDateTime) -> Result<u16, RangeError> {
        Self::persian(dt).map(|date| date.day_of_year())
    }

    /// # Errors
    /// Returns `RangeError::DateOutOfRange` outside the supported range.
    pub fn year(&self, dt: NaiveDateTime) -> Result<u16, RangeError> {
        Self::persian(dt).map(|date| date.year())
    }

    /// # Errors
    /// Returns `RangeError::DateOutOfRange` outside the supported range.
    pub fn month(&self, dt: NaiveDateTime) -> Result<u8, RangeError> {
        Self::persian(dt).map(|date| date.month())
    }

    /// # Errors
    /// Returns `RangeError::DateOutOfRange` outside the supported range.
    pub fn day_of_month(&self, dt: NaiveDateTime) -> Result<u8, RangeError> {
        Self::persian(dt).map(|date| date.day())
    }

    /// Always `PERSIAN_ERA` for supported instants.
    ///
    /// # Errors
    /// Returns `RangeError::DateOutOfRange` outside the supported range.
    pub fn era(&self, dt: NaiveDateTime) -> Result<i32, RangeError> {
        Self::persian(dt).map(|_| PERSIAN_ERA)
    }

    /// Century of `dt`: years 1-100 are the first century.
    ///
    /// # Errors
    /// Returns `RangeError::DateOutOfRange` outside the supported range.
    pub fn century(&self, dt: NaiveDateTime) -> Result<u16, RangeError> {
        Self::persian(dt).map(|date| (date.year() - 1) / 100 + 1)
    }

    /// # Errors
    /// Returns a field error for an invalid year or month.
    pub fn days_in_month(&self, year: u16, month: u8) -> Result<u8, RangeError> {
        let year = Year::new(year)?;
        let month = Month::new(month)?;
        Ok(crate::types::days_in_month(year.get(), month.get()))
    }

    /// # Errors
    /// Returns a field error for an invalid year.
    pub fn days_in_year(&self, year: u16) -> Result<u16, RangeError> {
        let year = Year::new(year)?;
        Ok(leap::days_in_year(i32::from(year.get())))
    }

    /// Always 12.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidEra` for any era but `PERSIAN_ERA`, and a
    /// field error for an invalid year.
    pub fn months_in_year(&self, year: u16, era: i32) -> Result<u8, RangeError> {
        if era != PERSIAN_ERA {
            return Err(RangeError::InvalidEra(era));
        }
        Year::new(year)?;
        Ok(MONTHS_IN_YEAR)
    }

    /// # Errors
    /// Returns a field error for an invalid year.
    pub fn is_leap_year(&self, year: u16) -> Result<bool, RangeError> {
        Ok(Year::new(year)?.is_leap())
    }

    /// Only Esfand of a leap year is a leap month.
    ///
    /// # Errors
    /// Returns a field error for an invalid year or month.
    pub fn is_leap_month(&self, year: u16, month: u8) -> Result<bool, RangeError> {
        let year = Year::new(year)?;
        let month = Month::new(month)?;
        Ok(month.get() == ESFAND && year.is_leap())
    }

    /// Only 30 Esfand is a leap day.
    ///
    /// # Errors
    /// Returns a field error for an invalid date.
    pub fn is_leap_day(&self, year: u16, month: u8, day: u8) -> Result<bool, RangeError> {
        let (y, m) = (Year::new(year)?, Month::new(month)?);
        let day = Day::new(day, y, m)?;
        Ok(self.is_leap_month(year, month)? && day.get() == 30)
    }

    /// Gregorian instant of a Persian date and time.
    ///
    /// # Errors
    /// Returns a field error naming the first invalid component.
    #[allow(clippy::too_many_arguments)]
    pub fn to_date_time(
        &self,
        year: u16,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
        millisecond: u16,
    ) -> Result<NaiveDateTime, RangeError> {
        let date = PersianDate::with_millis(year, month, day, hour, minute, second, millisecond)?;
        Ok(date.to_gregorian())
    }
}
