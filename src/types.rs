use crate::consts::{
    DAYS_IN_MONTH, ESFAND, ESFAND_DAYS_LEAP, MAX_CALENDAR_YEAR, MAX_HOUR, MAX_MILLISECOND,
    MAX_MINUTE, MAX_MONTH, MAX_SECOND, MAX_YEAR, MIN_DAY,
};
use crate::error::{Field, FieldError};
use crate::leap::is_leap_year;
use std::fmt;
use std::num::NonZeroU16;
use std::num::NonZeroU8;

/// A Persian year guaranteed to be in the range `1..=MAX_YEAR` (1..=9999)
/// Uses `NonZeroU16` internally, so 0 is not a valid year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Year(NonZeroU16);

impl Year {
    pub const MIN: Self = Self(NonZeroU16::MIN);
    /// Year of the last supported instant (9999-12-31 is 9378/10/10)
    pub(crate) const LAST_SUPPORTED: Self = Self(non_zero_u16(MAX_CALENDAR_YEAR as u16));

    /// Creates a new Year, validating that it's non-zero and <= `MAX_YEAR`
    ///
    /// # Errors
    /// Returns a `FieldError` for `Field::Year` if the value is 0 or > `MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, FieldError> {
        let non_zero =
            NonZeroU16::new(value).ok_or(FieldError::new(Field::Year, u32::from(value)))?;
        if value > MAX_YEAR {
            return Err(FieldError::new(Field::Year, u32::from(value)));
        }
        Ok(Self(non_zero))
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }

    /// Whether Esfand of this year has 30 days
    pub const fn is_leap(self) -> bool {
        is_leap_year(self.0.get() as i32)
    }
}

impl TryFrom<u16> for Year {
    type Error = FieldError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month(NonZeroU8);

impl Month {
    pub const MIN: Self = Self(NonZeroU8::MIN);
    pub(crate) const DEY: Self = Self(non_zero_u8(10));

    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns a `FieldError` for `Field::Month` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, FieldError> {
        let non_zero =
            NonZeroU8::new(value).ok_or(FieldError::new(Field::Month, u32::from(value)))?;
        if value > MAX_MONTH {
            return Err(FieldError::new(Field::Month, u32::from(value)));
        }
        Ok(Self(non_zero))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Month {
    type Error = FieldError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day value guaranteed to be valid for a given year and month
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Day(NonZeroU8);

impl Day {
    pub const MIN: Self = Self(NonZeroU8::MIN);
    pub(crate) const TENTH: Self = Self(non_zero_u8(10));

    /// Creates a new Day, validating that it's non-zero and valid for the given year and month
    ///
    /// # Errors
    /// Returns a `FieldError` for `Field::Day` if the value is 0 or past the end of the month.
    pub fn new(value: u8, year: Year, month: Month) -> Result<Self, FieldError> {
        let non_zero = NonZeroU8::new(value).ok_or(FieldError::new(Field::Day, u32::from(value)))?;

        if value > days_in_month(year.get(), month.get()) {
            return Err(FieldError::new(Field::Day, u32::from(value)));
        }

        Ok(Self(non_zero))
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Helper functions

const fn non_zero_u16(value: u16) -> NonZeroU16 {
    match NonZeroU16::new(value) {
        Some(value) => value,
        None => NonZeroU16::MIN,
    }
}

const fn non_zero_u8(value: u8) -> NonZeroU8 {
    match NonZeroU8::new(value) {
        Some(value) => value,
        None => NonZeroU8::MIN,
    }
}

/// Days in `month` of `year`; Esfand has 30 days in leap years. `month` must
/// already be validated.
pub(crate) const fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == ESFAND && is_leap_year(year as i32) {
        ESFAND_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

pub(crate) const fn check_hour(hour: u8) -> Result<u8, FieldError> {
    if hour > MAX_HOUR {
        return Err(FieldError::new(Field::Hour, hour as u32));
    }
    Ok(hour)
}

pub(crate) const fn check_minute(minute: u8) -> Result<u8, FieldError> {
    if minute > MAX_MINUTE {
        return Err(FieldError::new(Field::Minute, minute as u32));
    }
    Ok(minute)
}

pub(crate) const fn check_second(second: u8) -> Result<u8, FieldError> {
    if second > MAX_SECOND {
        return Err(FieldError::new(Field::Second, second as u32));
    }
    Ok(second)
}

pub(crate) const fn check_millisecond(millisecond: u16) -> Result<u16, FieldError> {
    if millisecond > MAX_MILLISECOND {
        return Err(FieldError::new(Field::Millisecond, millisecond as u32));
    }
    Ok(millisecond)
}

/// Clamps `day` to the last day of `month` in `year`.
pub(crate) fn clamp_day(year: u16, month: u8, day: u8) -> u8 {
    let max = days_in_month(year, month);
    if day > max {
        log::trace!("clamping day {day} to {max} for {year}/{month:02}");
        max
    } else {
        day.max(MIN_DAY)
    }
}
