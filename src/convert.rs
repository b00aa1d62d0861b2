//! Conversion between Persian dates and Gregorian `NaiveDateTime` instants.
//!
//! Both directions go through a day count measured from 1 Farvardin 1, which
//! fell on 0622-03-22 in the proleptic Gregorian calendar. Time of day is
//! copied across unchanged at millisecond precision.

use chrono::{Datelike, NaiveDateTime, TimeDelta, Timelike};

use crate::PersianDate;
use crate::consts::{
    DAYS_IN_FIRST_HALF, DAYS_PER_33_YEARS, EPOCH_DAYS_FROM_CE, MAX_DAYS_FROM_CE, MAX_MILLISECOND,
    MEHR, MILLIS_PER_DAY, UNIX_EPOCH_DAYS_FROM_CE,
};
use crate::leap::days_before_year;

/// First instant with a Persian equivalent: 0622-03-22T00:00:00 (1/1/1).
pub fn min_supported() -> NaiveDateTime {
    gregorian(EPOCH_DAYS_FROM_CE, 0)
}

/// Last instant with a Persian equivalent: 9999-12-31T23:59:59.999 (9378/10/10).
pub fn max_supported() -> NaiveDateTime {
    gregorian(MAX_DAYS_FROM_CE, MILLIS_PER_DAY - 1)
}

/// Returns whether `dt` lies within `min_supported()..=max_supported()`.
pub fn is_supported(dt: NaiveDateTime) -> bool {
    (min_supported()..=max_supported()).contains(&dt)
}

/// Converts a Gregorian instant to its Persian date.
///
/// Returns `None` for instants outside the supported range. Sub-millisecond
/// precision is dropped.
pub fn to_persian(dt: NaiveDateTime) -> Option<PersianDate> {
    if !is_supported(dt) {
        log::debug!("{dt} has no Persian equivalent");
        return None;
    }

    let (year, month, day) = from_days(dt.date().num_days_from_ce() - EPOCH_DAYS_FROM_CE)?;
    let time = dt.time();
    // Leap seconds are reported as nanosecond values past one billion.
    let millisecond = u16::try_from(time.nanosecond() / 1_000_000)
        .ok()?
        .min(MAX_MILLISECOND);

    PersianDate::with_millis(
        year,
        month,
        day,
        u8::try_from(time.hour()).ok()?,
        u8::try_from(time.minute()).ok()?,
        u8::try_from(time.second()).ok()?,
        millisecond,
    )
    .ok()
}

/// Converts a Persian date to its Gregorian instant.
pub fn to_gregorian(date: &PersianDate) -> NaiveDateTime {
    let days = days_from_epoch(date.year(), date.month(), date.day());
    let millis = ((i64::from(date.hour()) * 60 + i64::from(date.minute())) * 60
        + i64::from(date.second()))
        * 1000
        + i64::from(date.millisecond());

    gregorian(EPOCH_DAYS_FROM_CE + days, millis)
}

/// Days from 1 Farvardin 1 to the given date.
pub(crate) fn days_from_epoch(year: u16, month: u8, day: u8) -> i32 {
    days_before_year(i32::from(year)) + days_before_month(month) + i32::from(day) - 1
}

/// Days in the months preceding `month` of any year.
pub(crate) fn days_before_month(month: u8) -> i32 {
    let month = i32::from(month);
    let mehr = i32::from(MEHR);
    if month < mehr {
        31 * (month - 1)
    } else {
        i32::from(DAYS_IN_FIRST_HALF) + 30 * (month - mehr)
    }
}

/// Inverse of `days_from_epoch`.
pub(crate) fn from_days(days: i32) -> Option<(u16, u8, u8)> {
    if days < 0 {
        return None;
    }

    let mut year = days * 33 / DAYS_PER_33_YEARS + 1;
    while days_before_year(year + 1) <= days {
        year += 1;
    }
    while days_before_year(year) > days {
        year -= 1;
    }

    let remainder = days - days_before_year(year);
    let first_half = i32::from(DAYS_IN_FIRST_HALF);
    let (month, day) = if remainder < first_half {
        (remainder / 31 + 1, remainder % 31 + 1)
    } else {
        let remainder = remainder - first_half;
        (remainder / 30 + i32::from(MEHR), remainder % 30 + 1)
    };

    Some((
        u16::try_from(year).ok()?,
        u8::try_from(month).ok()?,
        u8::try_from(day).ok()?,
    ))
}

/// Instant at `millis` into the day numbered `days_from_ce` (0001-01-01 is day 1).
fn gregorian(days_from_ce: i32, millis: i64) -> NaiveDateTime {
    NaiveDateTime::default()
        + TimeDelta::days(i64::from(days_from_ce - UNIX_EPOCH_DAYS_FROM_CE))
        + TimeDelta::milliseconds(millis)
}
