//! Humanized relative times such as "5 days from now" or "پنج روز بعد".

use chrono::{Local, NaiveDateTime};

use crate::PersianDate;
use crate::names::Locale;
use crate::words::to_words;

const MINUTE_MILLIS: i64 = 60 * 1000;
const MONTH_MILLIS: i64 = 2_629_743_830;

/// Unit a duration is expressed in, from finest to coarsest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TimeUnit {
    JustNow,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
    Decade,
    Century,
    Millennium,
}

const UNITS: [TimeUnit; 10] = [
    TimeUnit::JustNow,
    TimeUnit::Minute,
    TimeUnit::Hour,
    TimeUnit::Day,
    TimeUnit::Week,
    TimeUnit::Month,
    TimeUnit::Year,
    TimeUnit::Decade,
    TimeUnit::Century,
    TimeUnit::Millennium,
];

impl TimeUnit {
    pub const fn millis_per_unit(self) -> i64 {
        match self {
            Self::JustNow => 1,
            Self::Minute => MINUTE_MILLIS,
            Self::Hour => MINUTE_MILLIS * 60,
            Self::Day => MINUTE_MILLIS * 60 * 24,
            Self::Week => MINUTE_MILLIS * 60 * 24 * 7,
            Self::Month => MONTH_MILLIS,
            Self::Year => MONTH_MILLIS * 12,
            Self::Decade => MONTH_MILLIS * 12 * 10,
            Self::Century => MONTH_MILLIS * 12 * 100,
            Self::Millennium => MONTH_MILLIS * 12 * 1000,
        }
    }

    /// Any remainder past a whole number of decades counts as one more decade.
    const fn rounds_up(self) -> bool {
        matches!(self, Self::Decade)
    }

    const fn name(self, locale: Locale, plural: bool) -> &'static str {
        match locale {
            Locale::Persian => match self {
                Self::JustNow => "چند لحظه",
                Self::Minute => "دقیقه",
                Self::Hour => "ساعت",
                Self::Day => "روز",
                Self::Week => "هفته",
                Self::Month => "ماه",
                Self::Year => "سال",
                Self::Decade => "دهه",
                Self::Century => "قرن",
                Self::Millennium => "هزاره",
            },
            Locale::English => match (self, plural) {
                (Self::JustNow, _) => "moments",
                (Self::Minute, false) => "minute",
                (Self::Minute, true) => "minutes",
                (Self::Hour, false) => "hour",
                (Self::Hour, true) => "hours",
                (Self::Day, false) => "day",
                (Self::Day, true) => "days",
                (Self::Week, false) => "week",
                (Self::Week, true) => "weeks",
                (Self::Month, false) => "month",
                (Self::Month, true) => "months",
                (Self::Year, false) => "year",
                (Self::Year, true) => "years",
                (Self::Decade, false) => "decade",
                (Self::Decade, true) => "decades",
                (Self::Century, false) => "century",
                (Self::Century, true) => "centuries",
                (Self::Millennium, false) => "millennium",
                (Self::Millennium, true) => "millennia",
            },
        }
    }
}

/// A signed difference expressed as a whole number of `unit`s plus the
/// remainder in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Duration {
    pub quantity: i64,
    pub delta: i64,
    pub unit: TimeUnit,
}

impl Duration {
    pub const fn is_past(&self) -> bool {
        self.quantity < 0 || self.delta < 0
    }

    /// Absolute quantity after rounding.
    fn rounded_quantity(&self) -> i64 {
        let quantity = self.quantity.abs();
        if self.unit.rounds_up() && self.delta != 0 {
            quantity + 1
        } else {
            quantity
        }
    }
}

/// Formats instants relative to a reference instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrettyTime {
    reference: NaiveDateTime,
    locale: Locale,
}

impl PrettyTime {
    pub const fn new(reference: NaiveDateTime, locale: Locale) -> Self {
        Self { reference, locale }
    }

    /// Uses the current local time as the reference.
    pub fn now(locale: Locale) -> Self {
        Self::new(Local::now().naive_local(), locale)
    }

    pub const fn reference(&self) -> NaiveDateTime {
        self.reference
    }

    /// Largest unit that expresses the distance from the reference to `then`
    /// without overflowing into the next unit.
    pub fn approximate_duration(&self, then: NaiveDateTime) -> Duration {
        let difference = (then - self.reference).num_milliseconds();
        let absolute = difference.abs();

        let mut unit = TimeUnit::Millennium;
        for (current, next) in UNITS.iter().zip(UNITS.iter().skip(1)) {
            let millis = current.millis_per_unit();
            let factor = next.millis_per_unit() / millis;
            if millis.saturating_mul(factor) > absolute {
                unit = *current;
                break;
            }
        }

        let millis = unit.millis_per_unit();
        let quantity = difference / millis;
        let delta = difference - quantity * millis;
        log::debug!("{difference}ms formatted as {quantity} x {unit:?}");

        Duration {
            quantity,
            delta,
            unit,
        }
    }

    /// Describes `then` relative to the reference.
    pub fn format(&self, then: NaiveDateTime) -> String {
        self.format_duration(&self.approximate_duration(then))
    }

    /// Describes a Persian date relative to the reference.
    pub fn format_date(&self, then: &PersianDate) -> String {
        self.format(then.to_gregorian())
    }

    pub fn format_duration(&self, duration: &Duration) -> String {
        let past = duration.is_past();
        let unit = duration.unit;

        let body = if unit == TimeUnit::JustNow {
            unit.name(self.locale, false).to_string()
        } else {
            let quantity = duration.rounded_quantity();
            let name = unit.name(self.locale, quantity != 1);
            match self.locale {
                Locale::Persian => {
                    let words = to_words(quantity).unwrap_or_else(|_| quantity.to_string());
                    format!("{words} {name}")
                }
                Locale::English => format!("{quantity} {name}"),
            }
        };

        let suffix = match (self.locale, past) {
            (Locale::Persian, true) => "قبل",
            (Locale::Persian, false) => "بعد",
            (Locale::English, true) => "ago",
            (Locale::English, false) => "from now",
        };
        format!("{body} {suffix}")
    }
}
