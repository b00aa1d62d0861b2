use chrono::NaiveDateTime;

use crate::prelude::*;

/// The field of a Persian date tuple that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Field {
    #[display(fmt = "year")]
    Year,
    #[display(fmt = "month")]
    Month,
    #[display(fmt = "day")]
    Day,
    #[display(fmt = "hour")]
    Hour,
    #[display(fmt = "minute")]
    Minute,
    #[display(fmt = "second")]
    Second,
    #[display(fmt = "millisecond")]
    Millisecond,
}

/// A field value outside its allowed range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Invalid {field}: {value}")]
pub struct FieldError {
    pub field: Field,
    pub value: u32,
}

impl FieldError {
    pub(crate) const fn new(field: Field, value: u32) -> Self {
        Self { field, value }
    }
}

/// Operation argument outside supported bounds.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Only `PERSIAN_ERA` exists.
    #[error("Invalid era: {0} (only era 1 is supported)")]
    InvalidEra(i32),

    /// Two-digit year pivot outside `99..=9378`.
    #[error("Invalid two-digit year max: {0} (must be 99-9378)")]
    TwoDigitYearMax(i32),

    /// Month delta larger than `MAX_MONTH_DIFFERENCE`.
    #[error("Month delta {0} exceeds the maximum of 120000")]
    MonthDelta(i32),

    /// Year leaves the representable range.
    #[error("Year out of range: {0}")]
    YearOutOfRange(i64),

    /// Instant outside `MIN_SUPPORTED..=MAX_SUPPORTED`.
    #[error("Date out of supported range: {0}")]
    DateOutOfRange(NaiveDateTime),

    #[error("Name index out of range: {0}")]
    NameIndex(usize),

    #[error("Number out of range: {0} (must be 0-2147483647)")]
    NumberOutOfRange(i64),

    #[error(transparent)]
    Field(#[from] FieldError),
}

/// Relational comparison involving a missing date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ComparisonError {
    #[error("Cannot order a missing date")]
    NoValue,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_error_names_field_and_value() {
        let err = FieldError::new(Field::Month, 13);
        assert_eq!(err.to_string(), "Invalid month: 13");

        let err = FieldError::new(Field::Millisecond, 2000);
        assert_eq!(err.to_string(), "Invalid millisecond: 2000");
    }

    #[test]
    fn test_range_error_display() {
        assert_eq!(
            RangeError::InvalidEra(2).to_string(),
            "Invalid era: 2 (only era 1 is supported)"
        );
        assert!(RangeError::MonthDelta(120_001).to_string().contains("120001"));
    }
}
