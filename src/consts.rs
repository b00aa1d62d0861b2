/// Maximum valid Persian year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Minimum valid Persian year
pub const MIN_YEAR: u16 = 1;

/// Maximum valid month (Esfand)
pub const MAX_MONTH: u8 = 12;

/// Number of months in every Persian year
pub const MONTHS_IN_YEAR: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for Mehr, the first 30-day month
pub const MEHR: u8 = 7;
/// Month number for Esfand
pub const ESFAND: u8 = 12;

/// Days in Esfand for leap years
pub const ESFAND_DAYS_LEAP: u8 = 30;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// Esfand shows 29 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // Farvardin
    31, // Ordibehesht
    31, // Khordad
    31, // Tir
    31, // Mordad
    31, // Shahrivar
    30, // Mehr
    30, // Aban
    30, // Azar
    30, // Dey
    30, // Bahman
    29, // Esfand (non-leap, adjusted by is_leap_year check)
];

/// Days in a common Persian year
pub const DAYS_IN_COMMON_YEAR: u16 = 365;
/// Days in a leap Persian year
pub const DAYS_IN_LEAP_YEAR: u16 = 366;

/// Days in the first six (31-day) months
pub(crate) const DAYS_IN_FIRST_HALF: u16 = 186;

/// Maximum valid hour
pub const MAX_HOUR: u8 = 23;
/// Maximum valid minute
pub const MAX_MINUTE: u8 = 59;
/// Maximum valid second
pub const MAX_SECOND: u8 = 59;
/// Maximum valid millisecond
pub const MAX_MILLISECOND: u16 = 999;

/// The only era supported by the calendar
pub const PERSIAN_ERA: i32 = 1;

/// Largest month delta accepted by `PersianCalendar::add_months`
pub const MAX_MONTH_DIFFERENCE: i32 = 120_000;

/// Last Persian year fully covered by the Gregorian range (9999-12-31 is 9378/10/10)
pub const MAX_CALENDAR_YEAR: i32 = 9378;

/// Default pivot for two-digit years
pub const DEFAULT_TWO_DIGIT_YEAR_MAX: i32 = 1410;
/// Smallest accepted two-digit year pivot
pub const MIN_TWO_DIGIT_YEAR_MAX: i32 = 99;

/// Century added to one- and two-digit years while parsing
pub const PARSE_CENTURY: u16 = 1300;

/// Days from 0001-01-01 (day 1) to 0622-03-22, the Gregorian date of 1/1/1
pub(crate) const EPOCH_DAYS_FROM_CE: i32 = 226_896;
/// Days from 0001-01-01 (day 1) to 9999-12-31, the last supported Gregorian date
pub(crate) const MAX_DAYS_FROM_CE: i32 = 3_652_059;
/// Days from 0001-01-01 (day 1) to 1970-01-01
pub(crate) const UNIX_EPOCH_DAYS_FROM_CE: i32 = 719_163;
/// Days in a 33-year sub-cycle, used to estimate the year of a day count
pub(crate) const DAYS_PER_33_YEARS: i32 = 12_053;

/// Milliseconds in a day
pub(crate) const MILLIS_PER_DAY: i64 = 86_400_000;

/// Date component separator
pub const DATE_SEPARATOR: char = '/';
/// Time component separator
pub const TIME_SEPARATOR: char = ':';
