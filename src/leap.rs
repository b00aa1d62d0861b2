//! Leap years of the solar hijri calendar.
//!
//! Years between consecutive breakpoints follow the 33-year sub-cycle (a leap
//! year every fourth year, with a five-year gap once per cycle). The breakpoints
//! absorb the drift of the 2820-year grand cycle against the vernal equinox.

use crate::consts::{DAYS_IN_COMMON_YEAR, DAYS_IN_LEAP_YEAR};

/// Cycle breakpoints. Past the last one the 33-year pattern continues unchanged.
const BREAKS: [i32; 20] = [
    -61, 9, 38, 199, 426, 686, 756, 818, 1111, 1181, 1210, 1635, 2060, 2097, 2192, 2262, 2324,
    2394, 2456, 3178,
];

const CYCLE: i32 = 33;
const LEAPS_PER_CYCLE: i32 = 8;

/// Segment containing `year`: its first year, its length (None for the open
/// segment after the last breakpoint) and the leap years in all earlier segments.
const fn segment(year: i32) -> (i32, Option<i32>, i32) {
    let mut start = BREAKS[0];
    let mut before = 0;
    let mut i = 1;
    while i < BREAKS.len() {
        let end = BREAKS[i];
        let jump = end - start;
        if year < end {
            return (start, Some(jump), before);
        }
        before += jump / CYCLE * LEAPS_PER_CYCLE + jump % CYCLE / 4;
        start = end;
        i += 1;
    }
    (start, None, before)
}

/// Returns whether `year` has 366 days (Esfand has 30 days).
pub const fn is_leap_year(year: i32) -> bool {
    let (start, jump, _) = segment(year);
    let mut n = year - start;
    if let Some(jump) = jump {
        // The last years of a segment borrow the pattern of the next cycle.
        if jump - n < 6 {
            n = n - jump + (jump + 4) / CYCLE * CYCLE;
        }
    }
    let position = (n + 1) % CYCLE;
    position != 0 && (position - 1) % 4 == 0
}

/// Leap years counted from the first segment up to, not including, `year`.
const fn leaps_from_origin(year: i32) -> i32 {
    let (start, jump, before) = segment(year);
    let n = year - start;
    let mut count = before + n / CYCLE * LEAPS_PER_CYCLE + (n % CYCLE + 3) / 4;
    if let Some(jump) = jump {
        if jump % CYCLE == 4 && jump - n == 4 {
            count += 1;
        }
    }
    count
}

/// Number of leap years strictly before `year`, counted from year 1.
pub const fn leap_years_elapsed(year: i32) -> i32 {
    leaps_from_origin(year) - leaps_from_origin(1)
}

/// Days in `year`: 366 for leap years, 365 otherwise.
pub const fn days_in_year(year: i32) -> u16 {
    if is_leap_year(year) {
        DAYS_IN_LEAP_YEAR
    } else {
        DAYS_IN_COMMON_YEAR
    }
}

/// Days from 1/1/1 to the first day of `year`.
pub(crate) const fn days_before_year(year: i32) -> i32 {
    (year - 1) * DAYS_IN_COMMON_YEAR as i32 + leap_years_elapsed(year)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_leap_year_cases() {
        struct TestCase {
            year: i32,
            is_leap: bool,
        }

        let cases = [
            TestCase { year: 1370, is_leap: true },
            TestCase { year: 1375, is_leap: true },
            TestCase { year: 1379, is_leap: true },
            TestCase { year: 1383, is_leap: true },
            TestCase { year: 1386, is_leap: false },
            TestCase { year: 1387, is_leap: true },
            TestCase { year: 1388, is_leap: false },
            TestCase { year: 1391, is_leap: true },
            TestCase { year: 1395, is_leap: true },
            TestCase { year: 1399, is_leap: true },
            TestCase { year: 1400, is_leap: false },
            TestCase { year: 1403, is_leap: true },
            TestCase { year: 1404, is_leap: false },
            TestCase { year: 1408, is_leap: true },
        ];

        for case in &cases {
            assert_eq!(
                is_leap_year(case.year),
                case.is_leap,
                "Year {}: expected {}",
                case.year,
                if case.is_leap { "leap year" } else { "not leap year" }
            );
        }
    }

    #[test]
    fn test_leap_years_elapsed() {
        assert_eq!(leap_years_elapsed(1), 0);
        assert_eq!(leap_years_elapsed(1387), 335);
        assert_eq!(leap_years_elapsed(1388), 336);
    }

    #[test]
    fn test_leap_years_elapsed_matches_counting() {
        let mut count = 0;
        for year in 1..=9999 {
            assert_eq!(leap_years_elapsed(year), count, "Year {year}");
            if is_leap_year(year) {
                count += 1;
            }
        }
    }

    #[test]
    fn test_days_in_year() {
        assert_eq!(days_in_year(1387), 366);
        assert_eq!(days_in_year(1386), 365);
    }

    #[test]
    fn test_no_consecutive_leap_years() {
        for year in 1..9999 {
            assert!(
                !(is_leap_year(year) && is_leap_year(year + 1)),
                "Years {year} and {} are both leap",
                year + 1
            );
        }
    }

    #[test]
    fn test_days_before_year() {
        assert_eq!(days_before_year(1), 0);
        assert_eq!(days_before_year(2), 365);
        assert_eq!(days_before_year(1387), 1386 * 365 + 335);
    }
}
