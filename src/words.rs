//! Persian number words and digit conversion.

use crate::error::RangeError;

const ZERO: &str = "صفر";
const AND: &str = " و ";

const ONES: [&str; 20] = [
    "",
    "يک",
    "دو",
    "سه",
    "چهار",
    "پنج",
    "شش",
    "هفت",
    "هشت",
    "نه",
    "ده",
    "يازده",
    "دوازده",
    "سيزده",
    "چهارده",
    "پانزده",
    "شانزده",
    "هفده",
    "هجده",
    "نوزده",
];

const TENS: [&str; 10] = [
    "", "", "بيست", "سی", "چهل", "پنجاه", "شصت", "هفتاد", "هشتاد", "نود",
];

const HUNDREDS: [&str; 10] = [
    "", "صد", "دویست", "سیصد", "چهارصد", "پانصد", "ششصد", "هفتصد", "هشتصد", "نهصد",
];

const SCALES: [&str; 4] = ["", "هزار", "میلیون", "میلیارد"];

const PERSIAN_DIGITS: [char; 10] = ['۰', '۱', '۲', '۳', '۴', '۵', '۶', '۷', '۸', '۹'];

/// Spells out `number` in Persian, e.g. 221 is "دویست و بيست و يک".
///
/// # Errors
/// Returns `RangeError::NumberOutOfRange` for negative values and values
/// above `i32::MAX`.
pub fn to_words(number: i64) -> Result<String, RangeError> {
    if !(0..=i64::from(i32::MAX)).contains(&number) {
        return Err(RangeError::NumberOutOfRange(number));
    }
    if number == 0 {
        return Ok(ZERO.to_string());
    }

    let mut groups = Vec::new();
    let mut rest = number;
    let mut scale = 0;
    while rest > 0 {
        let group = rest % 1000;
        if group > 0 {
            let words = below_thousand(group);
            groups.push(if scale == 0 {
                words
            } else {
                format!("{words} {}", SCALES[scale])
            });
        }
        rest /= 1000;
        scale += 1;
    }

    groups.reverse();
    Ok(groups.join(AND))
}

/// Words for `1..=999`.
fn below_thousand(number: i64) -> String {
    // Indexing is bounded by the modulo arithmetic.
    let hundreds = (number / 100) as usize;
    let rest = (number % 100) as usize;

    let mut parts = Vec::with_capacity(3);
    if hundreds > 0 {
        parts.push(HUNDREDS[hundreds]);
    }
    if rest >= ONES.len() {
        parts.push(TENS[rest / 10]);
        if rest % 10 > 0 {
            parts.push(ONES[rest % 10]);
        }
    } else if rest > 0 {
        parts.push(ONES[rest]);
    }
    parts.join(AND)
}

/// Replaces Latin digits with Persian digits.
pub fn to_persian_digits(text: &str) -> String {
    text.chars()
        .map(|c| match c.to_digit(10) {
            Some(digit) => PERSIAN_DIGITS[digit as usize],
            _ => c,
        })
        .collect()
}

/// Replaces Persian (and Arabic-Indic) digits with Latin digits.
pub fn to_latin_digits(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '۰'..='۹' => latin_digit(u32::from(c) - u32::from('۰')),
            '٠'..='٩' => latin_digit(u32::from(c) - u32::from('٠')),
            _ => c,
        })
        .collect()
}

fn latin_digit(value: u32) -> char {
    char::from_digit(value, 10).unwrap_or('0')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_words_tens() {
        struct TestCase {
            number: i64,
            expected: &'static str,
        }

        let cases = [
            TestCase { number: 31, expected: "سی و يک" },
            TestCase { number: 42, expected: "چهل و دو" },
            TestCase { number: 53, expected: "پنجاه و سه" },
            TestCase { number: 64, expected: "شصت و چهار" },
            TestCase { number: 75, expected: "هفتاد و پنج" },
            TestCase { number: 86, expected: "هشتاد و شش" },
            TestCase { number: 97, expected: "نود و هفت" },
        ];

        for case in &cases {
            assert_eq!(to_words(case.number).unwrap(), case.expected, "{}", case.number);
        }
    }

    #[test]
    fn test_to_words_hundreds() {
        struct TestCase {
            number: i64,
            expected: &'static str,
        }

        let cases = [
            TestCase { number: 110, expected: "صد و ده" },
            TestCase { number: 221, expected: "دویست و بيست و يک" },
            TestCase { number: 332, expected: "سیصد و سی و دو" },
            TestCase { number: 443, expected: "چهارصد و چهل و سه" },
            TestCase { number: 554, expected: "پانصد و پنجاه و چهار" },
            TestCase { number: 665, expected: "ششصد و شصت و پنج" },
            TestCase { number: 776, expected: "هفتصد و هفتاد و شش" },
            TestCase { number: 887, expected: "هشتصد و هشتاد و هفت" },
            TestCase { number: 998, expected: "نهصد و نود و هشت" },
        ];

        for case in &cases {
            assert_eq!(to_words(case.number).unwrap(), case.expected, "{}", case.number);
        }
    }

    #[test]
    fn test_to_words_round_values() {
        assert_eq!(to_words(1_000_000_000).unwrap(), "يک میلیارد");
        assert_eq!(to_words(1_000_000).unwrap(), "يک میلیون");
        assert_eq!(to_words(1000).unwrap(), "يک هزار");
        assert_eq!(to_words(100).unwrap(), "صد");
        assert_eq!(to_words(0).unwrap(), "صفر");
    }

    #[test]
    fn test_to_words_mixed_groups() {
        assert_eq!(to_words(1590).unwrap(), "يک هزار و پانصد و نود");
        assert_eq!(to_words(18_910).unwrap(), "هجده هزار و نهصد و ده");
        assert_eq!(to_words(1_000_005).unwrap(), "يک میلیون و پنج");
    }

    #[test]
    fn test_to_words_limits() {
        assert!(to_words(i64::from(i32::MAX)).is_ok());
        assert_eq!(
            to_words(i64::MAX),
            Err(RangeError::NumberOutOfRange(i64::MAX))
        );
        assert_eq!(to_words(-1000), Err(RangeError::NumberOutOfRange(-1000)));
    }

    #[test]
    fn test_digit_conversion() {
        assert_eq!(to_latin_digits("۰۱۲۳۴۵۶۷۸۹"), "0123456789");
        assert_eq!(to_persian_digits("0123456789"), "۰۱۲۳۴۵۶۷۸۹");
        assert_eq!(to_latin_digits("۱۲۳ABC"), "123ABC");
        assert_eq!(to_persian_digits("123ABC"), "۱۲۳ABC");
    }
}
