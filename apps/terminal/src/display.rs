//! # Display Formatting
//!
//! Turns the engine's `current_value` text into the line shown above the
//! keypad. Presentation only: nothing here feeds back into the state.
//!
//! ```text
//! ┌──────────────────┬──────────────────┐
//! │  current_value   │  display         │
//! ├──────────────────┼──────────────────┤
//! │  "1234567"       │  "1,234,567"     │
//! │  "3."            │  "3"             │
//! │  "0.30000000004" │  "0.3"           │
//! │  "Infinity"      │  "∞"             │
//! │  "NaN"           │  "NaN"           │
//! └──────────────────┴──────────────────┘
//! ```

use calc_core::numeral;
use serde::{Deserialize, Serialize};

/// Default number of fraction digits shown.
pub const DEFAULT_FRACTION_DIGITS: u8 = 3;

/// Upper bound accepted for `max_fraction_digits`.
pub const MAX_FRACTION_DIGITS: u8 = 20;

/// Fraction digits that hold the exact expansion of any `f64`.
const EXACT_FRACTION_DIGITS: usize = 1074;

/// How numbers are rendered on the display line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayOptions {
    /// Insert `,` between groups of three integer digits.
    pub grouping: bool,

    /// Round to at most this many fraction digits.
    pub max_fraction_digits: u8,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        DisplayOptions {
            grouping: true,
            max_fraction_digits: DEFAULT_FRACTION_DIGITS,
        }
    }
}

/// Formats a state value for display.
///
/// The value is parsed permissively, so partial input such as `"3."` or
/// `"00"` shows as the number it denotes.
pub fn format_display(current_value: &str, options: &DisplayOptions) -> String {
    let value = numeral::parse(current_value);

    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let precision = options.max_fraction_digits.min(MAX_FRACTION_DIGITS) as usize;
    let rounded = round_half_away(value.abs(), precision);
    let (int_part, frac_part) = match rounded.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part.trim_end_matches('0')),
        None => (rounded.as_str(), ""),
    };

    // Values that round to zero show as plain "0", never "-0"
    if frac_part.is_empty() && int_part.bytes().all(|b| b == b'0') {
        return "0".to_string();
    }

    let int_part = if options.grouping {
        group_thousands(int_part)
    } else {
        int_part.to_string()
    };
    let sign = if value < 0.0 { "-" } else { "" };

    if frac_part.is_empty() {
        format!("{}{}", sign, int_part)
    } else {
        format!("{}{}.{}", sign, int_part, frac_part)
    }
}

/// Formats a non-negative `value` with `precision` fraction digits, rounding
/// exact halves up.
///
/// `{:.N}` rounds exact binary ties to even (`2.0625` → `2.062`); the display
/// line rounds them away from zero (`2.063`).
fn round_half_away(value: f64, precision: usize) -> String {
    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, value);
    let exact = exact.trim_end_matches('0');
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact, ""));

    if frac_part.len() != precision + 1 || !frac_part.ends_with('5') {
        return format!("{:.*}", precision, value);
    }

    let bumped = increment_digits(&format!("{}{}", int_part, &frac_part[..precision]));
    let (int_part, frac_part) = bumped.split_at(bumped.len() - precision);
    if frac_part.is_empty() {
        int_part.to_string()
    } else {
        format!("{}.{}", int_part, frac_part)
    }
}

/// Adds one to a string of decimal digits.
fn increment_digits(digits: &str) -> String {
    let mut bytes = digits.as_bytes().to_vec();
    for b in bytes.iter_mut().rev() {
        if *b == b'9' {
            *b = b'0';
        } else {
            *b += 1;
            return String::from_utf8_lossy(&bytes).into_owned();
        }
    }
    format!("1{}", String::from_utf8_lossy(&bytes))
}

/// Inserts `,` every three digits from the right.
fn group_thousands(digits: &str) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn show(value: &str) -> String {
        format_display(value, &DisplayOptions::default())
    }

    #[test]
    fn test_thousand_separators() {
        assert_eq!(show("0"), "0");
        assert_eq!(show("999"), "999");
        assert_eq!(show("1000"), "1,000");
        assert_eq!(show("1234567"), "1,234,567");
        assert_eq!(show("-1234567.5"), "-1,234,567.5");
    }

    #[test]
    fn test_partial_input_shows_number() {
        assert_eq!(show("3."), "3");
        assert_eq!(show("00"), "0");
        assert_eq!(show("0.50"), "0.5");
    }

    #[test]
    fn test_rounds_to_three_fraction_digits() {
        assert_eq!(show("0.30000000000000004"), "0.3");
        assert_eq!(show("0.3333333333333333"), "0.333");
        assert_eq!(show("2.6666666666666665"), "2.667");
        assert_eq!(show("0.0001"), "0");
        assert_eq!(show("-0.0001"), "0");
    }

    #[test]
    fn test_exact_halves_round_away_from_zero() {
        assert_eq!(show("2.0625"), "2.063");
        assert_eq!(show("-2.0625"), "-2.063");
        assert_eq!(show("0.0625"), "0.063");
        assert_eq!(show("2.0624"), "2.062");

        let whole = DisplayOptions {
            grouping: true,
            max_fraction_digits: 0,
        };
        assert_eq!(format_display("2.5", &whole), "3");
        assert_eq!(format_display("999.5", &whole), "1,000");
    }

    #[test]
    fn test_increment_digits_carries() {
        assert_eq!(increment_digits("2062"), "2063");
        assert_eq!(increment_digits("1999"), "2000");
        assert_eq!(increment_digits("999"), "1000");
    }

    #[test]
    fn test_non_finite_values() {
        assert_eq!(show("NaN"), "NaN");
        assert_eq!(show("Infinity"), "∞");
        assert_eq!(show("-Infinity"), "-∞");
        assert_eq!(show("garbage"), "NaN");
    }

    #[test]
    fn test_large_values_are_written_out() {
        assert_eq!(show("1e+21"), "1,000,000,000,000,000,000,000");
    }

    #[test]
    fn test_options() {
        let options = DisplayOptions {
            grouping: false,
            max_fraction_digits: 5,
        };
        assert_eq!(format_display("1234567.123456", &options), "1234567.12346");
    }
}
