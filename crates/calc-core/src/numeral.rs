//! # Numeral Module
//!
//! Conversion between the textual values held in
//! [`CalculatorState`](crate::CalculatorState) and `f64`.
//!
//! ## Why Keep Values as Text?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  IN-PROGRESS INPUT CANNOT BE A NUMBER                                   │
//! │                                                                         │
//! │  User taps:   3    .    0    5                                          │
//! │  Text:       "3"  "3." "3.0" "3.05"                                     │
//! │  As f64:      3    3    3    3.05    ❌ "3." and "3.0" are lost         │
//! │                                                                         │
//! │  OUR SOLUTION: text in the state, f64 only inside arithmetic            │
//! │    parse(text) ──► arithmetic ──► format(f64) ──► text                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rules
//! - [`parse`] is permissive: leading whitespace is skipped, the longest
//!   valid decimal literal is used, anything after it is ignored, and input
//!   without a valid literal yields NaN. It never fails.
//! - [`format`] produces the shortest text that parses back to the same
//!   value: no grouping separators, `.` as decimal point, optional leading
//!   `-`, scientific notation only for very large or very small magnitudes.

/// Literal accepted in place of digits for an infinite value.
const INFINITY_LITERAL: &str = "Infinity";

/// Largest decimal exponent (exclusive) printed in plain notation.
const MAX_PLAIN_EXPONENT: i32 = 21;

/// Smallest decimal exponent (exclusive) printed in plain notation.
const MIN_PLAIN_EXPONENT: i32 = -6;

/// Fraction digits that hold the exact expansion of any `f64` in
/// scientific form (at most 767 significant digits).
const EXACT_DIGITS: usize = 800;

// =============================================================================
// Parsing
// =============================================================================

/// Parses the leading decimal literal of `text`.
///
/// ## Example
/// ```rust
/// use calc_core::numeral::parse;
///
/// assert_eq!(parse("3."), 3.0);
/// assert_eq!(parse("12abc"), 12.0);
/// assert_eq!(parse("-Infinity"), f64::NEG_INFINITY);
/// assert!(parse("abc").is_nan());
/// ```
pub fn parse(text: &str) -> f64 {
    let text = text.trim_start();
    let len = literal_len(text);
    if len == 0 {
        return f64::NAN;
    }

    let literal = &text[..len];
    let (negative, magnitude) = match literal.as_bytes()[0] {
        b'-' => (true, &literal[1..]),
        b'+' => (false, &literal[1..]),
        _ => (false, literal),
    };

    let value = if magnitude == INFINITY_LITERAL {
        f64::INFINITY
    } else {
        magnitude.parse::<f64>().unwrap_or(f64::NAN)
    };

    if negative {
        -value
    } else {
        value
    }
}

/// Returns the byte length of the decimal literal at the start of `text`,
/// or 0 when there is none.
///
/// Grammar: `[+-]? ( "Infinity" | digits ["." digits?] | "." digits ) ([eE] [+-]? digits)?`
fn literal_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut pos = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        pos += 1;
    }

    if text[pos..].starts_with(INFINITY_LITERAL) {
        return pos + INFINITY_LITERAL.len();
    }

    let int_digits = count_digits(&bytes[pos..]);
    pos += int_digits;

    let mut frac_digits = 0;
    if bytes.get(pos) == Some(&b'.') {
        frac_digits = count_digits(&bytes[pos + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            pos += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return 0;
    }

    // Exponent only counts when at least one digit follows it
    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        let mut exp_pos = pos + 1;
        if matches!(bytes.get(exp_pos), Some(b'+' | b'-')) {
            exp_pos += 1;
        }
        let exp_digits = count_digits(&bytes[exp_pos..]);
        if exp_digits > 0 {
            pos = exp_pos + exp_digits;
        }
    }

    pos
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

// =============================================================================
// Formatting
// =============================================================================

/// Formats a value as the canonical decimal text stored in the state.
///
/// ## Layout
/// ```text
/// ┌──────────────────────────┬──────────────────────────────────────────┐
/// │  Value                   │  Text                                    │
/// ├──────────────────────────┼──────────────────────────────────────────┤
/// │  NaN                     │  "NaN"                                   │
/// │  ±∞                      │  "Infinity" / "-Infinity"                │
/// │  -0.0                    │  "0"                                     │
/// │  1e-7 < |x| < 1e21       │  plain: "12", "0.5", "0.000001"          │
/// │  otherwise               │  scientific: "1e+21", "1.5e-10"          │
/// └──────────────────────────┴──────────────────────────────────────────┘
/// ```
///
/// ## Example
/// ```rust
/// use calc_core::numeral::format;
///
/// assert_eq!(format(12.0), "12");
/// assert_eq!(format(0.1 + 0.2), "0.30000000000000004");
/// assert_eq!(format(1e21), "1e+21");
/// assert_eq!(format(f64::NAN), "NaN");
/// ```
pub fn format(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value < 0.0 {
        return format!("-{}", format(-value));
    }

    let (digits, exponent) = shortest_digits(value);
    let k = digits.len() as i32;
    // value = 0.<digits> × 10^n
    let n = exponent + 1;

    if k <= n && n <= MAX_PLAIN_EXPONENT {
        format!("{}{}", digits, "0".repeat((n - k) as usize))
    } else if 0 < n && n <= MAX_PLAIN_EXPONENT {
        let (int_part, frac_part) = digits.split_at(n as usize);
        format!("{}.{}", int_part, frac_part)
    } else if MIN_PLAIN_EXPONENT < n && n <= 0 {
        format!("0.{}{}", "0".repeat((-n) as usize), digits)
    } else {
        let e = n - 1;
        let sign = if e >= 0 { '+' } else { '-' };
        if k == 1 {
            format!("{}e{}{}", digits, sign, e.abs())
        } else {
            let (lead, rest) = digits.split_at(1);
            format!("{}.{}e{}{}", lead, rest, sign, e.abs())
        }
    }
}

/// Shortest round-trip digits and decimal exponent of a positive finite
/// value: `value = d.ddd × 10^exponent`.
///
/// When two candidates of that length are equally close to the value, the
/// one with the even last digit wins.
fn shortest_digits(value: f64) -> (String, i32) {
    // `{:e}` gives the shortest round-trip digits, e.g. "1.2345e-7"
    let (digits, exponent) = split_scientific(&format!("{:e}", value));
    match even_neighbor(value, &digits, exponent) {
        Some(even) => (even, exponent),
        None => (digits, exponent),
    }
}

/// Splits `"1.2345e-7"` into `("12345", -7)`.
fn split_scientific(text: &str) -> (String, i32) {
    let (mantissa, exponent) = text.split_once('e').unwrap_or((text, "0"));
    let digits = mantissa.chars().filter(char::is_ascii_digit).collect();
    (digits, exponent.parse().unwrap_or(0))
}

/// Returns the even alternative to `digits` when `value` lies exactly
/// halfway between it and an odd `digits`.
fn even_neighbor(value: f64, digits: &str, exponent: i32) -> Option<String> {
    let k = digits.len();
    let shortest: u64 = digits.parse().ok()?;
    if shortest % 2 == 0 {
        return None;
    }

    // A tie has exactly one more significant digit than `digits`, a 5
    let (exact, exact_exponent) = split_scientific(&format!("{:.*e}", EXACT_DIGITS, value));
    let exact = exact.trim_end_matches('0');
    if exact_exponent != exponent || exact.len() != k + 1 || !exact.ends_with('5') {
        return None;
    }

    let lower: u64 = exact[..k].parse().ok()?;
    let other = if shortest == lower {
        lower + 1
    } else if shortest == lower + 1 {
        lower
    } else {
        return None;
    };

    let other = other.to_string();
    if other.len() != k {
        return None;
    }
    let scale = exponent - (k as i32 - 1);
    let round_trips = format!("{}e{}", other, scale).parse::<f64>().ok()? == value;
    round_trips.then_some(other)
}

// =============================================================================
// Unit Tests
// =============================================================================
