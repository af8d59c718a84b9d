//! # Engine Module
//!
//! The calculator reducer: `(state, event) -> state`.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │            number / decimal / doubleZero / posneg / percentage          │
//! │                 ┌────┐                        ┌────┐                    │
//! │                 │    ▼                        │    ▼                    │
//! │           ┌──────────────┐   operator   ┌──────────────────┐            │
//! │  initial ►│  Idle        │─────────────►│  Pending         │            │
//! │           │  op = None   │◄─────────────│  op = Some(+-*/%)│──┐         │
//! │           └──────────────┘    equal     └──────────────────┘  │operator │
//! │                  ▲                              ▲             │(chain)  │
//! │                  │ clear (from anywhere)        └─────────────┘         │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Chaining is strictly left to right and there is no precedence. Only one
//! operator can be pending. A chained operator leaves its result in
//! `current_value`, so digits typed next are appended to it: `3 + 4 + 5 =`
//! is `7 + 75 = 82`. Press `=` before the next operator to start fresh.
//!
//! ## Example
//! ```rust
//! use calc_core::engine::apply;
//! use calc_core::CalculatorState;
//!
//! let mut state = CalculatorState::initial();
//! for (kind, payload) in [
//!     ("number", Some("3")),
//!     ("operator", Some("+")),
//!     ("number", Some("4")),
//!     ("equal", None),
//!     ("operator", Some("+")),
//!     ("number", Some("5")),
//!     ("equal", None),
//! ] {
//!     state = apply(kind, payload, &state);
//! }
//! assert_eq!(state.current_value, "12");
//! ```

use crate::numeral;
use crate::types::{CalculatorState, Event, Operator};
use crate::INITIAL_VALUE;

/// Text appended by the double-zero key.
const DOUBLE_ZERO: &str = "00";

/// Decimal point used in numerals.
const DECIMAL_POINT: char = '.';

// =============================================================================
// Reducer
// =============================================================================

/// Applies a raw `(kind, payload)` event to `state`.
///
/// Events that fail to decode (unknown kind, missing or invalid payload)
/// leave the state unchanged.
pub fn apply(kind: &str, payload: Option<&str>, state: &CalculatorState) -> CalculatorState {
    match Event::parse(kind, payload) {
        Ok(event) => reduce(state, &event),
        Err(_) => state.clone(),
    }
}

/// Applies a typed event to `state` and returns the next state.
///
/// ## Transitions
/// ```text
/// ┌──────────────┬──────────────────────────────────────────────────────────┐
/// │  Event       │  Effect                                                  │
/// ├──────────────┼──────────────────────────────────────────────────────────┤
/// │  Number(d)   │  "0" → "d", otherwise append d                           │
/// │  Operator(o) │  pending? evaluate and chain : capture, current = "0"    │
/// │  Clear       │  initial state                                           │
/// │  PosNeg      │  current = -current                                      │
/// │  Percentage  │  current = current / 100                                 │
/// │  Equal       │  pending? evaluate, drop operator : no-op                │
/// │  DoubleZero  │  "0" → "00", otherwise append "00"                       │
/// │  Decimal     │  append "." unless one is present                        │
/// └──────────────┴──────────────────────────────────────────────────────────┘
/// ```
pub fn reduce(state: &CalculatorState, event: &Event) -> CalculatorState {
    match *event {
        Event::Number(digit) => CalculatorState {
            current_value: append(&state.current_value, &digit.to_string()),
            ..state.clone()
        },

        Event::Operator(next) => match pending(state) {
            Some((previous, operator)) => {
                let result = evaluate(previous, &state.current_value, operator);
                CalculatorState {
                    current_value: result.clone(),
                    previous_value: Some(result),
                    operator: Some(next),
                }
            }
            None => CalculatorState {
                current_value: INITIAL_VALUE.to_string(),
                previous_value: Some(state.current_value.clone()),
                operator: Some(next),
            },
        },

        Event::Clear => CalculatorState::initial(),

        Event::PosNeg => CalculatorState {
            current_value: numeral::format(-numeral::parse(&state.current_value)),
            ..state.clone()
        },

        Event::Percentage => CalculatorState {
            current_value: numeral::format(numeral::parse(&state.current_value) / 100.0),
            ..state.clone()
        },

        Event::Equal => match pending(state) {
            Some((previous, operator)) => CalculatorState {
                current_value: evaluate(previous, &state.current_value, operator),
                previous_value: None,
                operator: None,
            },
            None => state.clone(),
        },

        Event::DoubleZero => CalculatorState {
            current_value: append(&state.current_value, DOUBLE_ZERO),
            ..state.clone()
        },

        Event::Decimal => {
            if state.current_value.contains(DECIMAL_POINT) {
                state.clone()
            } else {
                CalculatorState {
                    current_value: format!("{}{}", state.current_value, DECIMAL_POINT),
                    ..state.clone()
                }
            }
        }
    }
}

/// Returns the captured operand and operator when an operation is pending.
fn pending(state: &CalculatorState) -> Option<(&str, Operator)> {
    match (&state.previous_value, state.operator) {
        (Some(previous), Some(operator)) => Some((previous.as_str(), operator)),
        _ => None,
    }
}

/// Appends `input` to `current`, replacing a lone leading zero.
fn append(current: &str, input: &str) -> String {
    if current == INITIAL_VALUE {
        input.to_string()
    } else {
        format!("{}{}", current, input)
    }
}

// =============================================================================
// Evaluation
// =============================================================================

/// Evaluates `previous <operator> current` and returns the result as text.
///
/// Both operands go through [`numeral::parse`], so unparseable text becomes
/// NaN, and the result goes through [`numeral::format`]. Division by zero
/// yields `Infinity`, `-Infinity` or `NaN`.
///
/// ## Example
/// ```rust
/// use calc_core::engine::evaluate;
/// use calc_core::Operator;
///
/// assert_eq!(evaluate("7", "2", Operator::Divide), "3.5");
/// assert_eq!(evaluate("-7", "3", Operator::Remainder), "-1");
/// assert_eq!(evaluate("6", "0", Operator::Divide), "Infinity");
/// ```
pub fn evaluate(previous: &str, current: &str, operator: Operator) -> String {
    let lhs = numeral::parse(previous);
    let rhs = numeral::parse(current);
    numeral::format(operator.apply(lhs, rhs))
}

/// Evaluates with an operator given as a symbol.
///
/// An unknown symbol returns `current` unchanged.
pub fn evaluate_symbol(previous: &str, current: &str, symbol: &str) -> String {
    match symbol.parse::<Operator>() {
        Ok(operator) => evaluate(previous, current, operator),
        Err(_) => current.to_string(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Runs a sequence of raw events from the initial state.
    fn run(events: &[(&str, Option<&str>)]) -> CalculatorState {
        events
            .iter()
            .fold(CalculatorState::initial(), |state, (kind, payload)| {
                apply(kind, *payload, &state)
            })
    }

    fn state(current: &str, previous: Option<&str>, operator: Option<Operator>) -> CalculatorState {
        CalculatorState {
            current_value: current.to_string(),
            previous_value: previous.map(str::to_string),
            operator,
        }
    }

    #[test]
    fn test_digits_suppress_leading_zero() {
        let result = run(&[("number", Some("0")), ("number", Some("5"))]);
        assert_eq!(result.current_value, "5");

        let result = run(&[
            ("number", Some("1")),
            ("number", Some("0")),
            ("number", Some("7")),
        ]);
        assert_eq!(result.current_value, "107");
    }

    #[test]
    fn test_zero_digit_on_zero_stays_zero() {
        let result = run(&[("number", Some("0")), ("number", Some("0"))]);
        assert_eq!(result.current_value, "0");
    }

    #[test]
    fn test_decimal_is_added_once() {
        let result = run(&[("number", Some("3")), ("decimal", None), ("decimal", None)]);
        assert_eq!(result.current_value, "3.");

        let result = run(&[
            ("decimal", None),
            ("number", Some("5")),
            ("decimal", None),
            ("number", Some("2")),
        ]);
        assert_eq!(result.current_value, "0.52");
    }

    #[test]
    fn test_running_total_after_equal() {
        let result = run(&[
            ("number", Some("3")),
            ("operator", Some("+")),
            ("number", Some("4")),
            ("equal", None),
            ("operator", Some("+")),
            ("number", Some("5")),
            ("equal", None),
        ]);
        assert_eq!(result, state("12", None, None));
    }

    #[test]
    fn test_chained_operator_result_takes_next_digits() {
        // 3 + 4 chains to "7", then "5" is appended: 7 + 75
        let result = run(&[
            ("number", Some("3")),
            ("operator", Some("+")),
            ("number", Some("4")),
            ("operator", Some("+")),
            ("number", Some("5")),
            ("equal", None),
        ]);
        assert_eq!(result, state("82", None, None));
    }

    #[test]
    fn test_chaining_has_no_precedence() {
        // 3 + 4 then *, equal reuses the chained result: 7 * 7
        let result = run(&[
            ("number", Some("3")),
            ("operator", Some("+")),
            ("number", Some("4")),
            ("operator", Some("*")),
            ("equal", None),
        ]);
        assert_eq!(result.current_value, "49");

        // (3 + 4) * 2
        let result = run(&[
            ("number", Some("3")),
            ("operator", Some("+")),
            ("number", Some("4")),
            ("equal", None),
            ("operator", Some("*")),
            ("number", Some("2")),
            ("equal", None),
        ]);
        assert_eq!(result.current_value, "14");
    }

    #[test]
    fn test_chaining_shows_intermediate_result() {
        let result = run(&[
            ("number", Some("3")),
            ("operator", Some("+")),
            ("number", Some("4")),
            ("operator", Some("-")),
        ]);
        assert_eq!(result, state("7", Some("7"), Some(Operator::Subtract)));
    }

    #[test]
    fn test_operator_captures_current_value() {
        let result = run(&[("number", Some("9")), ("operator", Some("/"))]);
        assert_eq!(result, state("0", Some("9"), Some(Operator::Divide)));
        assert!(result.is_pending());
    }

    #[test]
    fn test_digits_after_chained_result_are_appended() {
        // The chained result is not replaced, matching the digit rule
        let result = run(&[
            ("number", Some("3")),
            ("operator", Some("+")),
            ("number", Some("4")),
            ("operator", Some("+")),
            ("number", Some("1")),
        ]);
        assert_eq!(result.current_value, "71");
    }

    #[test]
    fn test_percentage() {
        let result = reduce(&state("50", None, None), &Event::Percentage);
        assert_eq!(result.current_value, "0.5");

        let result = reduce(&state("5", None, None), &Event::Percentage);
        assert_eq!(result.current_value, "0.05");
    }

    #[test]
    fn test_posneg_round_trip() {
        let negated = reduce(&state("7", None, None), &Event::PosNeg);
        assert_eq!(negated.current_value, "-7");

        let restored = reduce(&negated, &Event::PosNeg);
        assert_eq!(restored.current_value, "7");
    }

    #[test]
    fn test_posneg_normalizes_text() {
        assert_eq!(reduce(&state("0", None, None), &Event::PosNeg).current_value, "0");
        assert_eq!(reduce(&state("3.", None, None), &Event::PosNeg).current_value, "-3");
        assert_eq!(reduce(&state("00", None, None), &Event::PosNeg).current_value, "0");
    }

    #[test]
    fn test_posneg_rewrites_halfway_digits_to_even() {
        let result = reduce(&state("21718.2159423828125", None, None), &Event::PosNeg);
        assert_eq!(result.current_value, "-21718.215942382812");
    }

    #[test]
    fn test_posneg_keeps_pending_operation() {
        let before = state("4", Some("3"), Some(Operator::Multiply));
        let after = reduce(&before, &Event::PosNeg);
        assert_eq!(after, state("-4", Some("3"), Some(Operator::Multiply)));
    }

    #[test]
    fn test_equal_without_operator_is_noop() {
        let before = state("42", None, None);
        assert_eq!(reduce(&before, &Event::Equal), before);
        assert_eq!(apply("equal", Some("="), &before), before);
    }

    #[test]
    fn test_clear_from_any_state() {
        let states = [
            state("123.4", None, None),
            state("0", Some("9"), Some(Operator::Divide)),
            state("NaN", Some("NaN"), Some(Operator::Remainder)),
        ];
        for before in states {
            assert_eq!(reduce(&before, &Event::Clear), CalculatorState::initial());
        }
    }

    #[test]
    fn test_division_by_zero_is_stable() {
        let result = run(&[
            ("number", Some("6")),
            ("operator", Some("/")),
            ("number", Some("0")),
            ("equal", None),
        ]);
        assert!(numeral::parse(&result.current_value).is_infinite());
        assert_eq!(result.current_value, "Infinity");

        let again = reduce(&result, &Event::Equal);
        assert_eq!(again, result);
    }

    #[test]
    fn test_zero_divided_by_zero_is_nan() {
        let result = run(&[
            ("operator", Some("/")),
            ("number", Some("0")),
            ("equal", None),
        ]);
        assert_eq!(result.current_value, "NaN");
    }

    #[test]
    fn test_nan_propagates_through_chaining() {
        let result = run(&[
            ("operator", Some("/")),
            ("operator", Some("+")),
            ("number", Some("5")),
            ("equal", None),
        ]);
        assert_eq!(result.current_value, "NaN");
    }

    #[test]
    fn test_double_zero() {
        let result = reduce(&state("0", None, None), &Event::DoubleZero);
        assert_eq!(result.current_value, "00");

        let result = reduce(&state("12", None, None), &Event::DoubleZero);
        assert_eq!(result.current_value, "1200");
    }

    #[test]
    fn test_remainder_operator() {
        let result = run(&[
            ("number", Some("7")),
            ("operator", Some("%")),
            ("number", Some("3")),
            ("equal", None),
        ]);
        assert_eq!(result.current_value, "1");
    }

    #[test]
    fn test_floating_point_results_keep_full_precision() {
        let result = run(&[
            ("decimal", None),
            ("number", Some("1")),
            ("operator", Some("+")),
            ("decimal", None),
            ("number", Some("2")),
            ("equal", None),
        ]);
        assert_eq!(result.current_value, "0.30000000000000004");
    }

    #[test]
    fn test_unrecognized_events_are_noops() {
        let before = state("12", Some("3"), Some(Operator::Add));
        assert_eq!(apply("sqrt", None, &before), before);
        assert_eq!(apply("number", None, &before), before);
        assert_eq!(apply("number", Some("12"), &before), before);
        assert_eq!(apply("operator", Some("^"), &before), before);
    }

    #[test]
    fn test_evaluate_parses_permissively() {
        assert_eq!(evaluate("3.", "2", Operator::Multiply), "6");
        assert_eq!(evaluate("abc", "2", Operator::Add), "NaN");
        assert_eq!(evaluate("1e3", "1", Operator::Subtract), "999");
    }

    #[test]
    fn test_evaluate_symbol_falls_back_to_current() {
        assert_eq!(evaluate_symbol("2", "3", "+"), "5");
        assert_eq!(evaluate_symbol("2", "3", "^"), "3");
    }

    #[test]
    fn test_reduce_does_not_touch_input() {
        let before = state("5", Some("2"), Some(Operator::Add));
        let snapshot = before.clone();
        let _ = reduce(&before, &Event::Equal);
        assert_eq!(before, snapshot);
    }
}
