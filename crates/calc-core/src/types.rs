//! # Domain Types
//!
//! Core types shared by the engine and the display layer.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────────┐   ┌─────────────────┐   ┌─────────────────┐   │
//! │  │  CalculatorState    │   │    Operator     │   │     Event       │   │
//! │  │  ─────────────────  │   │  ─────────────  │   │  ─────────────  │   │
//! │  │  current_value      │   │  Add       "+"  │   │  Number(Digit)  │   │
//! │  │  previous_value     │   │  Subtract  "-"  │   │  Operator(op)   │   │
//! │  │  operator           │   │  Multiply  "*"  │   │  Clear, PosNeg  │   │
//! │  └─────────────────────┘   │  Divide    "/"  │   │  Percentage     │   │
//! │                            │  Remainder "%"  │   │  Equal, Decimal │   │
//! │  ┌─────────────────────┐   └─────────────────┘   │  DoubleZero     │   │
//! │  │  Digit (0..=9)      │                         └─────────────────┘   │
//! │  └─────────────────────┘                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Format
//! The state is what the display layer renders, so it is serialized with
//! camelCase keys and the operator as its symbol:
//! ```json
//! { "currentValue": "12", "previousValue": "3", "operator": "+" }
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::INITIAL_VALUE;

// =============================================================================
// Operator
// =============================================================================

/// A binary operator that can be pending between two operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Operator {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "*")]
    Multiply,
    #[serde(rename = "/")]
    Divide,
    /// Floating remainder; the sign follows the dividend.
    #[serde(rename = "%")]
    Remainder,
}

impl Operator {
    /// All operators, in keypad order.
    pub const ALL: [Operator; 5] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
        Operator::Remainder,
    ];

    /// Returns the symbol used on the wire.
    pub const fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
            Operator::Remainder => "%",
        }
    }

    /// Applies the operator to two numbers.
    pub fn apply(&self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Operator::Add => lhs + rhs,
            Operator::Subtract => lhs - rhs,
            Operator::Multiply => lhs * rhs,
            Operator::Divide => lhs / rhs,
            Operator::Remainder => lhs % rhs,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operator {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        Operator::ALL
            .into_iter()
            .find(|op| op.symbol() == s)
            .ok_or_else(|| CoreError::UnknownOperator(s.to_string()))
    }
}

// =============================================================================
// Digit
// =============================================================================

/// A single decimal digit, 0 through 9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digit(u8);

impl Digit {
    /// All digits, 0 through 9, indexable by value.
    pub const ALL: [Digit; 10] = [
        Digit(0),
        Digit(1),
        Digit(2),
        Digit(3),
        Digit(4),
        Digit(5),
        Digit(6),
        Digit(7),
        Digit(8),
        Digit(9),
    ];

    /// Returns the digit value.
    #[inline]
    pub const fn value(&self) -> u8 {
        self.0
    }

    /// Returns the digit as its ASCII character.
    #[inline]
    pub const fn as_char(&self) -> char {
        (b'0' + self.0) as char
    }
}

impl TryFrom<u8> for Digit {
    type Error = CoreError;

    fn try_from(value: u8) -> CoreResult<Self> {
        if value <= 9 {
            Ok(Digit(value))
        } else {
            Err(CoreError::InvalidDigit(value.to_string()))
        }
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> u8 {
        digit.0
    }
}

impl FromStr for Digit {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        match s.as_bytes() {
            [b @ b'0'..=b'9'] => Ok(Digit(b - b'0')),
            _ => Err(CoreError::InvalidDigit(s.to_string())),
        }
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Calculator State
// =============================================================================

/// The complete state of a calculator session.
///
/// ## Invariants
/// - `current_value` is a partial or complete decimal numeral, or the text of
///   a non-finite result (`NaN`, `Infinity`)
/// - `operator` and `previous_value` are set together while an operation is
///   pending and cleared together by `equal`
/// - Nothing else is needed to predict the next state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorState {
    /// The value being entered or displayed.
    pub current_value: String,

    /// Left operand captured when an operator was pressed.
    pub previous_value: Option<String>,

    /// Operator waiting for its right operand.
    pub operator: Option<Operator>,
}

impl CalculatorState {
    /// Returns the initial state: `"0"`, nothing pending.
    pub fn initial() -> Self {
        CalculatorState {
            current_value: INITIAL_VALUE.to_string(),
            previous_value: None,
            operator: None,
        }
    }

    /// Checks whether a binary operation is waiting for `equal` or chaining.
    #[inline]
    pub fn is_pending(&self) -> bool {
        self.operator.is_some() && self.previous_value.is_some()
    }
}

impl Default for CalculatorState {
    fn default() -> Self {
        CalculatorState::initial()
    }
}

// =============================================================================
// Event
// =============================================================================

/// An input event dispatched by the display layer.
///
/// ## Wire Format
/// ```json
/// { "type": "number", "value": 7 }
/// { "type": "operator", "value": "+" }
/// { "type": "clear" }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum Event {
    /// Digit key.
    Number(Digit),
    /// Binary operator key.
    Operator(Operator),
    /// Reset everything.
    Clear,
    /// Flip the sign of the current value.
    #[serde(rename = "posneg")]
    PosNeg,
    /// Divide the current value by 100.
    Percentage,
    /// Resolve the pending operation.
    Equal,
    /// Append "00".
    DoubleZero,
    /// Append a decimal point.
    Decimal,
}

impl Event {
    /// Decodes an event from its kind and optional payload.
    ///
    /// ## Kinds
    /// `number` (digit payload), `operator` (symbol payload), `clear`,
    /// `posneg`, `percentage`, `equal`, `doubleZero`, `decimal`.
    /// Payloads on kinds that take none are ignored.
    ///
    /// ## Example
    /// ```rust
    /// use calc_core::{Event, Operator};
    ///
    /// assert_eq!(Event::parse("operator", Some("*")), Ok(Event::Operator(Operator::Multiply)));
    /// assert_eq!(Event::parse("equal", Some("=")), Ok(Event::Equal));
    /// assert!(Event::parse("sqrt", None).is_err());
    /// ```
    pub fn parse(kind: &str, payload: Option<&str>) -> CoreResult<Event> {
        let require = || {
            payload.ok_or_else(|| CoreError::MissingPayload {
                kind: kind.to_string(),
            })
        };

        match kind {
            "number" => Ok(Event::Number(require()?.parse()?)),
            "operator" => Ok(Event::Operator(require()?.parse()?)),
            "clear" => Ok(Event::Clear),
            "posneg" => Ok(Event::PosNeg),
            "percentage" => Ok(Event::Percentage),
            "equal" => Ok(Event::Equal),
            "doubleZero" => Ok(Event::DoubleZero),
            "decimal" => Ok(Event::Decimal),
            other => Err(CoreError::UnknownEvent(other.to_string())),
        }
    }

    /// Returns the event kind as used by [`Event::parse`].
    pub const fn kind(&self) -> &'static str {
        match self {
            Event::Number(_) => "number",
            Event::Operator(_) => "operator",
            Event::Clear => "clear",
            Event::PosNeg => "posneg",
            Event::Percentage => "percentage",
            Event::Equal => "equal",
            Event::DoubleZero => "doubleZero",
            Event::Decimal => "decimal",
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
