//! # Keypad
//!
//! The button grid and the event each button dispatches.
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │   [ C ] [+/-] [ % ] < / >               │   [ ] secondary
//! │   ( 7 ) ( 8 ) ( 9 ) < X >               │   < > accent (operators)
//! │   ( 4 ) ( 5 ) ( 6 ) < - >               │   { } primary (equal)
//! │   ( 1 ) ( 2 ) ( 3 ) < + >               │   ( ) default
//! │   ( 0 ) (00 ) ( . ) { = }               │
//! └─────────────────────────────────────────┘
//! ```
//!
//! The `%` key is the percentage transform. The remainder operator has no
//! key; it is only reachable through `dispatch_event`.

use calc_core::{Digit, Event, Operator};
use serde::Serialize;

/// Visual weight of a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyTheme {
    Default,
    Secondary,
    Accent,
    Primary,
}

impl KeyTheme {
    const fn brackets(&self) -> (char, char) {
        match self {
            KeyTheme::Default => ('(', ')'),
            KeyTheme::Secondary => ('[', ']'),
            KeyTheme::Accent => ('<', '>'),
            KeyTheme::Primary => ('{', '}'),
        }
    }
}

/// A single keypad button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Key {
    pub label: &'static str,
    pub theme: KeyTheme,
    pub event: Event,
}

const fn key(label: &'static str, theme: KeyTheme, event: Event) -> Key {
    Key {
        label,
        theme,
        event,
    }
}

const fn digit(value: usize) -> Key {
    const LABELS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];
    key(LABELS[value], KeyTheme::Default, Event::Number(Digit::ALL[value]))
}

const fn operator(label: &'static str, op: Operator) -> Key {
    key(label, KeyTheme::Accent, Event::Operator(op))
}

/// The keypad, top row first.
pub const LAYOUT: [[Key; 4]; 5] = [
    [
        key("C", KeyTheme::Secondary, Event::Clear),
        key("+/-", KeyTheme::Secondary, Event::PosNeg),
        key("%", KeyTheme::Secondary, Event::Percentage),
        operator("/", Operator::Divide),
    ],
    [digit(7), digit(8), digit(9), operator("X", Operator::Multiply)],
    [digit(4), digit(5), digit(6), operator("-", Operator::Subtract)],
    [digit(1), digit(2), digit(3), operator("+", Operator::Add)],
    [
        digit(0),
        key("00", KeyTheme::Default, Event::DoubleZero),
        key(".", KeyTheme::Default, Event::Decimal),
        key("=", KeyTheme::Primary, Event::Equal),
    ],
];

/// Alternative spellings accepted when typing labels.
const ALIASES: [(&str, Event); 3] = [
    ("x", Event::Operator(Operator::Multiply)),
    ("*", Event::Operator(Operator::Multiply)),
    ("c", Event::Clear),
];

/// Width of one rendered key, brackets included.
const KEY_WIDTH: usize = 5;

/// Returns the event for a typed key label.
pub fn event_for_label(label: &str) -> Option<Event> {
    let label = label.trim();
    LAYOUT
        .iter()
        .flatten()
        .find(|key| key.label == label)
        .map(|key| key.event)
        .or_else(|| {
            ALIASES
                .iter()
                .find(|(alias, _)| *alias == label)
                .map(|(_, event)| *event)
        })
}

/// Width in characters of a rendered keypad row.
pub const fn row_width() -> usize {
    LAYOUT[0].len() * (KEY_WIDTH + 1) - 1
}

/// Renders the keypad as text, one line per row.
pub fn render() -> String {
    LAYOUT
        .iter()
        .map(|row| {
            row.iter()
                .map(|key| {
                    let (open, close) = key.theme.brackets();
                    format!("{}{:^3}{}", open, key.label, close)
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
