//! # Error Types
//!
//! Decoding errors for calc-core.
//!
//! ## Where Errors Can Happen
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Surface                                   │
//! │                                                                         │
//! │  ("operator", "^") ──► Event::parse ──► CoreError::UnknownOperator      │
//! │                             │                                           │
//! │                             ▼ (Ok)                                      │
//! │                      engine::reduce  ──► never fails                    │
//! │                                                                         │
//! │  Arithmetic problems (bad numerals, division by zero) are NOT errors:   │
//! │  they become NaN / Infinity and flow through the state as text.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the offending input in the message
//! 3. Only decoding returns errors; the reducer turns them into no-ops

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Errors raised while turning raw input into a typed [`Event`](crate::Event).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The event kind is not one the engine understands.
    #[error("Unknown event kind: {0}")]
    UnknownEvent(String),

    /// The event kind needs a payload (digit or operator) but none was given.
    #[error("Event '{kind}' requires a payload")]
    MissingPayload { kind: String },

    /// The `number` payload is not a single digit 0-9.
    #[error("Invalid digit: {0}")]
    InvalidDigit(String),

    /// The `operator` payload is not one of `+ - * / %`.
    #[error("Unknown operator: {0}")]
    UnknownOperator(String),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
