//! # calc-core: Pure Calculator Engine
//!
//! This crate is the **heart** of the calculator. It contains the state
//! machine as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Calculator Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Display Layer (terminal)                     │   │
//! │  │        Keypad ──► press_key ──► Display line re-render          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Event                                  │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ calc-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  engine   │  │  numeral  │  │   error   │  │   │
//! │  │   │  State    │  │  reduce   │  │  parse    │  │ CoreError │  │   │
//! │  │   │  Event    │  │  apply    │  │  format   │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBAL STATE • PURE FUNCTIONS                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (CalculatorState, Event, Operator, Digit)
//! - [`engine`] - The reducer and operand evaluation
//! - [`numeral`] - Text ⇄ `f64` conversion rules
//! - [`error`] - Event decoding errors
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same state + same event = same next state
//! 2. **Immutable Snapshots**: every event returns a new state; the caller owns the slot
//! 3. **Text Values**: operands stay text so "3." survives until arithmetic
//! 4. **No Failures**: bad numerals become NaN, unknown events are no-ops
//!
//! ## Example Usage
//!
//! ```rust
//! use calc_core::{engine, CalculatorState, Event, Operator};
//!
//! let state = CalculatorState::initial();
//! let state = engine::reduce(&state, &Event::parse("number", Some("6")).unwrap());
//! let state = engine::reduce(&state, &Event::Operator(Operator::Divide));
//! let state = engine::reduce(&state, &Event::parse("number", Some("4")).unwrap());
//! let state = engine::reduce(&state, &Event::Equal);
//!
//! assert_eq!(state.current_value, "1.5");
//! assert!(!state.is_pending());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod engine;
pub mod error;
pub mod numeral;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use engine::{apply, evaluate, reduce};
pub use error::{CoreError, CoreResult};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Value shown on a fresh or cleared calculator.
///
/// Digit entry replaces this exact text instead of appending to it.
pub const INITIAL_VALUE: &str = "0";
