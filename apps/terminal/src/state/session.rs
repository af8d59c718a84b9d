//! # Session State
//!
//! Holds the calculator state for the life of the process.
//!
//! ## Event Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Key press ──► dispatch(event) ──► lock ──► reduce(&old, event) ──►     │
//! │                                              slot = new ──► unlock      │
//! │                                                                         │
//! │  The reducer never sees the mutex; it gets a snapshot and returns one. │
//! │  Holding the lock across the reduction keeps events strictly ordered.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use calc_core::{engine, CalculatorState, Event};

/// The single mutable slot holding the latest calculator state.
#[derive(Debug, Default)]
pub struct SessionState {
    state: Arc<Mutex<CalculatorState>>,
}

impl SessionState {
    /// Creates a session in the initial state.
    pub fn new() -> Self {
        SessionState {
            state: Arc::new(Mutex::new(CalculatorState::initial())),
        }
    }

    /// Executes a function with read access to the current state.
    pub fn with_state<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&CalculatorState) -> R,
    {
        f(&self.lock())
    }

    /// Returns a copy of the current state.
    pub fn snapshot(&self) -> CalculatorState {
        self.with_state(CalculatorState::clone)
    }

    /// Replaces the state with `f(current)` and returns the new state.
    pub fn replace_with<F>(&self, f: F) -> CalculatorState
    where
        F: FnOnce(&CalculatorState) -> CalculatorState,
    {
        let mut slot = self.lock();
        let next = f(&slot);
        *slot = next.clone();
        next
    }

    /// Reduces `event` into the session and returns the new state.
    pub fn dispatch(&self, event: &Event) -> CalculatorState {
        self.replace_with(|state| engine::reduce(state, event))
    }

    /// Resets the session to the initial state.
    pub fn reset(&self) -> CalculatorState {
        self.replace_with(|_| CalculatorState::initial())
    }

    // A panic inside `replace_with` can only happen before the slot is
    // written, so the stored value is still a whole state.
    fn lock(&self) -> MutexGuard<'_, CalculatorState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
