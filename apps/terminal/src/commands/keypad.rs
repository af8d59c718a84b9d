//! # Keypad Commands
//!
//! Commands that feed events into the session.
//!
//! ## Two Ways In
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  press_key("X")                     dispatch_event("operator", "%")     │
//! │       │                                   │                             │
//! │       ▼                                   ▼                             │
//! │  keypad label lookup               Event::parse(kind, payload)          │
//! │   unknown → UNKNOWN_KEY error       invalid → logged, state unchanged   │
//! │       │                                   │                             │
//! │       └──────────────┬────────────────────┘                             │
//! │                      ▼                                                  │
//! │            SessionState::dispatch                                       │
//! │                      ▼                                                  │
//! │            DisplayResponse { state, display }                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use calc_core::{CalculatorState, Event};
use serde::Serialize;
use tracing::{debug, warn};

use crate::display::format_display;
use crate::error::ApiError;
use crate::keypad;
use crate::state::{ConfigState, SessionState};

/// State snapshot plus the formatted display line.
///
/// ```json
/// {
///   "state": { "currentValue": "1234", "previousValue": null, "operator": null },
///   "display": "1,234"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayResponse {
    pub state: CalculatorState,
    pub display: String,
}

impl DisplayResponse {
    /// Builds a response for `state` using the configured display options.
    pub fn new(state: CalculatorState, config: &ConfigState) -> Self {
        let display = format_display(&state.current_value, &config.display_options());
        DisplayResponse { state, display }
    }
}

/// Presses a keypad key by its label.
///
/// ## Errors
/// `UNKNOWN_KEY` when the label is not on the keypad; the session is left
/// untouched.
pub fn press_key(
    session: &SessionState,
    config: &ConfigState,
    label: &str,
) -> Result<DisplayResponse, ApiError> {
    debug!(label = %label, "press_key command");

    let event = keypad::event_for_label(label).ok_or_else(|| ApiError::unknown_key(label))?;
    let state = session.dispatch(&event);

    Ok(DisplayResponse::new(state, config))
}

/// Dispatches a raw `(kind, payload)` event.
///
/// Events that do not decode are no-ops, so this never fails.
pub fn dispatch_event(
    session: &SessionState,
    config: &ConfigState,
    kind: &str,
    payload: Option<&str>,
) -> DisplayResponse {
    debug!(kind = %kind, payload = ?payload, "dispatch_event command");

    let state = match Event::parse(kind, payload) {
        Ok(event) => session.dispatch(&event),
        Err(err) => {
            warn!(error = %err, "Ignoring event");
            session.snapshot()
        }
    };

    DisplayResponse::new(state, config)
}

/// Gets the current state and display line.
pub fn get_display(session: &SessionState, config: &ConfigState) -> DisplayResponse {
    debug!("get_display command");
    DisplayResponse::new(session.snapshot(), config)
}

/// Resets the session to its initial state.
pub fn clear(session: &SessionState, config: &ConfigState) -> DisplayResponse {
    debug!("clear command");
    DisplayResponse::new(session.reset(), config)
}
