//! # Commands Module
//!
//! All operations the front end can invoke.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (exports)
//! ├── keypad.rs    ◄─── Key presses, raw events, display snapshot
//! └── config.rs    ◄─── Configuration retrieval
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  stdin: "3 + 4 ="                                                       │
//! │         │                                                               │
//! │         ▼  one label at a time                                          │
//! │  press_key(&session, &config, "3")                                      │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  SessionState::dispatch ──► calc_core::engine::reduce                  │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  DisplayResponse { state, display: "3" } ──► stdout (text or JSON)     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each command declares only the state it needs:
//! ```rust,ignore
//! fn get_config(config: &ConfigState)
//! fn press_key(session: &SessionState, config: &ConfigState, label: &str)
//! ```

pub mod config;
pub mod keypad;
