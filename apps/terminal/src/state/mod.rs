//! # State Module
//!
//! Manages application state for the terminal app.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │          ┌──────────────────────┬──────────────────────┐                │
//! │          ▼                                             ▼                │
//! │  ┌──────────────────────────┐              ┌──────────────────────┐    │
//! │  │   SessionState           │              │   ConfigState        │    │
//! │  │                          │              │                      │    │
//! │  │  Arc<Mutex<              │              │  grouping            │    │
//! │  │    CalculatorState       │              │  fraction digits     │    │
//! │  │  >>                      │              │  keypad / footer     │    │
//! │  └──────────────────────────┘              └──────────────────────┘    │
//! │                                                                         │
//! │  • SessionState: the ONLY mutable slot; replaced whole on every event  │
//! │  • ConfigState: read-only after startup                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod session;

pub use config::ConfigState;
pub use session::SessionState;
