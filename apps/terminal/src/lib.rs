//! # Calculator Terminal Library
//!
//! Core library for the calculator terminal application.
//! This is the main entry point that configures and runs the session.
//!
//! ## Module Organization
//! ```text
//! calc_terminal_lib/
//! ├── lib.rs          ◄─── You are here (CLI flags, logging & run loop)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── session.rs  ◄─── The single calculator state slot
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── keypad.rs   ◄─── Key press / raw event commands
//! │   └── config.rs   ◄─── Configuration retrieval
//! ├── keypad.rs       ◄─── Button grid and label → event mapping
//! ├── display.rs      ◄─── Display-line number formatting
//! ├── screen.rs       ◄─── Screen layout
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## Modes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  One-shot:     calc-terminal --keys "3 + 4 ="     → prints "7"          │
//! │  Interactive:  calc-terminal                      → reads labels from   │
//! │                                                     stdin line by line  │
//! │  Either mode:  --json prints { state, display } instead of text         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod display;
pub mod error;
pub mod keypad;
pub mod screen;
pub mod state;

use std::io::BufRead;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use commands::keypad::{get_display, press_key, DisplayResponse};
use error::ApiError;
use state::{ConfigState, SessionState};

/// Exit code when a one-shot run hits an invalid key.
const EXIT_INVALID_INPUT: u8 = 2;

/// Command-line flags.
#[derive(Parser, Debug)]
#[command(name = "calc-terminal")]
#[command(about = "Single-operator calculator for the terminal", long_about = None)]
pub struct Cli {
    /// Keys to press, separated by spaces (e.g. "3 + 4 ="); reads stdin if omitted
    #[arg(short, long)]
    pub keys: Option<String>,

    /// Print state and display as JSON
    #[arg(short, long)]
    pub json: bool,

    /// Do not draw the keypad in interactive mode
    #[arg(long)]
    pub no_keypad: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Runs the application.
///
/// ## Startup Sequence
/// 1. Initialize tracing (logging)
/// 2. Load configuration (environment, then flags)
/// 3. Create the session slot
/// 4. Run one-shot or interactive mode
pub fn run(cli: Cli) -> ExitCode {
    init_tracing(cli.verbose);

    let mut config = ConfigState::from_env();
    if cli.no_keypad {
        config.show_keypad = false;
    }
    debug!(?config, "Configuration loaded");

    let session = SessionState::new();

    let result = match cli.keys.as_deref() {
        Some(keys) => run_once(&session, &config, keys, cli.json),
        None => run_interactive(&session, &config, cli.json),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, cli.json);
            ExitCode::from(EXIT_INVALID_INPUT)
        }
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `--verbose` - Debug for this crate only
/// - Default: WARN, INFO for this crate
///
/// Logs go to stderr so stdout carries only calculator output.
fn init_tracing(verbose: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Filter directives used when `RUST_LOG` is not set.
fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "warn,calc_terminal_lib=debug"
    } else {
        "warn,calc_terminal_lib=info"
    }
}

/// Presses every label in `keys` and prints the final display.
///
/// Stops at the first unknown label.
fn run_once(
    session: &SessionState,
    config: &ConfigState,
    keys: &str,
    json: bool,
) -> Result<(), ApiError> {
    let mut response = get_display(session, config);
    for label in keys.split_whitespace() {
        response = press_key(session, config, label)?;
    }

    print_response(&response, config, json, false)
}

/// Reads key labels from stdin until EOF or `quit`.
///
/// Unknown labels are reported and skipped; the rest of the line still runs.
fn run_interactive(
    session: &SessionState,
    config: &ConfigState,
    json: bool,
) -> Result<(), ApiError> {
    info!("Interactive session started");
    print_response(&get_display(session, config), config, json, true)?;

    for line in std::io::stdin().lock().lines() {
        let line = line.map_err(|e| ApiError::internal(format!("Failed to read input: {}", e)))?;
        let line = line.trim();

        if matches!(line, "quit" | "exit") {
            break;
        }
        if line.is_empty() {
            continue;
        }

        let mut response = get_display(session, config);
        for label in line.split_whitespace() {
            match press_key(session, config, label) {
                Ok(next) => response = next,
                Err(err) => {
                    warn!(label = %label, "Skipping unknown key");
                    eprintln!("{}", err.message);
                }
            }
        }

        print_response(&response, config, json, true)?;
    }

    info!("Interactive session ended");
    Ok(())
}

fn print_response(
    response: &DisplayResponse,
    config: &ConfigState,
    json: bool,
    full_screen: bool,
) -> Result<(), ApiError> {
    if json {
        println!("{}", serde_json::to_string(response)?);
    } else if full_screen {
        println!("{}", screen::render(&response.display, config));
    } else {
        println!("{}", response.display);
    }
    Ok(())
}

fn report_error(err: &ApiError, json: bool) {
    if json {
        match serde_json::to_string(err) {
            Ok(body) => println!("{}", body),
            Err(_) => eprintln!("Error: {}", err.message),
        }
    } else {
        eprintln!("Error: {}", err.message);
    }
}
