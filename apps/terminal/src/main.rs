//! # Calculator Terminal Entry Point
//!
//! ## Startup Sequence
//! 1. Parse command-line flags
//! 2. Hand over to `calc_terminal_lib::run`, which sets up logging,
//!    configuration and the session, then runs the requested mode

use std::process::ExitCode;

use calc_terminal_lib::Cli;
use clap::Parser;

fn main() -> ExitCode {
    // The actual setup is in lib.rs for better testability
    calc_terminal_lib::run(Cli::parse())
}
