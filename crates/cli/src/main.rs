//! Medellin CLI - validate and inspect the AI Medellin environment configuration.
//!
//! Responsibilities:
//! - Parse command-line arguments.
//! - Validate the process environment through `medellin-config`.
//! - Report configuration problems with a structured exit code.
//!
//! Does NOT handle:
//! - Validation rules themselves (see `crates/config`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing so `.env` values are visible
//!   to clap and to the validator alike.
//! - Secrets never reach stdout or stderr.

mod args;
mod commands;
mod dispatch;
mod error;
mod formatters;
mod logging;

use args::Cli;
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use medellin_config::ConfigLoader;

fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    let logs = logging::init();

    let exit_code = match run_command(cli, &logs) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}
