//! Command dispatch.
//!
//! Responsibilities:
//! - Route parsed CLI commands to their handlers.

use anyhow::Result;

use crate::args::{Cli, Commands};
use crate::commands;
use crate::logging::LogHandle;

/// Run the command selected on the command line.
pub fn run_command(cli: Cli, logs: &LogHandle) -> Result<()> {
    match cli.command {
        Commands::Check => commands::check::run(logs),
        Commands::Show { output } => commands::show::run(&output, logs),
        Commands::Template { output_file } => commands::template::run(output_file.as_deref()),
    }
}
