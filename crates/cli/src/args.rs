//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not read configuration variables; the validator owns those.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "medellin-cli")]
#[command(about = "Validate the AI Medellin environment configuration", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  medellin-cli check\n  medellin-cli show --output json\n  medellin-cli template --output-file .env.example\n"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate the environment and report every invalid variable
    Check,

    /// Print the validated configuration with secrets redacted
    Show {
        /// Output format (json, table)
        #[arg(short, long, default_value = "table")]
        output: String,
    },

    /// Print a .env template listing every recognized variable
    Template {
        /// Write the template to a file instead of stdout
        #[arg(long, value_name = "FILE")]
        output_file: Option<PathBuf>,
    },
}
