//! `show` command: print the validated configuration with secrets redacted.

use anyhow::Result;

use crate::formatters::{OutputFormat, format_summary};
use crate::logging::LogHandle;

pub fn run(output: &str, logs: &LogHandle) -> Result<()> {
    // Reject a bad format before touching the environment.
    let format = OutputFormat::from_str(output)?;
    let config = super::load_config(logs)?;
    println!("{}", format_summary(&config.summary(), format)?);
    Ok(())
}
