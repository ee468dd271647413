//! Output formatters for CLI commands.
//!
//! Provides JSON and table renderings of the redacted configuration.

use anyhow::Result;
use medellin_config::ConfigSummary;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Table,
}

impl OutputFormat {
    /// Parse from string.
    pub fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "table" => Ok(OutputFormat::Table),
            _ => anyhow::bail!("Invalid output format: {}. Valid options: json, table", s),
        }
    }
}

/// Render a configuration summary.
pub fn format_summary(summary: &ConfigSummary, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(summary)?),
        OutputFormat::Table => Ok(format_table(&summary.rows())),
    }
}

fn format_table(rows: &[(&str, String)]) -> String {
    const HEADER: (&str, &str) = ("VARIABLE", "VALUE");

    let width = rows
        .iter()
        .map(|(name, _)| name.len())
        .chain(std::iter::once(HEADER.0.len()))
        .max()
        .unwrap_or(0);

    let mut output = format!("{:<width$}  {}\n", HEADER.0, HEADER.1);
    output.push_str(&format!("{:-<width$}  {:-<5}\n", "", ""));
    for (name, value) in rows {
        output.push_str(&format!("{name:<width$}  {value}\n"));
    }
    // Trailing newline is added by println!.
    output.pop();
    output
}
