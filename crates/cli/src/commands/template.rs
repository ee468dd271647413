//! `template` command: print a `.env` template.
//!
//! Works without a valid environment; nothing is validated.

use anyhow::{Context, Result};
use std::path::Path;

use medellin_config::render_env_template;

pub fn run(output_file: Option<&Path>) -> Result<()> {
    let template = render_env_template();

    match output_file {
        Some(path) => {
            std::fs::write(path, &template)
                .with_context(|| format!("Failed to write template to {}", path.display()))?;
            tracing::info!(path = %path.display(), "template written");
            eprintln!("Template written to {}", path.display());
        }
        None => print!("{template}"),
    }
    Ok(())
}
