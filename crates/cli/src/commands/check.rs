//! `check` command: validate the environment.

use anyhow::Result;

use crate::logging::LogHandle;

pub fn run(logs: &LogHandle) -> Result<()> {
    let config = super::load_config(logs)?;

    let enabled = config.features.enabled();
    let features = if enabled.is_empty() {
        "none".to_string()
    } else {
        enabled.join(", ")
    };

    println!(
        "Configuration valid (environment: {}, log level: {}, auth: {}, features: {})",
        config.environment, config.log_level, config.auth.provider, features
    );
    Ok(())
}
