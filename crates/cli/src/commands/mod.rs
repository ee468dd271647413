//! CLI command implementations.

pub mod check;
pub mod show;
pub mod template;

use anyhow::Result;
use medellin_config::{Config, ConfigLoader};

use crate::logging::LogHandle;

/// Validate the process environment and install the result for this process.
///
/// On success the configured `LOG_LEVEL` takes over the log filter.
pub(crate) fn load_config(logs: &LogHandle) -> Result<&'static Config> {
    let config = ConfigLoader::new().from_env().build()?;
    let config = medellin_config::init(config)?;
    logs.apply(config.log_level);
    tracing::debug!(environment = %config.environment, "configuration installed");
    Ok(config)
}
