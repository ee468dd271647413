//! Process-wide configuration.
//!
//! Responsibilities:
//! - Hold the single validated `Config` for the lifetime of the process.
//! - Offer a one-call startup path (`init_from_env`).
//!
//! Invariants:
//! - The configuration is installed at most once and never replaced.
//! - Readers only ever see a fully validated record.

use std::sync::OnceLock;

use crate::loader::{ConfigError, ConfigLoader};
use crate::types::Config;

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Install `config` as the process-wide configuration.
///
/// # Errors
///
/// Returns `ConfigError::AlreadyInitialized` if a configuration is already
/// installed; the existing one is kept.
pub fn init(config: Config) -> Result<&'static Config, ConfigError> {
    CONFIG
        .set(config)
        .map_err(|_| ConfigError::AlreadyInitialized)?;
    CONFIG.get().ok_or(ConfigError::AlreadyInitialized)
}

/// The process-wide configuration, if it has been installed.
pub fn get() -> Option<&'static Config> {
    CONFIG.get()
}

/// Load `.env`, read the process environment, validate, and install the result.
pub fn init_from_env() -> Result<&'static Config, ConfigError> {
    let config = ConfigLoader::new().load_dotenv()?.from_env().build()?;
    init(config)
}
