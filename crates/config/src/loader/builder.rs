//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` that gathers raw values from
//!   `.env`, the process environment, an explicit source, and overrides.
//! - Run the validator and log the outcome.
//!
//! Does NOT handle:
//! - Coercion or constraint checks (delegated to `validate`).
//! - Process-wide caching (see `global`).
//!
//! Invariants / Assumptions:
//! - Only variables named in the field table are read from any source or
//!   accepted as overrides.
//! - `with_var` overrides take precedence over every source, regardless of call order.
//! - A source value that is not valid UTF-8 is carried through to validation.
//! - Among sources, the one applied last wins.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use std::collections::BTreeMap;

use super::error::ConfigError;
use crate::constants::DOTENV_DISABLED;
use crate::fields::{self, FIELDS};
use crate::types::Config;
use crate::validate::{EnvSource, NotUnicode, ProcessEnv, RawValue, validate};

/// Configuration loader that builds config from environment variables and overrides.
#[derive(Debug, Default, Clone)]
pub struct ConfigLoader {
    values: BTreeMap<&'static str, Result<String, NotUnicode>>,
    overrides: BTreeMap<&'static str, String>,
}

impl ConfigLoader {
    /// Create a new configuration loader with no values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var(DOTENV_DISABLED).ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` environment variable is set to "true" or "1",
    /// the .env file will not be loaded (useful for testing).
    ///
    /// Variables already present in the process environment are not
    /// overwritten. Call [`ConfigLoader::from_env`] afterwards to pick the
    /// loaded values up.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The `.env` file exists but has invalid syntax (`ConfigError::DotenvParse`)
    /// - The `.env` file exists but cannot be read due to I/O errors (`ConfigError::DotenvIo`)
    ///
    /// Missing `.env` files are silently ignored (returns `Ok(self)`).
    ///
    /// SAFETY: Error messages never include raw .env line contents to prevent secret leakage.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            tracing::debug!("dotenv loading disabled");
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(path) => {
                tracing::debug!(path = %path.display(), "loaded .env file");
                Ok(self)
            }
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Read recognized variables from the process environment.
    pub fn from_env(self) -> Self {
        self.with_source(&ProcessEnv)
    }

    /// Read recognized variables from an explicit source.
    ///
    /// Values found here replace values from earlier sources; variables the
    /// source does not define keep their earlier values.
    pub fn with_source<S: EnvSource + ?Sized>(mut self, source: &S) -> Self {
        for spec in &FIELDS {
            match source.get_raw(spec.name) {
                Ok(Some(raw)) => {
                    self.values.insert(spec.name, Ok(raw));
                }
                Ok(None) => {}
                Err(NotUnicode) => {
                    tracing::debug!(field = spec.name, "value is not valid UTF-8");
                    self.values.insert(spec.name, Err(NotUnicode));
                }
            }
        }
        self
    }

    /// Override one variable. Overrides win over every source.
    ///
    /// Keys outside the field table are ignored with a warning.
    pub fn with_var(mut self, key: &str, value: impl Into<String>) -> Self {
        match fields::field(key) {
            Some(spec) => {
                self.overrides.insert(spec.name, value.into());
            }
            None => tracing::warn!(key, "ignoring override for unrecognized variable"),
        }
        self
    }

    /// The raw value that `build()` will see for `key`, before trimming.
    ///
    /// `None` when unset or not valid UTF-8.
    pub fn raw_value(&self, key: &str) -> Option<&str> {
        match self.overrides.get(key) {
            Some(value) => Some(value.as_str()),
            None => self.values.get(key)?.as_deref().ok(),
        }
    }

    /// Build the final configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` carrying every failing field.
    pub fn build(self) -> Result<Config, ConfigError> {
        let mut merged = self.values;
        merged.extend(self.overrides.into_iter().map(|(k, v)| (k, Ok(v))));

        match validate(&Collected(merged)) {
            Ok(config) => {
                tracing::info!(
                    environment = %config.environment,
                    log_level = %config.log_level,
                    features = ?config.features.enabled(),
                    "configuration loaded"
                );
                Ok(config)
            }
            Err(err) => {
                tracing::warn!(fields = ?err.field_names(), "configuration rejected");
                Err(err.into())
            }
        }
    }
}

/// Values gathered by the loader, handed to the validator as one source.
struct Collected(BTreeMap<&'static str, Result<String, NotUnicode>>);

impl EnvSource for Collected {
    fn get_raw(&self, key: &str) -> RawValue {
        self.0.get(key).cloned().transpose()
    }
}
