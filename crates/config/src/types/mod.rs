//! Configuration type definitions for AI Medellin.
//!
//! Responsibilities:
//! - Define the validated `Config` record and its sections.
//! - Define the enumerated values (`Environment`, `LogLevel`, `AuthProvider`).
//!
//! Does NOT handle:
//! - Parsing raw environment values (see `validate` and `loader`).
//!
//! Invariants:
//! - All secret types use `secrecy::SecretString` to prevent accidental logging.

mod config;
mod mode;

pub use config::{
    ApiConfig, AppConfig, AuthConfig, CacheConfig, Config, ConfigSummary, DatabaseConfig,
    FeatureFlags, REDACTED,
};
pub use mode::{AuthProvider, Choice, Environment, LogLevel};
