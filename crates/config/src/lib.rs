//! Startup configuration for AI Medellin.
//!
//! This crate turns the process environment into one immutable, validated
//! [`Config`], or into a single [`ConfigurationError`] that names every
//! invalid variable.

pub mod constants;
pub mod fields;
mod global;
mod loader;
pub mod types;
mod validate;

pub use fields::{FIELDS, FieldKind, FieldSpec, render_env_template};
pub use global::{get, init, init_from_env};
pub use loader::{ConfigError, ConfigLoader};
pub use types::{
    ApiConfig, AppConfig, AuthConfig, AuthProvider, CacheConfig, Choice, Config, ConfigSummary,
    DatabaseConfig, Environment, FeatureFlags, LogLevel, REDACTED,
};
pub use validate::{
    ConfigurationError, Constraint, EnvSource, FieldError, FieldErrorReason, NotUnicode,
    ProcessEnv, RawValue, env_var_or_none, validate,
};
