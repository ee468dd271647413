//! Configuration loader for `.env` files, environment variables, and overrides.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` that gathers raw values and
//!   hands them to the validator.
//! - Enforce `DOTENV_DISABLED` gate to prevent accidental dotenv loading in tests.
//!
//! Does NOT handle:
//! - Field coercion or constraint checks (see `validate`).
//!
//! Invariants / Assumptions:
//! - Overrides take precedence over environment variables.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.

mod builder;
mod error;

#[cfg(test)]
mod tests;

pub use builder::ConfigLoader;
pub use error::ConfigError;
