//! Tests for the configuration loader builder.
//!
//! Responsibilities:
//! - Test the documented startup scenarios end to end through `ConfigLoader`.
//! - Test per-field validation and aggregated error reporting.
//! - Test process environment handling and precedence.
//! - Test dotenv loading and the `DOTENV_DISABLED` gate.
//!
//! Invariants:
//! - Tests that touch process-global state use `serial_test` and `env_lock()`.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::sync::Mutex;


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// A 40-character application secret.
pub const LONG_SECRET: &str = "0123456789abcdefghij0123456789abcdefghij";

/// The minimal valid input: every required variable, nothing else.
pub fn minimal_vars() -> Vec<(&'static str, &'static str)> {
    vec![
        ("NODE_ENV", "production"),
        ("DATABASE_URL", "https://db.example/primary"),
        ("DATABASE_AUTH_TOKEN", "tok123"),
        ("APP_URL", "https://example.com"),
        ("APP_SECRET", LONG_SECRET),
        ("AUTH_SECRET", "authsecret"),
    ]
}

/// `minimal_vars()` with `key` replaced (or added) by `value`.
pub fn vars_with(key: &'static str, value: &'static str) -> Vec<(&'static str, &'static str)> {
    let mut vars: Vec<_> = minimal_vars().into_iter().filter(|(k, _)| *k != key).collect();
    vars.push((key, value));
    vars
}

/// `minimal_vars()` without `key`.
pub fn vars_without(key: &str) -> Vec<(&'static str, &'static str)> {
    minimal_vars().into_iter().filter(|(k, _)| *k != key).collect()
}
