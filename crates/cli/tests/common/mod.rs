//! Shared test utilities for medellin-cli integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Provide a known-good environment for tests that need validation to pass.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper will be hermetic by default.
//! - No recognized variable leaks in from the host environment.

#![allow(dead_code)]

use assert_cmd::Command;

/// Every variable the validator reads.
pub const RECOGNIZED_VARS: [&str; 14] = [
    "NODE_ENV",
    "DATABASE_URL",
    "DATABASE_AUTH_TOKEN",
    "DATABASE_POOL_SIZE",
    "API_BASE_URL",
    "API_TIMEOUT",
    "CACHE_TTL",
    "APP_URL",
    "APP_SECRET",
    "LOG_LEVEL",
    "AUTH_PROVIDER",
    "AUTH_SECRET",
    "ENABLE_ANALYTICS",
    "ENABLE_WHATSAPP",
];

pub const APP_SECRET: &str = "a-very-long-application-secret-value-0001";
pub const DATABASE_AUTH_TOKEN: &str = "tok123-database-token";
pub const AUTH_SECRET: &str = "authsecret-value";

/// The smallest environment that validates.
pub const VALID_ENV: [(&str, &str); 6] = [
    ("NODE_ENV", "production"),
    ("DATABASE_URL", "https://db.example/primary"),
    ("DATABASE_AUTH_TOKEN", DATABASE_AUTH_TOKEN),
    ("APP_URL", "https://example.com"),
    ("APP_SECRET", APP_SECRET),
    ("AUTH_SECRET", AUTH_SECRET),
];

/// Returns a hermetic `medellin-cli` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - Every recognized variable and `RUST_LOG` are cleared.
pub fn medellin_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("medellin-cli");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");

    cmd.env_remove("RUST_LOG");
    for var in RECOGNIZED_VARS {
        cmd.env_remove(var);
    }

    cmd
}

/// Returns a hermetic command whose environment validates.
pub fn valid_cmd() -> Command {
    let mut cmd = medellin_cmd();
    cmd.envs(VALID_ENV);
    cmd
}
