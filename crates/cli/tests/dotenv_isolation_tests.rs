//! Regression tests for hermetic test isolation around dotenv loading.
//!
//! Responsibilities:
//! - Prove that setting `DOTENV_DISABLED=1` prevents the CLI from loading `.env`.
//! - Prove that when not disabled, the CLI loads `.env` from the working directory.
//! - Prove that a malformed `.env` fails without echoing its contents.
//!
//! Invariants / assumptions:
//! - The CLI loads dotenv before clap parsing.
//! - `ConfigLoader::load_dotenv()` is gated by `DOTENV_DISABLED` ("true" or "1" disables).

mod common;

use common::medellin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const VALID_DOTENV: &str = "\
DATABASE_URL=https://db.example/primary
DATABASE_AUTH_TOKEN=tok123
APP_URL=https://example.com
APP_SECRET=0123456789abcdef0123456789abcdef
AUTH_SECRET=authsecret
";

fn dir_with_dotenv(contents: &str) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join(".env"), contents).unwrap();
    temp_dir
}

#[test]
fn test_dotenv_disabled_ignores_env_file() {
    let temp_dir = dir_with_dotenv(VALID_DOTENV);

    let mut cmd = medellin_cmd();
    cmd.current_dir(temp_dir.path());
    cmd.env("DOTENV_DISABLED", "1");
    cmd.arg("check")
        .assert()
        .code(5)
        .stderr(predicate::str::contains("DATABASE_URL: required but not set"));
}

#[test]
fn test_dotenv_enabled_loads_env_file() {
    let temp_dir = dir_with_dotenv(VALID_DOTENV);

    let mut cmd = medellin_cmd();
    cmd.current_dir(temp_dir.path());

    // Explicitly enable dotenv for the spawned process, even if the parent runner has it disabled.
    cmd.env_remove("DOTENV_DISABLED");

    cmd.arg("check")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("environment: development"));
}

#[test]
fn test_process_env_wins_over_dotenv() {
    let temp_dir = dir_with_dotenv(&format!("{VALID_DOTENV}NODE_ENV=test\n"));

    let mut cmd = medellin_cmd();
    cmd.current_dir(temp_dir.path());
    cmd.env_remove("DOTENV_DISABLED");
    cmd.env("NODE_ENV", "production");

    cmd.arg("check")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("environment: production"));
}

#[test]
fn test_malformed_dotenv_is_general_error_without_leaking() {
    let temp_dir = dir_with_dotenv("APP_SECRET=super-secret-value\nthis is not valid\n");

    let mut cmd = medellin_cmd();
    cmd.current_dir(temp_dir.path());
    cmd.env_remove("DOTENV_DISABLED");

    cmd.arg("template")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to load environment"))
        .stderr(predicate::str::contains("super-secret-value").not());
}
