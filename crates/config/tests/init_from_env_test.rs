//! One-call startup from the process environment.
//!
//! Kept in its own test binary: the configuration can be installed only once
//! per process.

use medellin_config::{ConfigError, Environment, get, init_from_env};

#[test]
fn test_init_from_env_rejects_then_installs() {
    let required = [
        ("DATABASE_URL", Some("https://db.example/primary")),
        ("DATABASE_AUTH_TOKEN", Some("tok123")),
        ("APP_URL", Some("https://example.com")),
        ("APP_SECRET", Some("0123456789abcdef0123456789abcdef")),
        ("AUTH_SECRET", Some("authsecret")),
    ];
    let mut vars: Vec<(&str, Option<&str>)> = vec![
        ("DOTENV_DISABLED", Some("1")),
        ("NODE_ENV", Some("test")),
        ("DATABASE_POOL_SIZE", None),
        ("API_BASE_URL", None),
        ("API_TIMEOUT", None),
        ("CACHE_TTL", None),
        ("LOG_LEVEL", None),
        ("AUTH_PROVIDER", None),
        ("ENABLE_ANALYTICS", None),
        ("ENABLE_WHATSAPP", None),
        ("AUTH_SECRET", None),
    ];

    // AUTH_SECRET missing: nothing may be installed.
    temp_env::with_vars(
        required[..4].iter().copied().chain(vars.iter().copied()).collect::<Vec<_>>(),
        || {
            let err = init_from_env().unwrap_err();
            let invalid = err.as_invalid().expect("validation error");
            assert_eq!(invalid.field_names(), vec!["AUTH_SECRET"]);
            assert!(get().is_none());
        },
    );

    vars.pop();
    temp_env::with_vars(
        required.iter().copied().chain(vars.iter().copied()).collect::<Vec<_>>(),
        || {
            let config = init_from_env().expect("environment is valid");
            assert_eq!(config.environment, Environment::Test);
            assert!(matches!(init_from_env(), Err(ConfigError::AlreadyInitialized)));
        },
    );

    assert!(get().is_some_and(|c| c.is_test()));
}
