//! Environment configuration validation.
//!
//! Responsibilities:
//! - Turn a loosely-typed `EnvSource` into a fully validated `Config`.
//! - Report every invalid field together in one `ConfigurationError`.
//!
//! Does NOT handle:
//! - `.env` file loading or builder overrides (see `loader`).
//! - Process-wide caching (see `global`).
//!
//! Invariants:
//! - Validation never short-circuits; each field runs its own pipeline.
//! - A `Config` is returned only when no field failed.
//! - The operation is pure: the same source always yields the same outcome.

mod coerce;
mod error;
mod source;

pub use error::{Constraint, ConfigurationError, FieldError, FieldErrorReason};
pub use source::{EnvSource, NotUnicode, ProcessEnv, RawValue, env_var_or_none};

use std::time::Duration;

use crate::fields;
use crate::types::{
    ApiConfig, AppConfig, AuthConfig, AuthProvider, CacheConfig, Config, DatabaseConfig,
    Environment, FeatureFlags, LogLevel,
};
use coerce::FieldValidator;

/// Validate `source` against the field table.
///
/// Fields are checked in declaration order and failures are reported in the
/// same order.
pub fn validate<S: EnvSource + ?Sized>(source: &S) -> Result<Config, ConfigurationError> {
    let mut v = FieldValidator::new(source);

    let environment = v.choice::<Environment>(&fields::NODE_ENV);
    let database_url = v.url(&fields::DATABASE_URL);
    let database_auth_token = v.secret(&fields::DATABASE_AUTH_TOKEN);
    let database_pool_size = v.positive_u32(&fields::DATABASE_POOL_SIZE);
    let api_base_url = v.optional_url(&fields::API_BASE_URL);
    let api_timeout_ms = v.positive(&fields::API_TIMEOUT);
    let cache_ttl_secs = v.non_negative(&fields::CACHE_TTL);
    let app_url = v.url(&fields::APP_URL);
    let app_secret = v.secret(&fields::APP_SECRET);
    let log_level = v.choice::<LogLevel>(&fields::LOG_LEVEL);
    let auth_provider = v.choice::<AuthProvider>(&fields::AUTH_PROVIDER);
    let auth_secret = v.secret(&fields::AUTH_SECRET);
    let enable_analytics = v.flag(&fields::ENABLE_ANALYTICS);
    let enable_whatsapp = v.flag(&fields::ENABLE_WHATSAPP);

    let errors = v.into_errors();

    match (
        environment,
        database_url,
        database_auth_token,
        database_pool_size,
        api_base_url,
        api_timeout_ms,
        cache_ttl_secs,
        app_url,
        app_secret,
        log_level,
        auth_provider,
        auth_secret,
        enable_analytics,
        enable_whatsapp,
    ) {
        (
            Some(environment),
            Some(database_url),
            Some(database_auth_token),
            Some(database_pool_size),
            Some(api_base_url),
            Some(api_timeout_ms),
            Some(cache_ttl_secs),
            Some(app_url),
            Some(app_secret),
            Some(log_level),
            Some(auth_provider),
            Some(auth_secret),
            Some(enable_analytics),
            Some(enable_whatsapp),
        ) if errors.is_empty() => Ok(Config {
            environment,
            database: DatabaseConfig {
                url: database_url,
                auth_token: database_auth_token,
                pool_size: database_pool_size,
            },
            api: ApiConfig {
                base_url: api_base_url,
                timeout: Duration::from_millis(api_timeout_ms),
            },
            cache: CacheConfig {
                ttl: Duration::from_secs(cache_ttl_secs),
            },
            app: AppConfig {
                url: app_url,
                secret: app_secret,
            },
            log_level,
            auth: AuthConfig {
                provider: auth_provider,
                secret: auth_secret,
            },
            features: FeatureFlags {
                analytics: enable_analytics,
                whatsapp: enable_whatsapp,
            },
        }),
        _ => Err(ConfigurationError::new(errors)),
    }
}
