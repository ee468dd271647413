//! The validated configuration record.
//!
//! Responsibilities:
//! - Define the immutable `Config` record and its sections.
//! - Provide a redacted, serializable summary for diagnostics.
//!
//! Does NOT handle:
//! - Reading or validating raw values (see `loader` and `validate`).
//!
//! Invariants:
//! - The validator is the only producer of `Config`; every field it fills is
//!   already coerced and checked.
//! - Secrets use `secrecy::SecretString` and never appear in `Debug` output
//!   or in `ConfigSummary`.

use secrecy::SecretString;
use serde::Serialize;
use std::num::NonZeroU32;
use std::time::Duration;
use url::Url;

use super::mode::{AuthProvider, Environment, LogLevel};

/// Primary data store connection settings.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Connection string (`DATABASE_URL`).
    pub url: Url,
    /// Access token (`DATABASE_AUTH_TOKEN`).
    pub auth_token: SecretString,
    /// Connection pool size (`DATABASE_POOL_SIZE`).
    pub pool_size: NonZeroU32,
}

/// Upstream API client settings.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL (`API_BASE_URL`), absent when the deployment has no upstream API.
    pub base_url: Option<Url>,
    /// Request timeout (`API_TIMEOUT`, milliseconds). Always non-zero.
    pub timeout: Duration,
}

/// Response cache settings.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Time-to-live (`CACHE_TTL`, seconds). Zero disables caching.
    pub ttl: Duration,
}

/// Public application settings.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Public URL (`APP_URL`).
    pub url: Url,
    /// Signing secret (`APP_SECRET`), at least 32 characters.
    pub secret: SecretString,
}

/// Authentication settings.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub provider: AuthProvider,
    pub secret: SecretString,
}

/// Named feature toggles. Every flag defaults to off.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FeatureFlags {
    /// `ENABLE_ANALYTICS`
    pub analytics: bool,
    /// `ENABLE_WHATSAPP`
    pub whatsapp: bool,
}

impl FeatureFlags {
    /// Flags paired with their names, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, bool)> {
        [("analytics", self.analytics), ("whatsapp", self.whatsapp)].into_iter()
    }

    /// Names of the flags that are switched on.
    pub fn enabled(&self) -> Vec<&'static str> {
        self.iter()
            .filter_map(|(name, on)| on.then_some(name))
            .collect()
    }
}

/// The fully validated startup configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub environment: Environment,
    pub database: DatabaseConfig,
    pub api: ApiConfig,
    pub cache: CacheConfig,
    pub app: AppConfig,
    pub log_level: LogLevel,
    pub auth: AuthConfig,
    pub features: FeatureFlags,
}

impl Config {
    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }

    pub fn is_test(&self) -> bool {
        self.environment == Environment::Test
    }

    /// A redacted view of this configuration that is safe to print or log.
    pub fn summary(&self) -> ConfigSummary {
        ConfigSummary {
            environment: self.environment,
            database_url: redact_url(&self.database.url),
            database_pool_size: self.database.pool_size.get(),
            api_base_url: self.api.base_url.as_ref().map(redact_url),
            api_timeout_ms: duration_millis(self.api.timeout),
            cache_ttl_secs: self.cache.ttl.as_secs(),
            app_url: redact_url(&self.app.url),
            log_level: self.log_level,
            auth_provider: self.auth.provider,
            features: self.features,
        }
    }
}

/// Printable configuration with every secret removed.
///
/// Userinfo passwords embedded in URLs are masked as well.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigSummary {
    pub environment: Environment,
    pub database_url: String,
    pub database_pool_size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_base_url: Option<String>,
    pub api_timeout_ms: u64,
    pub cache_ttl_secs: u64,
    pub app_url: String,
    pub log_level: LogLevel,
    pub auth_provider: AuthProvider,
    pub features: FeatureFlags,
}

impl ConfigSummary {
    /// Label/value rows in declaration order, for table output.
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("NODE_ENV", self.environment.to_string()),
            ("DATABASE_URL", self.database_url.clone()),
            ("DATABASE_AUTH_TOKEN", REDACTED.to_string()),
            ("DATABASE_POOL_SIZE", self.database_pool_size.to_string()),
            (
                "API_BASE_URL",
                self.api_base_url.clone().unwrap_or_else(|| "-".to_string()),
            ),
            ("API_TIMEOUT", self.api_timeout_ms.to_string()),
            ("CACHE_TTL", self.cache_ttl_secs.to_string()),
            ("APP_URL", self.app_url.clone()),
            ("APP_SECRET", REDACTED.to_string()),
            ("LOG_LEVEL", self.log_level.to_string()),
            ("AUTH_PROVIDER", self.auth_provider.to_string()),
            ("AUTH_SECRET", REDACTED.to_string()),
            ("ENABLE_ANALYTICS", self.features.analytics.to_string()),
            ("ENABLE_WHATSAPP", self.features.whatsapp.to_string()),
        ]
    }
}

/// Placeholder shown wherever a secret would be.
pub const REDACTED: &str = "********";

fn redact_url(url: &Url) -> String {
    if url.password().is_none() {
        return url.to_string();
    }
    let mut masked = url.clone();
    // Only fails for cannot-be-a-base URLs, which never carry a password.
    let _ = masked.set_password(Some(REDACTED));
    masked.to_string()
}

fn duration_millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
