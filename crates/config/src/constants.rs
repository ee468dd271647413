//! Centralized constants for the AI Medellin configuration.
//!
//! Variable names and default values live here so the field table, the
//! validator, and the CLI template never drift apart.

// =============================================================================
// Environment variable names
// =============================================================================

pub const NODE_ENV: &str = "NODE_ENV";
pub const DATABASE_URL: &str = "DATABASE_URL";
pub const DATABASE_AUTH_TOKEN: &str = "DATABASE_AUTH_TOKEN";
pub const DATABASE_POOL_SIZE: &str = "DATABASE_POOL_SIZE";
pub const API_BASE_URL: &str = "API_BASE_URL";
pub const API_TIMEOUT: &str = "API_TIMEOUT";
pub const CACHE_TTL: &str = "CACHE_TTL";
pub const APP_URL: &str = "APP_URL";
pub const APP_SECRET: &str = "APP_SECRET";
pub const LOG_LEVEL: &str = "LOG_LEVEL";
pub const AUTH_PROVIDER: &str = "AUTH_PROVIDER";
pub const AUTH_SECRET: &str = "AUTH_SECRET";
pub const ENABLE_ANALYTICS: &str = "ENABLE_ANALYTICS";
pub const ENABLE_WHATSAPP: &str = "ENABLE_WHATSAPP";

/// Set to `1` or `true` to skip `.env` loading.
pub const DOTENV_DISABLED: &str = "DOTENV_DISABLED";

// =============================================================================
// Defaults
// =============================================================================

/// Default primary-store connection pool size.
pub const DEFAULT_POOL_SIZE: u32 = 10;

/// Default API request timeout in milliseconds.
pub const DEFAULT_API_TIMEOUT_MS: u64 = 30_000;

/// Default cache time-to-live in seconds (5 minutes).
pub const DEFAULT_CACHE_TTL_SECS: u64 = 300;

// =============================================================================
// Constraints
// =============================================================================

/// Minimum length of `APP_SECRET`, in characters.
pub const MIN_APP_SECRET_LEN: usize = 32;
