//! Enumerated configuration values.
//!
//! Responsibilities:
//! - Define the closed value sets for `NODE_ENV`, `LOG_LEVEL`, and `AUTH_PROVIDER`.
//! - Provide exact, case-sensitive parsing from raw environment strings.
//!
//! Invariants:
//! - Parsing never normalizes case: `Production` is not `production`.
//! - `as_str()` returns exactly the spelling accepted by `from_exact()`.

use serde::Serialize;
use std::fmt;
use tracing::level_filters::LevelFilter;

/// A closed set of string values accepted by one environment variable.
pub trait Choice: Sized + Copy + 'static {
    /// Every accepted spelling, in declaration order.
    const VARIANTS: &'static [&'static str];

    /// Parse an exact, case-sensitive match against [`Choice::VARIANTS`].
    fn from_exact(raw: &str) -> Option<Self>;

    /// The canonical spelling of this value.
    fn as_str(&self) -> &'static str;
}

/// Deployment mode of the process (`NODE_ENV`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
    Test,
}

impl Choice for Environment {
    const VARIANTS: &'static [&'static str] = &["development", "production", "test"];

    fn from_exact(raw: &str) -> Option<Self> {
        match raw {
            "development" => Some(Self::Development),
            "production" => Some(Self::Production),
            "test" => Some(Self::Test),
            _ => None,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Test => "test",
        }
    }
}

/// Log verbosity (`LOG_LEVEL`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
}

impl LogLevel {
    /// The matching `tracing` level filter.
    pub fn as_level_filter(&self) -> LevelFilter {
        match self {
            Self::Error => LevelFilter::ERROR,
            Self::Warn => LevelFilter::WARN,
            Self::Info => LevelFilter::INFO,
            Self::Debug => LevelFilter::DEBUG,
        }
    }
}

impl Choice for LogLevel {
    const VARIANTS: &'static [&'static str] = &["error", "warn", "info", "debug"];

    fn from_exact(raw: &str) -> Option<Self> {
        match raw {
            "error" => Some(Self::Error),
            "warn" => Some(Self::Warn),
            "info" => Some(Self::Info),
            "debug" => Some(Self::Debug),
            _ => None,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        }
    }
}

/// Identity provider backing user sign-in (`AUTH_PROVIDER`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthProvider {
    #[default]
    Supabase,
    Auth0,
    Custom,
}

impl Choice for AuthProvider {
    const VARIANTS: &'static [&'static str] = &["supabase", "auth0", "custom"];

    fn from_exact(raw: &str) -> Option<Self> {
        match raw {
            "supabase" => Some(Self::Supabase),
            "auth0" => Some(Self::Auth0),
            "custom" => Some(Self::Custom),
            _ => None,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Supabase => "supabase",
            Self::Auth0 => "auth0",
            Self::Custom => "custom",
        }
    }
}

macro_rules! display_via_as_str {
    ($($ty:ty),+) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )+
    };
}

display_via_as_str!(Environment, LogLevel, AuthProvider);

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_variants_round_trip<T: Choice + PartialEq + fmt::Debug>() {
        for raw in T::VARIANTS {
            let parsed = T::from_exact(raw).unwrap_or_else(|| panic!("{raw} should parse"));
            assert_eq!(parsed.as_str(), *raw);
        }
    }

    #[test]
    fn test_every_variant_parses_to_its_own_spelling() {
        assert_variants_round_trip::<Environment>();
        assert_variants_round_trip::<LogLevel>();
        assert_variants_round_trip::<AuthProvider>();
    }

    #[test]
    fn test_parsing_is_case_sensitive() {
        assert_eq!(Environment::from_exact("Production"), None);
        assert_eq!(LogLevel::from_exact("INFO"), None);
        assert_eq!(AuthProvider::from_exact("Auth0"), None);
    }

    #[test]
    fn test_defaults_match_documented_values() {
        assert_eq!(Environment::default(), Environment::Development);
        assert_eq!(LogLevel::default(), LogLevel::Info);
        assert_eq!(AuthProvider::default(), AuthProvider::Supabase);
    }

    #[test]
    fn test_log_level_maps_to_tracing_filter() {
        assert_eq!(LogLevel::Error.as_level_filter(), LevelFilter::ERROR);
        assert_eq!(LogLevel::Debug.as_level_filter(), LevelFilter::DEBUG);
    }

    #[test]
    fn test_display_uses_canonical_spelling() {
        assert_eq!(Environment::Production.to_string(), "production");
        assert_eq!(AuthProvider::Auth0.to_string(), "auth0");
    }

    #[test]
    fn test_serializes_lowercase() {
        let json = serde_json::to_string(&LogLevel::Warn).unwrap();
        assert_eq!(json, "\"warn\"");
    }
}
