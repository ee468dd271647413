//! Declarative table of recognized environment variables.
//!
//! Responsibilities:
//! - Describe each variable once: name, kind, default, and description.
//! - Render a `.env` template from the table.
//!
//! Does NOT handle:
//! - Coercion or validation (see `validate`); the validator reads names and
//!   defaults from these entries so both stay in sync.
//!
//! Invariants:
//! - `FIELDS` is in declaration order; validation errors follow the same order.
//! - Every default is a raw string that passes its own field's validation.

use std::fmt::Write as _;

use crate::constants::{self, MIN_APP_SECRET_LEN};
use crate::types::{AuthProvider, Choice, Environment, LogLevel};

/// The shape of values a field accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// An absolute URL.
    Url,
    /// A secret string of at least `min_len` characters.
    Secret { min_len: usize },
    /// An integer greater than zero, and at most `max` when bounded.
    PositiveInt { max: Option<u64> },
    /// An integer zero or greater.
    NonNegativeInt,
    /// One of a fixed set of exact, case-sensitive spellings.
    Choice(&'static [&'static str]),
    /// Exactly `true` or `false`.
    Flag,
}

/// One recognized environment variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    /// Raw value substituted when the variable is unset.
    pub default: Option<&'static str>,
    /// Whether the field may stay unset with no default.
    pub optional: bool,
    pub description: &'static str,
}

impl FieldSpec {
    /// True when the variable must be supplied.
    pub const fn is_required(&self) -> bool {
        self.default.is_none() && !self.optional
    }

    /// True when the value must never be echoed back.
    pub const fn is_secret(&self) -> bool {
        matches!(self.kind, FieldKind::Secret { .. })
    }
}

const fn required(name: &'static str, kind: FieldKind, description: &'static str) -> FieldSpec {
    FieldSpec {
        name,
        kind,
        default: None,
        optional: false,
        description,
    }
}

const fn defaulted(
    name: &'static str,
    kind: FieldKind,
    default: &'static str,
    description: &'static str,
) -> FieldSpec {
    FieldSpec {
        name,
        kind,
        default: Some(default),
        optional: false,
        description,
    }
}

// Integer defaults are spelled out as strings so they can be substituted
// before coercion; the tests below keep them in sync with `constants`.

pub const NODE_ENV: FieldSpec = defaulted(
    constants::NODE_ENV,
    FieldKind::Choice(Environment::VARIANTS),
    "development",
    "Deployment mode",
);

pub const DATABASE_URL: FieldSpec = required(
    constants::DATABASE_URL,
    FieldKind::Url,
    "Primary data store connection URL",
);

pub const DATABASE_AUTH_TOKEN: FieldSpec = required(
    constants::DATABASE_AUTH_TOKEN,
    FieldKind::Secret { min_len: 1 },
    "Primary data store access token",
);

pub const DATABASE_POOL_SIZE: FieldSpec = defaulted(
    constants::DATABASE_POOL_SIZE,
    FieldKind::PositiveInt {
        max: Some(u32::MAX as u64),
    },
    "10",
    "Connection pool size",
);

pub const API_BASE_URL: FieldSpec = FieldSpec {
    name: constants::API_BASE_URL,
    kind: FieldKind::Url,
    default: None,
    optional: true,
    description: "Upstream API base URL",
};

pub const API_TIMEOUT: FieldSpec = defaulted(
    constants::API_TIMEOUT,
    FieldKind::PositiveInt { max: None },
    "30000",
    "Upstream API timeout in milliseconds",
);

pub const CACHE_TTL: FieldSpec = defaulted(
    constants::CACHE_TTL,
    FieldKind::NonNegativeInt,
    "300",
    "Cache time-to-live in seconds",
);

pub const APP_URL: FieldSpec = required(
    constants::APP_URL,
    FieldKind::Url,
    "Public application URL",
);

pub const APP_SECRET: FieldSpec = required(
    constants::APP_SECRET,
    FieldKind::Secret {
        min_len: MIN_APP_SECRET_LEN,
    },
    "Application signing secret",
);

pub const LOG_LEVEL: FieldSpec = defaulted(
    constants::LOG_LEVEL,
    FieldKind::Choice(LogLevel::VARIANTS),
    "info",
    "Log verbosity",
);

pub const AUTH_PROVIDER: FieldSpec = defaulted(
    constants::AUTH_PROVIDER,
    FieldKind::Choice(AuthProvider::VARIANTS),
    "supabase",
    "Authentication provider",
);

pub const AUTH_SECRET: FieldSpec = required(
    constants::AUTH_SECRET,
    FieldKind::Secret { min_len: 1 },
    "Authentication provider secret",
);

pub const ENABLE_ANALYTICS: FieldSpec = defaulted(
    constants::ENABLE_ANALYTICS,
    FieldKind::Flag,
    "false",
    "Enable the analytics integration",
);

pub const ENABLE_WHATSAPP: FieldSpec = defaulted(
    constants::ENABLE_WHATSAPP,
    FieldKind::Flag,
    "false",
    "Enable the WhatsApp integration",
);

/// Every recognized variable, in declaration order.
pub static FIELDS: [FieldSpec; 14] = [
    NODE_ENV,
    DATABASE_URL,
    DATABASE_AUTH_TOKEN,
    DATABASE_POOL_SIZE,
    API_BASE_URL,
    API_TIMEOUT,
    CACHE_TTL,
    APP_URL,
    APP_SECRET,
    LOG_LEVEL,
    AUTH_PROVIDER,
    AUTH_SECRET,
    ENABLE_ANALYTICS,
    ENABLE_WHATSAPP,
];

/// Look up a field by variable name.
pub fn field(name: &str) -> Option<&'static FieldSpec> {
    FIELDS.iter().find(|f| f.name == name)
}

/// Render a `.env` template covering every recognized variable.
///
/// Required variables are left blank; defaulted ones are commented out with
/// their default value.
pub fn render_env_template() -> String {
    let mut out = String::from("# AI Medellin environment configuration\n");
    for spec in &FIELDS {
        let _ = writeln!(out);
        let _ = writeln!(out, "# {} ({})", spec.description, describe_kind(spec));
        match (spec.default, spec.is_required()) {
            (Some(default), _) => {
                let _ = writeln!(out, "# {}={}", spec.name, default);
            }
            (None, true) => {
                let _ = writeln!(out, "{}=", spec.name);
            }
            (None, false) => {
                let _ = writeln!(out, "# {}=", spec.name);
            }
        }
    }
    out
}

fn describe_kind(spec: &FieldSpec) -> String {
    let shape = match spec.kind {
        FieldKind::Url => "URL".to_string(),
        FieldKind::Secret { min_len: 1 } => "secret".to_string(),
        FieldKind::Secret { min_len } => format!("secret, min {min_len} chars"),
        FieldKind::PositiveInt { max: None } => "integer > 0".to_string(),
        FieldKind::PositiveInt { max: Some(max) } => format!("integer 1..={max}"),
        FieldKind::NonNegativeInt => "integer >= 0".to_string(),
        FieldKind::Choice(values) => values.join(" | "),
        FieldKind::Flag => "true | false".to_string(),
    };
    if spec.is_required() {
        format!("{shape}, required")
    } else {
        shape
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DEFAULT_API_TIMEOUT_MS, DEFAULT_CACHE_TTL_SECS, DEFAULT_POOL_SIZE};

    #[test]
    fn test_integer_defaults_match_constants() {
        assert_eq!(DATABASE_POOL_SIZE.default, Some(&*DEFAULT_POOL_SIZE.to_string()));
        assert_eq!(API_TIMEOUT.default, Some(&*DEFAULT_API_TIMEOUT_MS.to_string()));
        assert_eq!(CACHE_TTL.default, Some(&*DEFAULT_CACHE_TTL_SECS.to_string()));
    }

    #[test]
    fn test_choice_defaults_are_members() {
        for spec in &FIELDS {
            if let (FieldKind::Choice(values), Some(default)) = (spec.kind, spec.default) {
                assert!(values.contains(&default), "{} default not allowed", spec.name);
            }
        }
    }

    #[test]
    fn test_required_fields() {
        let required: Vec<_> = FIELDS
            .iter()
            .filter(|f| f.is_required())
            .map(|f| f.name)
            .collect();
        assert_eq!(
            required,
            vec![
                "DATABASE_URL",
                "DATABASE_AUTH_TOKEN",
                "APP_URL",
                "APP_SECRET",
                "AUTH_SECRET"
            ]
        );
        assert!(!API_BASE_URL.is_required());
    }

    #[test]
    fn test_field_lookup() {
        assert_eq!(field("CACHE_TTL"), Some(&CACHE_TTL));
        assert!(field("cache_ttl").is_none());
    }

    #[test]
    fn test_template_lists_every_field() {
        let template = render_env_template();
        for spec in &FIELDS {
            assert!(template.contains(spec.name), "{} missing", spec.name);
        }
        assert!(template.contains("\nAPP_SECRET=\n"));
        assert!(template.contains("\n# DATABASE_POOL_SIZE=10\n"));
        assert!(template.contains("\n# API_BASE_URL=\n"));
        assert!(template.contains("secret, min 32 chars, required"));
    }

    #[test]
    fn test_template_states_integer_bounds() {
        let template = render_env_template();
        assert!(template.contains("Connection pool size (integer 1..=4294967295)"));
        assert!(template.contains("timeout in milliseconds (integer > 0)"));
        assert!(template.contains("Cache time-to-live in seconds (integer >= 0)"));
    }
}
