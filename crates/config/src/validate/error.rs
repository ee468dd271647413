//! Aggregated validation errors.
//!
//! Responsibilities:
//! - Describe why a single field failed (`FieldError`, `FieldErrorReason`, `Constraint`).
//! - Collect every failing field of one validation pass (`ConfigurationError`).
//!
//! Invariants:
//! - A `ConfigurationError` always carries at least one field entry.
//! - Entries keep the field table's declaration order.
//! - Raw values of secret fields are never stored, so they cannot be printed.

use std::fmt;
use thiserror::Error;

/// A constraint a coerced value failed to meet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Constraint {
    /// The value is not an absolute URL.
    MalformedUrl { detail: String },
    /// The value is shorter than the required minimum (in characters).
    BelowMinLength { min: usize, actual: usize },
    /// The value must not be empty.
    Empty,
    /// The integer must be greater than zero.
    NotPositive { value: i64 },
    /// The integer must be zero or greater.
    Negative { value: i64 },
    /// The integer does not fit the field's range.
    OutOfRange { value: i64, max: u64 },
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedUrl { detail } => write!(f, "malformed URL ({detail})"),
            Self::BelowMinLength { min, actual } => {
                write!(f, "must be at least {min} characters (got {actual})")
            }
            Self::Empty => f.write_str("must not be empty"),
            Self::NotPositive { value } => write!(f, "must be a positive integer (got {value})"),
            Self::Negative { value } => {
                write!(f, "must be a non-negative integer (got {value})")
            }
            Self::OutOfRange { value, max } => write!(f, "must be at most {max} (got {value})"),
        }
    }
}

/// Why a field was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldErrorReason {
    /// No value was supplied and the field has no default.
    MissingRequired,
    /// The raw string could not be converted to the field's type.
    ///
    /// `value` is `None` for secret fields.
    TypeCoercionFailed {
        expected: String,
        value: Option<String>,
    },
    /// The value was converted but broke a constraint.
    ConstraintViolated(Constraint),
}

impl fmt::Display for FieldErrorReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingRequired => f.write_str("required but not set"),
            Self::TypeCoercionFailed {
                expected,
                value: Some(value),
            } => write!(f, "expected {expected}, got {value:?}"),
            Self::TypeCoercionFailed {
                expected,
                value: None,
            } => write!(f, "expected {expected}"),
            Self::ConstraintViolated(constraint) => fmt::Display::fmt(constraint, f),
        }
    }
}

/// One rejected field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Environment variable name, e.g. `APP_SECRET`.
    pub field: &'static str,
    pub reason: FieldErrorReason,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

/// Every field that failed during one validation pass.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub struct ConfigurationError {
    fields: Vec<FieldError>,
}

impl ConfigurationError {
    pub(crate) fn new(fields: Vec<FieldError>) -> Self {
        debug_assert!(!fields.is_empty(), "configuration error without fields");
        Self { fields }
    }

    /// The failing fields, in declaration order.
    pub fn fields(&self) -> &[FieldError] {
        &self.fields
    }

    /// The entry for `field`, if it failed.
    pub fn field(&self, field: &str) -> Option<&FieldError> {
        self.fields.iter().find(|e| e.field == field)
    }

    /// Names of the failing fields, in declaration order.
    pub fn field_names(&self) -> Vec<&'static str> {
        self.fields.iter().map(|e| e.field).collect()
    }
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.fields.len();
        write!(
            f,
            "invalid environment configuration ({count} {}):",
            if count == 1 { "field" } else { "fields" }
        )?;
        for entry in &self.fields {
            write!(f, "\n  - {entry}")?;
        }
        Ok(())
    }
}
