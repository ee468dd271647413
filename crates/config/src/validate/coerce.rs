//! Per-field coercion and constraint checks.
//!
//! Responsibilities:
//! - Resolve each field's raw value (supplied, defaulted, or missing).
//! - Coerce raw strings to typed values and check constraints.
//! - Record every failure instead of stopping at the first one.
//!
//! Invariants:
//! - Each method returns `None` exactly when it has recorded one `FieldError`.
//! - Blank values of defaulted or optional fields count as unset; blank values
//!   of required fields are a constraint violation, not a missing value.
//! - A value that is set but not valid UTF-8 is rejected, even when a default exists.
//! - Secret values are never copied into an error.

use secrecy::SecretString;
use std::num::NonZeroU32;
use url::Url;

use super::error::{Constraint, FieldError, FieldErrorReason};
use super::source::EnvSource;
use crate::fields::{FieldKind, FieldSpec};
use crate::types::Choice;

/// Runs field pipelines against one source and accumulates failures.
pub(crate) struct FieldValidator<'a, S: EnvSource + ?Sized> {
    source: &'a S,
    errors: Vec<FieldError>,
}

impl<'a, S: EnvSource + ?Sized> FieldValidator<'a, S> {
    pub(crate) fn new(source: &'a S) -> Self {
        Self {
            source,
            errors: Vec::new(),
        }
    }

    /// Failures recorded so far, in the order fields were checked.
    pub(crate) fn into_errors(self) -> Vec<FieldError> {
        self.errors
    }

    fn reject(&mut self, spec: &FieldSpec, reason: FieldErrorReason) {
        tracing::debug!(field = spec.name, %reason, "field rejected");
        self.errors.push(FieldError {
            field: spec.name,
            reason,
        });
    }

    fn violate(&mut self, spec: &FieldSpec, constraint: Constraint) {
        self.reject(spec, FieldErrorReason::ConstraintViolated(constraint));
    }

    fn coercion_failed(&mut self, spec: &FieldSpec, expected: impl Into<String>, raw: &str) {
        let value = (!spec.is_secret()).then(|| raw.to_string());
        self.reject(
            spec,
            FieldErrorReason::TypeCoercionFailed {
                expected: expected.into(),
                value,
            },
        );
    }

    /// Resolve the raw value for `spec`.
    ///
    /// `Ok(None)` means an optional field is unset; `Err(())` means a failure
    /// was recorded.
    fn resolve(&mut self, spec: &FieldSpec) -> Result<Option<String>, ()> {
        let Ok(raw) = self.source.get_raw(spec.name) else {
            self.reject(
                spec,
                FieldErrorReason::TypeCoercionFailed {
                    expected: "valid UTF-8".to_string(),
                    value: None,
                },
            );
            return Err(());
        };
        let supplied = raw.as_deref().map(str::trim);

        match (supplied, spec.default) {
            (Some(value), _) if !value.is_empty() => Ok(Some(value.to_string())),
            (_, Some(default)) => {
                tracing::debug!(field = spec.name, default, "applying default");
                Ok(Some(default.to_string()))
            }
            (_, None) if spec.optional => Ok(None),
            (Some(_), None) => {
                self.violate(spec, Constraint::Empty);
                Err(())
            }
            (None, None) => {
                self.reject(spec, FieldErrorReason::MissingRequired);
                Err(())
            }
        }
    }

    fn required(&mut self, spec: &FieldSpec) -> Option<String> {
        match self.resolve(spec) {
            Ok(Some(value)) => Some(value),
            Ok(None) => {
                self.reject(spec, FieldErrorReason::MissingRequired);
                None
            }
            Err(()) => None,
        }
    }

    /// An absolute URL.
    pub(crate) fn url(&mut self, spec: &FieldSpec) -> Option<Url> {
        let raw = self.required(spec)?;
        self.parse_url(spec, &raw)
    }

    /// An absolute URL that may be left unset. `Some(None)` means unset.
    pub(crate) fn optional_url(&mut self, spec: &FieldSpec) -> Option<Option<Url>> {
        match self.resolve(spec) {
            Ok(Some(raw)) => self.parse_url(spec, &raw).map(Some),
            Ok(None) => Some(None),
            Err(()) => None,
        }
    }

    fn parse_url(&mut self, spec: &FieldSpec, raw: &str) -> Option<Url> {
        match Url::parse(raw) {
            Ok(url) => Some(url),
            Err(e) => {
                self.violate(
                    spec,
                    Constraint::MalformedUrl {
                        detail: e.to_string(),
                    },
                );
                None
            }
        }
    }

    /// A secret string honoring the field's minimum length.
    pub(crate) fn secret(&mut self, spec: &FieldSpec) -> Option<SecretString> {
        let raw = self.required(spec)?;
        let min = match spec.kind {
            FieldKind::Secret { min_len } => min_len,
            _ => 1,
        };
        let actual = raw.chars().count();
        if actual < min {
            self.violate(spec, Constraint::BelowMinLength { min, actual });
            return None;
        }
        Some(SecretString::new(raw.into()))
    }

    fn integer(&mut self, spec: &FieldSpec) -> Option<i64> {
        let raw = self.required(spec)?;
        match raw.parse::<i64>() {
            Ok(value) => Some(value),
            Err(_) => {
                self.coercion_failed(spec, "an integer", &raw);
                None
            }
        }
    }

    /// An integer greater than zero, within the field's upper bound if it has one.
    pub(crate) fn positive(&mut self, spec: &FieldSpec) -> Option<u64> {
        let value = self.integer(spec)?;
        let max = match spec.kind {
            FieldKind::PositiveInt { max } => max,
            _ => None,
        };
        match u64::try_from(value) {
            Ok(v) if v > 0 && max.is_none_or(|max| v <= max) => Some(v),
            Ok(v) if v > 0 => {
                self.violate(
                    spec,
                    Constraint::OutOfRange {
                        value,
                        max: max.unwrap_or(u64::MAX),
                    },
                );
                None
            }
            _ => {
                self.violate(spec, Constraint::NotPositive { value });
                None
            }
        }
    }

    /// An integer greater than zero that fits in a `u32`.
    pub(crate) fn positive_u32(&mut self, spec: &FieldSpec) -> Option<NonZeroU32> {
        let value = self.positive(spec)?;
        match u32::try_from(value).ok().and_then(NonZeroU32::new) {
            Some(v) => Some(v),
            None => {
                self.violate(
                    spec,
                    Constraint::OutOfRange {
                        value: i64::try_from(value).unwrap_or(i64::MAX),
                        max: u64::from(u32::MAX),
                    },
                );
                None
            }
        }
    }

    /// An integer zero or greater.
    pub(crate) fn non_negative(&mut self, spec: &FieldSpec) -> Option<u64> {
        let value = self.integer(spec)?;
        match u64::try_from(value) {
            Ok(v) => Some(v),
            Err(_) => {
                self.violate(spec, Constraint::Negative { value });
                None
            }
        }
    }

    /// One of `T::VARIANTS`, matched exactly.
    pub(crate) fn choice<T: Choice>(&mut self, spec: &FieldSpec) -> Option<T> {
        let raw = self.required(spec)?;
        match T::from_exact(&raw) {
            Some(value) => Some(value),
            None => {
                self.coercion_failed(spec, format!("one of {}", T::VARIANTS.join(", ")), &raw);
                None
            }
        }
    }

    /// Exactly `true` or `false`.
    pub(crate) fn flag(&mut self, spec: &FieldSpec) -> Option<bool> {
        let raw = self.required(spec)?;
        match raw.as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => {
                self.coercion_failed(spec, "true or false", &raw);
                None
            }
        }
    }
}
