//! Raw input mappings for the validator.
//!
//! Responsibilities:
//! - Abstract "name -> optional string" lookups behind `EnvSource`.
//! - Provide the empty/whitespace filtering used by `env_var_or_none`.
//!
//! Invariants:
//! - `get_raw` returns values untouched; the validator decides what blank means.
//! - A value that is set but not valid UTF-8 is `Err(NotUnicode)`, never unset.
//! - `get` treats empty or whitespace-only values as unset and trims the rest.

use std::collections::{BTreeMap, HashMap};
use std::env::VarError;

/// The variable is set, but its value is not valid UTF-8.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotUnicode;

/// Raw lookup result: `Ok(None)` when unset.
pub type RawValue = Result<Option<String>, NotUnicode>;

/// A mapping from variable name to raw string value.
pub trait EnvSource {
    /// The raw value for `key`, exactly as stored.
    fn get_raw(&self, key: &str) -> RawValue;

    /// The value for `key`, or `None` if unset, empty, whitespace-only, or
    /// not valid UTF-8. Present values are trimmed.
    fn get(&self, key: &str) -> Option<String> {
        self.get_raw(key).ok().flatten().and_then(non_blank)
    }
}

/// Reads from the process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get_raw(&self, key: &str) -> RawValue {
        match std::env::var(key) {
            Ok(value) => Ok(Some(value)),
            Err(VarError::NotPresent) => Ok(None),
            Err(VarError::NotUnicode(_)) => Err(NotUnicode),
        }
    }
}

impl<S: std::hash::BuildHasher> EnvSource for HashMap<String, String, S> {
    fn get_raw(&self, key: &str) -> RawValue {
        Ok(HashMap::get(self, key).cloned())
    }
}

impl EnvSource for BTreeMap<String, String> {
    fn get_raw(&self, key: &str) -> RawValue {
        Ok(BTreeMap::get(self, key).cloned())
    }
}

impl EnvSource for [(&str, &str)] {
    fn get_raw(&self, key: &str) -> RawValue {
        Ok(self
            .iter()
            .rev()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| (*v).to_string()))
    }
}

impl EnvSource for Vec<(&str, &str)> {
    fn get_raw(&self, key: &str) -> RawValue {
        self.as_slice().get_raw(key)
    }
}

impl<const N: usize> EnvSource for [(&str, &str); N] {
    fn get_raw(&self, key: &str) -> RawValue {
        self.as_slice().get_raw(key)
    }
}

impl<T: EnvSource + ?Sized> EnvSource for &T {
    fn get_raw(&self, key: &str) -> RawValue {
        (**self).get_raw(key)
    }
}

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    ProcessEnv.get(key)
}

fn non_blank(s: String) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else if trimmed.len() == s.len() {
        // No trimming needed, return original to avoid allocation
        Some(s)
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_blank_values_are_unset() {
        let source = [("EMPTY", ""), ("SPACES", "   "), ("SET", " value ")];
        assert_eq!(source.get("EMPTY"), None);
        assert_eq!(source.get("SPACES"), None);
        assert_eq!(source.get("MISSING"), None);
        assert_eq!(source.get("SET"), Some("value".to_string()));
        assert_eq!(source.get_raw("SET"), Ok(Some(" value ".to_string())));
    }

    #[test]
    fn test_later_pairs_override_earlier_ones() {
        let source = [("KEY", "first"), ("KEY", "second")];
        assert_eq!(source.get("KEY"), Some("second".to_string()));
    }

    #[test]
    fn test_maps_are_sources() {
        let mut hash = HashMap::new();
        hash.insert("KEY".to_string(), "hash".to_string());
        let mut btree = BTreeMap::new();
        btree.insert("KEY".to_string(), "btree".to_string());

        assert_eq!(EnvSource::get(&hash, "KEY"), Some("hash".to_string()));
        assert_eq!(EnvSource::get(&btree, "KEY"), Some("btree".to_string()));
    }

    #[test]
    #[serial]
    fn test_env_var_or_none_filters_empty_and_whitespace_strings() {
        let key1 = "_MEDELLIN_TEST_UNSET_VAR";
        assert!(env_var_or_none(key1).is_none(), "Unset env var should return None");

        temp_env::with_vars([(key1, Some(""))], || {
            assert!(env_var_or_none(key1).is_none(), "Empty string env var should return None");
        });

        temp_env::with_vars([(key1, Some("   "))], || {
            assert!(
                env_var_or_none(key1).is_none(),
                "Whitespace-only env var should return None"
            );
        });

        let key2 = "_MEDELLIN_TEST_SET_VAR";
        temp_env::with_vars([(key2, Some(" test-value "))], || {
            assert_eq!(
                env_var_or_none(key2),
                Some("test-value".to_string()),
                "Non-empty env var should return Some(trimmed value)"
            );
        });
    }

    #[cfg(unix)]
    #[test]
    #[serial]
    fn test_process_env_reports_non_utf8_values() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let key = "_MEDELLIN_TEST_NON_UTF8_VAR";
        temp_env::with_var(key, Some(OsStr::from_bytes(b"deb\xffug")), || {
            assert_eq!(ProcessEnv.get_raw(key), Err(NotUnicode));
            assert!(env_var_or_none(key).is_none());
        });
        assert_eq!(ProcessEnv.get_raw(key), Ok(None));
    }
}
