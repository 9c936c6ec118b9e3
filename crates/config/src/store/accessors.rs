//! Typed accessors.
//!
//! `get_int` and `get_bool` never fail: absent and malformed values both fall
//! back. Use `try_get_int` to tell the two apart.

use super::ConfigStore;
use crate::constants::{BOOL_FALLBACK, BOOL_TRUE_DIGIT, BOOL_TRUE_WORD, INT_FALLBACK};
use crate::error::ConfigError;
use crate::namespace::Namespace;

impl<N: Namespace> ConfigStore<N> {
    /// Value for `key`, or an empty string when unset.
    pub fn get(&self, key: &str) -> String {
        self.namespace
            .get(&self.resolve_key(key))
            .unwrap_or_default()
    }

    /// Value for `key`, or `default` when unset or empty.
    pub fn get_with_default(&self, key: &str, default: &str) -> String {
        let value = self.get(key);
        if value.is_empty() {
            default.to_string()
        } else {
            value
        }
    }

    /// `true` for `"true"` in any case or exactly `"1"`, `false` otherwise.
    pub fn get_bool(&self, key: &str) -> bool {
        let value = self.get_with_default(key, BOOL_FALLBACK);
        value.eq_ignore_ascii_case(BOOL_TRUE_WORD) || value == BOOL_TRUE_DIGIT
    }

    /// Base-10 integer for `key`, or `0` when unset or malformed.
    pub fn get_int(&self, key: &str) -> i64 {
        self.get(key).parse().unwrap_or(INT_FALLBACK)
    }

    /// Base-10 integer for `key`, or `default` when unset or malformed.
    pub fn get_int_with_default(&self, key: &str, default: i64) -> i64 {
        self.get_with_default(key, &default.to_string())
            .parse()
            .unwrap_or(default)
    }

    /// Base-10 integer for `key`.
    ///
    /// Returns `Ok(None)` when the key is unset or empty, and
    /// `ConfigError::InvalidInt` when a value is present but does not parse.
    pub fn try_get_int(&self, key: &str) -> Result<Option<i64>, ConfigError> {
        let value = self.get(key);
        if value.is_empty() {
            return Ok(None);
        }
        value
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidInt {
                key: self.resolve_key(key),
            })
    }
}
