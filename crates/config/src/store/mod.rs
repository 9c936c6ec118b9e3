//! The configuration store.
//!
//! Responsibilities:
//! - Own the fixed `StoreOptions` and the namespace the store reads and writes.
//! - Resolve caller keys against the prefix.
//! - Apply overrides.
//!
//! Does NOT handle:
//! - Line classification (see `parser`).
//! - Storage rules for keys and values (see `namespace`).
//!
//! Invariants / Assumptions:
//! - The prefix is fixed at construction. There is no way to change it later.
//! - Lookups and overrides prepend `prefix_` unless the key already starts with
//!   it. Keys read from a file are always prefixed.
//! - Overrides replace existing values unconditionally, in the order given.

mod accessors;
mod loader;

#[cfg(test)]
mod tests;

pub use loader::LoadReport;

use crate::constants::PREFIX_SEPARATOR;
use crate::error::ConfigError;
use crate::namespace::{Namespace, ProcessEnv};
use crate::options::StoreOptions;

/// A key/value pair applied after loading, replacing any existing value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Override {
    pub key: String,
    pub value: String,
}

impl Override {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl<K: Into<String>, V: Into<String>> From<(K, V)> for Override {
    fn from((key, value): (K, V)) -> Self {
        Self::new(key, value)
    }
}

/// Configuration store over a namespace.
///
/// Pass the store (or an `Arc` of it) to whatever needs configuration.
/// It is `Send + Sync` whenever its namespace is.
#[derive(Debug)]
pub struct ConfigStore<N = ProcessEnv> {
    options: StoreOptions,
    namespace: N,
}

impl ConfigStore<ProcessEnv> {
    /// Store over the process environment.
    pub fn new(options: StoreOptions) -> Self {
        Self::with_namespace(options, ProcessEnv)
    }
}

impl Default for ConfigStore<ProcessEnv> {
    fn default() -> Self {
        Self::new(StoreOptions::default())
    }
}

impl<N: Namespace> ConfigStore<N> {
    /// Store over a caller-supplied namespace.
    pub fn with_namespace(options: StoreOptions, namespace: N) -> Self {
        Self { options, namespace }
    }

    pub fn options(&self) -> &StoreOptions {
        &self.options
    }

    pub fn prefix(&self) -> Option<&str> {
        self.options.prefix()
    }

    pub fn namespace(&self) -> &N {
        &self.namespace
    }

    /// The key actually used in the namespace for a caller key.
    ///
    /// `PORT` and `APP_PORT` both resolve to `APP_PORT` under prefix `APP`.
    /// A key counts as prefixed only when it starts with `prefix_`, so `APPLE`
    /// resolves to `APP_APPLE`, unlike a bare `starts_with(prefix)` check.
    pub fn resolve_key(&self, key: &str) -> String {
        match self.prefix() {
            Some(prefix) if !carries_prefix(key, prefix) => prefixed(prefix, key),
            _ => key.to_string(),
        }
    }

    /// Key used for a line read from a file: always prefixed when a prefix
    /// is active, even if the file key already starts with it.
    pub(crate) fn file_key(&self, key: &str) -> String {
        match self.prefix() {
            Some(prefix) => prefixed(prefix, key),
            None => key.to_string(),
        }
    }

    /// Apply overrides in order. Keys and values are trimmed and keys are
    /// resolved against the prefix. Stops at the first rejected write.
    pub fn apply_overrides<I, O>(&self, overrides: I) -> Result<usize, ConfigError>
    where
        I: IntoIterator<Item = O>,
        O: Into<Override>,
    {
        let mut applied = 0;
        for item in overrides {
            let item = item.into();
            let key = self.resolve_key(item.key.trim());
            self.namespace.set(&key, item.value.trim())?;
            tracing::debug!(key = %key, "Applied config override");
            applied += 1;
        }
        Ok(applied)
    }

    /// Set a single key, with the same rules as `apply_overrides`.
    pub fn set(&self, key: &str, value: &str) -> Result<(), ConfigError> {
        self.apply_overrides([Override::new(key, value)]).map(|_| ())
    }
}

fn carries_prefix(key: &str, prefix: &str) -> bool {
    key.strip_prefix(prefix)
        .is_some_and(|rest| rest.starts_with(PREFIX_SEPARATOR))
}

fn prefixed(prefix: &str, key: &str) -> String {
    let mut out = String::with_capacity(prefix.len() + 1 + key.len());
    out.push_str(prefix);
    out.push(PREFIX_SEPARATOR);
    out.push_str(key);
    out
}
