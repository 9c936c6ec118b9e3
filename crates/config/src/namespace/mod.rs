//! Key-value namespaces backing a `ConfigStore`.
//!
//! Responsibilities:
//! - Define the `Namespace` seam between the store and its storage.
//! - Enforce the host's key/value rules before any write.
//!
//! Does NOT handle:
//! - Prefix resolution or collision policy (see `store`).
//!
//! Invariants:
//! - Keys must be non-empty and free of `=` and NUL; values must be free of NUL.
//!   These are the rules of the process environment, applied to every
//!   backend so a store behaves the same whichever one it uses.
//! - A rejected write leaves the namespace unchanged.

mod memory;
mod process;

pub use memory::MemoryNamespace;
pub use process::ProcessEnv;

use crate::constants::KEY_VALUE_SEPARATOR;
use crate::error::ConfigError;

/// Storage for configuration entries.
pub trait Namespace: Send + Sync {
    /// Current value for `key`, or `None` when unset.
    fn get(&self, key: &str) -> Option<String>;

    /// Replace the value for `key`.
    fn set(&self, key: &str, value: &str) -> Result<(), ConfigError>;
}

impl<N: Namespace + ?Sized> Namespace for &N {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ConfigError> {
        (**self).set(key, value)
    }
}

impl<N: Namespace + ?Sized> Namespace for std::sync::Arc<N> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ConfigError> {
        (**self).set(key, value)
    }
}

pub(crate) fn validate_key(key: &str) -> Result<(), ConfigError> {
    let reason = if key.is_empty() {
        "key must not be empty"
    } else if key.contains(KEY_VALUE_SEPARATOR) {
        "key must not contain '='"
    } else if key.contains('\0') {
        "key must not contain NUL bytes"
    } else {
        return Ok(());
    };
    Err(ConfigError::InvalidKey {
        key: key.to_string(),
        reason,
    })
}

pub(crate) fn validate_entry(key: &str, value: &str) -> Result<(), ConfigError> {
    validate_key(key)?;
    if value.contains('\0') {
        return Err(ConfigError::InvalidValue {
            key: key.to_string(),
        });
    }
    Ok(())
}
