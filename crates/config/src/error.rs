//! Error types for the configuration store.
//!
//! Responsibilities:
//! - Define error variants for load, write, and fallible accessor failures.
//! - Keep I/O failures reduced to path and `ErrorKind`.
//!
//! Does NOT handle:
//! - Malformed `.env` lines (they are skipped, never reported).
//! - Coercion failures in `get_int`/`get_bool` (they fall back silently).
//!
//! Invariants:
//! - Error variants NEVER include values read from a `.env` file or passed as
//!   overrides, to prevent secret leakage. Keys are included for context.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or writing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The `.env` file could not be opened or read.
    #[error("Failed to read config file at {path}: {kind}")]
    Io { path: PathBuf, kind: ErrorKind },

    /// The namespace rejected a key.
    #[error("Invalid config key '{key}': {reason}")]
    InvalidKey { key: String, reason: &'static str },

    /// The namespace rejected a value.
    ///
    /// SAFETY: Only the key is recorded, the rejected value is dropped.
    #[error("Invalid value for config key '{key}': values must not contain NUL bytes")]
    InvalidValue { key: String },

    /// A value is present but is not a base-10 integer.
    #[error("Config key '{key}' is not a valid integer")]
    InvalidInt { key: String },
}

impl ConfigError {
    pub(crate) fn io(path: impl Into<PathBuf>, error: &std::io::Error) -> Self {
        ConfigError::Io {
            path: path.into(),
            kind: error.kind(),
        }
    }
}
