//! Namespace backed by the process environment.

use std::sync::Mutex;

use super::{Namespace, validate_entry, validate_key};
use crate::error::ConfigError;

/// Serializes every environment write made through `ProcessEnv`.
static ENV_WRITE_LOCK: Mutex<()> = Mutex::new(());

/// The host environment-variable table.
///
/// Values written here are visible to anything else in the process that
/// reads the environment, including child processes spawned afterwards.
/// Writes made through this type are serialized. Code that reads or writes
/// the environment directly on other threads is not covered by that lock.
///
/// Values that are not valid UTF-8 are read lossily, so a set variable is
/// never reported as unset.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Namespace for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        // `var_os` is unspecified for keys the host cannot store.
        validate_key(key).ok()?;
        std::env::var_os(key).map(|v| {
            v.into_string()
                .unwrap_or_else(|v| v.to_string_lossy().into_owned())
        })
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ConfigError> {
        validate_entry(key, value)?;
        let _guard = ENV_WRITE_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        // SAFETY: key and value passed validation, and writes through this
        // type hold ENV_WRITE_LOCK.
        unsafe {
            std::env::set_var(key, value);
        }
        Ok(())
    }
}
