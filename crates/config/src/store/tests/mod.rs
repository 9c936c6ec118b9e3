//! Tests for the configuration store.
//!
//! Responsibilities:
//! - Test file loading, comment and malformed-line handling, and path modes.
//! - Test collision policies, including the stop-on-first-existing-key regression.
//! - Test typed accessors and overrides.
//! - Test loading into the real process environment.
//!
//! Invariants:
//! - Tests that touch the process environment use `serial_test` and
//!   `global_test_lock()`, and restore variables with `temp_env`.
//! - Everything else runs against `MemoryNamespace`.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use tempfile::TempDir;

use crate::namespace::MemoryNamespace;
use crate::options::StoreOptions;
use crate::store::ConfigStore;


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Write `contents` to `.env` inside a fresh temp dir.
pub fn env_dir(contents: &str) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join(".env"), contents).unwrap();
    temp_dir
}

/// Write `contents` to a named file inside `temp_dir`.
pub fn env_file(temp_dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = temp_dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

pub fn memory_store(options: StoreOptions) -> ConfigStore<MemoryNamespace> {
    ConfigStore::with_namespace(options, MemoryNamespace::new())
}

pub fn seeded_store<const N: usize>(
    options: StoreOptions,
    seed: [(&str, &str); N],
) -> ConfigStore<MemoryNamespace> {
    ConfigStore::with_namespace(options, seed.into_iter().collect())
}
