//! Loading a `.env` file into the store's namespace.
//!
//! Responsibilities:
//! - Resolve the file path from the store's `PathMode`.
//! - Read the file line by line and write entries through the collision policy.
//! - Apply overrides once the file has been read.
//!
//! Invariants / Assumptions:
//! - A file that cannot be opened or read is an error, never skipped.
//! - The file handle is dropped before overrides are applied, on every path.
//! - `StopLoad` ends the file scan with success; overrides still run.
//! - Log events name keys only, never values.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use super::{ConfigStore, Override};
use crate::constants::DEFAULT_FILE_NAME;
use crate::error::ConfigError;
use crate::namespace::Namespace;
use crate::options::{CollisionPolicy, PathMode};
use crate::parser::{ParsedLine, parse_line};

/// Summary of one `load` call. Holds keys and counts, never values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// File that was read.
    pub path: PathBuf,
    /// Entries written from the file.
    pub entries_loaded: usize,
    /// Lines skipped because they start with `#`.
    pub comments_skipped: usize,
    /// Lines skipped because they contain no `=`.
    pub malformed_skipped: usize,
    /// Keys left untouched under `CollisionPolicy::SkipKey`.
    pub keys_kept: Vec<String>,
    /// Key that ended the scan under `CollisionPolicy::StopLoad`.
    pub stopped_at: Option<String>,
    /// Overrides written after the file.
    pub overrides_applied: usize,
}

impl LoadReport {
    /// Whether the file scan ended early on an existing key.
    pub fn stopped_early(&self) -> bool {
        self.stopped_at.is_some()
    }
}

impl<N: Namespace> ConfigStore<N> {
    /// The file `load` reads for `path` under this store's `PathMode`.
    pub fn resolve_path(&self, path: impl AsRef<Path>) -> PathBuf {
        let path = path.as_ref();
        match self.options.path_mode() {
            PathMode::Directory => path.join(DEFAULT_FILE_NAME),
            PathMode::File => path.to_path_buf(),
        }
    }

    /// Load the `.env` file at `path`, then apply `overrides`.
    ///
    /// # Errors
    ///
    /// - `ConfigError::Io` if the file cannot be opened or read. Lines read
    ///   before a read error stay written.
    /// - `ConfigError::InvalidKey` / `ConfigError::InvalidValue` if the
    ///   namespace rejects an entry or override. The load stops there.
    pub fn load(
        &self,
        path: impl AsRef<Path>,
        overrides: &[Override],
    ) -> Result<LoadReport, ConfigError> {
        let policy = self.options.collision_policy();
        let mut report = LoadReport {
            path: self.resolve_path(path),
            ..LoadReport::default()
        };

        tracing::debug!(
            path = %report.path.display(),
            prefix = self.prefix().unwrap_or_default(),
            policy = ?policy,
            "Loading config file"
        );

        self.read_file(policy, &mut report)?;
        report.overrides_applied = self.apply_overrides(overrides.iter().cloned())?;

        tracing::debug!(
            path = %report.path.display(),
            entries = report.entries_loaded,
            comments = report.comments_skipped,
            malformed = report.malformed_skipped,
            kept = report.keys_kept.len(),
            stopped_early = report.stopped_early(),
            overrides = report.overrides_applied,
            "Loaded config file"
        );

        Ok(report)
    }

    fn read_file(
        &self,
        policy: CollisionPolicy,
        report: &mut LoadReport,
    ) -> Result<(), ConfigError> {
        let file = File::open(&report.path).map_err(|e| ConfigError::io(&report.path, &e))?;

        for line in BufReader::new(file).lines() {
            let line = line.map_err(|e| ConfigError::io(&report.path, &e))?;

            let (key, value) = match parse_line(&line) {
                ParsedLine::Comment => {
                    report.comments_skipped += 1;
                    continue;
                }
                ParsedLine::Malformed => {
                    report.malformed_skipped += 1;
                    continue;
                }
                ParsedLine::Entry { key, value } => (self.file_key(key), value),
            };

            if policy != CollisionPolicy::Overwrite && self.has_value(&key) {
                if policy == CollisionPolicy::StopLoad {
                    tracing::warn!(
                        key = %key,
                        path = %report.path.display(),
                        "Config key already set; ignoring the rest of the file"
                    );
                    report.stopped_at = Some(key);
                    return Ok(());
                }
                tracing::debug!(key = %key, "Config key already set; keeping existing value");
                report.keys_kept.push(key);
                continue;
            }

            self.namespace.set(&key, value)?;
            tracing::trace!(key = %key, "Loaded config key");
            report.entries_loaded += 1;
        }

        Ok(())
    }

    fn has_value(&self, key: &str) -> bool {
        self.namespace.get(key).is_some_and(|v| !v.is_empty())
    }
}
