//! Store options.
//!
//! Responsibilities:
//! - Select the key prefix, the path interpretation, and the collision policy.
//! - Provide serde support so hosts can embed options in their own settings.
//!
//! Does NOT handle:
//! - Reading files or touching the namespace (see `store`).
//!
//! Invariants:
//! - An empty prefix behaves exactly like no prefix.
//! - Without an explicit collision policy, a prefixed store stops the load on
//!   the first existing key and an unprefixed store overwrites.

use serde::{Deserialize, Serialize};

/// How the path passed to `load` is interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathMode {
    /// The path is a directory; `.env` inside it is read.
    #[default]
    Directory,
    /// The path is the file to read.
    File,
}

/// What `load` does when a parsed key already has a non-empty value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollisionPolicy {
    /// Stop reading the file and return success. Later lines are never
    /// loaded, overrides are still applied.
    StopLoad,
    /// Keep the existing value and continue with the next line.
    SkipKey,
    /// Replace the existing value.
    Overwrite,
}

/// Options fixed at store construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreOptions {
    prefix: Option<String>,
    path_mode: PathMode,
    collision_policy: Option<CollisionPolicy>,
}

impl StoreOptions {
    /// Options with no prefix, directory mode, and the derived collision policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the key prefix. An empty string clears it.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        self.prefix = (!prefix.is_empty()).then_some(prefix);
        self
    }

    /// Set how the load path is interpreted.
    pub fn with_path_mode(mut self, mode: PathMode) -> Self {
        self.path_mode = mode;
        self
    }

    /// Pin the collision policy instead of deriving it from the prefix.
    pub fn with_collision_policy(mut self, policy: CollisionPolicy) -> Self {
        self.collision_policy = Some(policy);
        self
    }

    /// The active prefix, if any.
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref().filter(|p| !p.is_empty())
    }

    pub fn path_mode(&self) -> PathMode {
        self.path_mode
    }

    /// The policy `load` applies, explicit or derived.
    pub fn collision_policy(&self) -> CollisionPolicy {
        match self.collision_policy {
            Some(policy) => policy,
            None if self.prefix().is_some() => CollisionPolicy::StopLoad,
            None => CollisionPolicy::Overwrite,
        }
    }
}
