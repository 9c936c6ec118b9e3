//! In-process namespace for hosts that should not mutate the environment.

use std::collections::HashMap;
use std::sync::RwLock;

use super::{Namespace, validate_entry};
use crate::error::ConfigError;

/// A `HashMap` namespace behind an `RwLock`: many readers, one writer.
///
/// A poisoned lock is recovered, since the map only ever holds complete
/// string pairs.
#[derive(Debug, Default)]
pub struct MemoryNamespace {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryNamespace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Copy of all entries, for inspection.
    pub fn snapshot(&self) -> HashMap<String, String> {
        self.read().clone()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, HashMap<String, String>> {
        self.entries.read().unwrap_or_else(|e| e.into_inner())
    }
}

impl<K, V> FromIterator<(K, V)> for MemoryNamespace
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let entries = iter
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            entries: RwLock::new(entries),
        }
    }
}

impl Namespace for MemoryNamespace {
    fn get(&self, key: &str) -> Option<String> {
        self.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ConfigError> {
        validate_entry(key, value)?;
        self.entries
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_set_then_get() {
        let ns = MemoryNamespace::new();
        assert!(ns.is_empty());
        ns.set("FOO", "bar").unwrap();
        assert_eq!(ns.get("FOO").as_deref(), Some("bar"));
        assert_eq!(ns.get("foo"), None, "keys are case-sensitive");
        assert_eq!(ns.len(), 1);
    }

    #[test]
    fn test_rejected_write_leaves_map_unchanged() {
        let ns: MemoryNamespace = [("FOO", "bar")].into_iter().collect();
        assert!(ns.set("", "x").is_err());
        assert!(ns.set("FOO", "a\0b").is_err());
        assert_eq!(ns.snapshot().len(), 1);
        assert_eq!(ns.get("FOO").as_deref(), Some("bar"));
    }

    #[test]
    fn test_concurrent_writers_and_readers() {
        let ns = Arc::new(MemoryNamespace::new());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let ns = Arc::clone(&ns);
                std::thread::spawn(move || {
                    let key = format!("KEY_{i}");
                    ns.set(&key, &i.to_string()).unwrap();
                    assert_eq!(ns.get(&key), Some(i.to_string()));
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(ns.len(), 8);
    }
}
