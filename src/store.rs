//! Local key-value store backing the persisted session.
//!
//! DESIGN
//! ======
//! A string-keyed map persisted as a single JSON object file, written through
//! on every mutation. This stands in for the browser-local storage the
//! dashboard originally relied on: synchronous, small, and best-effort.
//!
//! TRADE-OFFS
//! ==========
//! Flush failures are logged and swallowed — a session that fails to persist
//! degrades to "logged out after restart", never to a user-visible fault.
//! Concurrent processes sharing one state file are last-write-wins.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("state file write failed: {0}")]
    Write(#[from] std::io::Error),
    #[error("state serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Synchronous string-keyed store with an optional JSON file behind it.
/// Clone is cheap; all clones share the same map.
#[derive(Clone)]
pub struct KvStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
    path: Option<PathBuf>,
}

impl KvStore {
    /// Open a store backed by `path`, loading any existing contents.
    /// A missing or malformed file degrades to an empty store.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match std::fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<HashMap<String, String>>(&raw) {
                Ok(map) => map,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "state file malformed, starting empty");
                    HashMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "state file unreadable, starting empty");
                HashMap::new()
            }
        };

        Self { entries: Arc::new(Mutex::new(entries)), path: Some(path) }
    }

    /// Store without a backing file, for tests and ephemeral runs.
    #[must_use]
    pub fn in_memory() -> Self {
        Self { entries: Arc::new(Mutex::new(HashMap::new())), path: None }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        let entries = self.lock();
        entries.get(key).cloned()
    }

    pub fn set(&self, key: &str, value: &str) {
        let snapshot = {
            let mut entries = self.lock();
            entries.insert(key.to_owned(), value.to_owned());
            entries.clone()
        };
        self.flush(&snapshot);
    }

    pub fn remove(&self, key: &str) {
        let snapshot = {
            let mut entries = self.lock();
            if entries.remove(key).is_none() {
                return;
            }
            entries.clone()
        };
        self.flush(&snapshot);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// Write-through. Best effort: failures are logged, never surfaced.
    fn flush(&self, snapshot: &HashMap<String, String>) {
        let Some(path) = &self.path else {
            return;
        };
        if let Err(e) = write_file(path, snapshot) {
            tracing::warn!(path = %path.display(), error = %e, "state file flush failed");
        }
    }
}

fn write_file(path: &Path, entries: &HashMap<String, String>) -> Result<(), StoreError> {
    let raw = serde_json::to_string_pretty(entries)?;
    std::fs::write(path, raw)?;
    Ok(())
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
