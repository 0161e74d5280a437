//! # Key-Value Backends
//!
//! The persistence seam: a synchronous, string-keyed get/set/remove store
//! holding flat key → string pairs, the same contract as browser local
//! storage.
//!
//! ## Implementations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    KeyValueBackend                                      │
//! │                                                                         │
//! │   get(key) → Option<String>   set(key, value)   remove(key)            │
//! │        │                                                                │
//! │        ├── MemoryBackend   Mutex<BTreeMap>, tests and scratch sessions │
//! │        │                                                                │
//! │        └── FileBackend     one JSON object on disk:                    │
//! │                            {                                            │
//! │                              "inventoryItems": "[{\"id\":1,...}]",      │
//! │                              "loggedInUser": "\"admin\"",               │
//! │                              "users": "[{\"username\":\"admin\",...}]"  │
//! │                            }                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Concurrency
//! Each call is atomic on its own. Nothing spans calls: two handles doing
//! read-modify-write on the same key race, and the last write wins.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use tracing::{debug, trace};

use crate::error::{StoreError, StoreResult};

// =============================================================================
// Backend Trait
// =============================================================================

/// Synchronous string-keyed storage.
pub trait KeyValueBackend: Send + Sync + fmt::Debug {
    /// Returns the value under `key`, or `None` if it was never set.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Removes `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> StoreResult<()>;
}

fn lock<T>(mutex: &Mutex<T>) -> StoreResult<MutexGuard<'_, T>> {
    mutex
        .lock()
        .map_err(|_| StoreError::Backend("backend lock poisoned".to_string()))
}

// =============================================================================
// Memory Backend
// =============================================================================

/// In-memory backend. Contents vanish with the value.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a backend pre-populated with raw entries.
    ///
    /// ## Usage
    /// ```rust
    /// use stockroom_store::backend::{KeyValueBackend, MemoryBackend};
    ///
    /// let backend = MemoryBackend::with_entries([("inventoryItems", "not json")]);
    /// assert_eq!(backend.get("inventoryItems").unwrap().as_deref(), Some("not json"));
    /// ```
    pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        MemoryBackend {
            entries: Mutex::new(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }
}

impl KeyValueBackend for MemoryBackend {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(lock(&self.entries)?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        lock(&self.entries)?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        lock(&self.entries)?.remove(key);
        Ok(())
    }
}

// =============================================================================
// File Backend
// =============================================================================

/// Backend persisting all keys in one pretty-printed JSON object on disk.
///
/// ## Behavior
/// - Missing file reads as an empty store; it is created on the first write
/// - Every call re-reads the file, so edits made by hand are picked up
/// - Writes go to a sibling temp file and are renamed into place
#[derive(Debug)]
pub struct FileBackend {
    path: PathBuf,
    guard: Mutex<()>,
}

impl FileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileBackend {
            path: path.into(),
            guard: Mutex::new(()),
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> StoreResult<BTreeMap<String, String>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                trace!(path = %self.path.display(), "Store file absent, reading as empty");
                return Ok(BTreeMap::new());
            }
            Err(err) => return Err(StoreError::io(&self.path, err)),
        };

        if text.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&text).map_err(|source| StoreError::CorruptFile {
            path: self.path.clone(),
            source,
        })
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) -> StoreResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|err| StoreError::io(parent, err))?;
        }

        let text = serde_json::to_string_pretty(entries).map_err(|source| {
            StoreError::Serialization {
                key: self.path.display().to_string(),
                source,
            }
        })?;

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        fs::write(&tmp, text).map_err(|err| StoreError::io(&tmp, err))?;
        fs::rename(&tmp, &self.path).map_err(|err| StoreError::io(&self.path, err))?;

        debug!(path = %self.path.display(), keys = entries.len(), "Store file written");
        Ok(())
    }
}

impl KeyValueBackend for FileBackend {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let _guard = lock(&self.guard)?;
        Ok(self.read_entries()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let _guard = lock(&self.guard)?;
        let mut entries = self.read_entries()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries)
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        let _guard = lock(&self.guard)?;
        let mut entries = self.read_entries()?;
        if entries.remove(key).is_some() {
            self.write_entries(&entries)?;
        }
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
