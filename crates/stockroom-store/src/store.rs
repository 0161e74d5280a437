//! # Store Handle
//!
//! Configuration and the shared `Store` handle that every repository uses.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Store Lifecycle                                    │
//! │                                                                         │
//! │  App Startup                                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreConfig::new(path) / in_memory() ← Pick backend + key names       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Store::open(config) ← Create backend + seed first-start defaults      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────┐                           │
//! │  │   Store (cheap to clone)                │                           │
//! │  │   Arc<dyn KeyValueBackend> + StoreKeys  │                           │
//! │  └─────────────────────────────────────────┘                           │
//! │       │                                                                 │
//! │       ├──► store.items()    → ItemRepository                           │
//! │       └──► store.sessions() → SessionRepository                        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Serialization
//! Values are compact JSON text. `load` of an absent (or empty-string) key is
//! an empty collection; a present value that fails to parse is
//! [`StoreError::Corrupt`].

use std::path::PathBuf;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use stockroom_core::{User, INVENTORY_KEY, SESSION_KEY, USERS_KEY};
use tracing::{debug, info};

use crate::backend::{FileBackend, KeyValueBackend, MemoryBackend};
use crate::bootstrap::{self, InitReport, InitStatus};
use crate::error::{StoreError, StoreResult};
use crate::repository::item::ItemRepository;
use crate::repository::session::SessionRepository;

// =============================================================================
// Configuration
// =============================================================================

/// Where the key-value pairs live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendKind {
    /// Process memory only.
    Memory,
    /// A flat JSON object in a file.
    File(PathBuf),
}

/// Key names for the three stored values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreKeys {
    pub inventory: String,
    pub session: String,
    pub users: String,
}

impl Default for StoreKeys {
    fn default() -> Self {
        StoreKeys {
            inventory: INVENTORY_KEY.to_string(),
            session: SESSION_KEY.to_string(),
            users: USERS_KEY.to_string(),
        }
    }
}

/// Store configuration.
///
/// ## Example
/// ```rust
/// use stockroom_store::StoreConfig;
///
/// let config = StoreConfig::new("./data/stockroom.json")
///     .seed_defaults(false);
/// assert!(!config.seed_defaults);
/// ```
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Backend location.
    pub backend: BackendKind,

    /// Key names.
    pub keys: StoreKeys,

    /// Whether to write first-start defaults on open.
    /// Default: true
    pub seed_defaults: bool,

    /// User list written when the users key is absent.
    /// Default: a single `admin` / `123` account
    pub default_users: Vec<User>,
}

impl StoreConfig {
    /// Creates a file-backed configuration. The file is created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        StoreConfig {
            backend: BackendKind::File(path.into()),
            keys: StoreKeys::default(),
            seed_defaults: true,
            default_users: User::default_users(),
        }
    }

    /// Creates an in-memory configuration (for testing).
    pub fn in_memory() -> Self {
        StoreConfig {
            backend: BackendKind::Memory,
            ..StoreConfig::new(PathBuf::new())
        }
    }

    /// Sets the key names.
    pub fn keys(mut self, keys: StoreKeys) -> Self {
        self.keys = keys;
        self
    }

    /// Sets whether to seed defaults on open.
    pub fn seed_defaults(mut self, seed: bool) -> Self {
        self.seed_defaults = seed;
        self
    }

    /// Sets the user list written on first start.
    pub fn default_users(mut self, users: Vec<User>) -> Self {
        self.default_users = users;
        self
    }
}

// =============================================================================
// Store
// =============================================================================

/// Shared handle over a key-value backend.
///
/// Clones share the same backend, like clones of a connection pool.
#[derive(Debug, Clone)]
pub struct Store {
    backend: Arc<dyn KeyValueBackend>,
    keys: StoreKeys,
}

impl Store {
    /// Opens a store.
    ///
    /// ## What This Does
    /// 1. Creates the configured backend
    /// 2. Writes first-start defaults (if enabled): the user list and an
    ///    empty inventory, each only when its key is absent
    pub fn open(config: StoreConfig) -> StoreResult<Self> {
        let backend: Arc<dyn KeyValueBackend> = match &config.backend {
            BackendKind::Memory => {
                info!("Opening in-memory store");
                Arc::new(MemoryBackend::new())
            }
            BackendKind::File(path) => {
                info!(path = %path.display(), "Opening file store");
                Arc::new(FileBackend::new(path))
            }
        };

        let store = Store::with_backend(backend, config.keys);

        if config.seed_defaults {
            store.initialize(&config.default_users)?;
        }

        Ok(store)
    }

    /// Wraps an existing backend without touching its contents.
    ///
    /// This is the injection point for fakes and pre-populated backends.
    pub fn with_backend(backend: Arc<dyn KeyValueBackend>, keys: StoreKeys) -> Self {
        Store { backend, keys }
    }

    /// Shorthand for `Store::open(StoreConfig::in_memory())`.
    pub fn in_memory() -> StoreResult<Self> {
        Store::open(StoreConfig::in_memory())
    }

    /// Writes first-start defaults. Idempotent.
    pub fn initialize(&self, default_users: &[User]) -> StoreResult<InitReport> {
        bootstrap::initialize(self, default_users)
    }

    /// Key names in use.
    pub fn keys(&self) -> &StoreKeys {
        &self.keys
    }

    // -------------------------------------------------------------------------
    // Collections
    // -------------------------------------------------------------------------

    /// Loads the collection stored under `key`.
    ///
    /// ## Returns
    /// * `Ok(vec![])` - key absent or empty string
    /// * `Ok(items)` - stored collection, in stored order
    /// * `Err(StoreError::Corrupt)` - value present but unparsable
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> StoreResult<Vec<T>> {
        Ok(self.load_value(key)?.unwrap_or_default())
    }

    /// Replaces the collection stored under `key`.
    pub fn save<T: Serialize>(&self, key: &str, items: &[T]) -> StoreResult<()> {
        debug!(key = %key, count = items.len(), "Saving collection");
        self.save_value(key, items)
    }

    // -------------------------------------------------------------------------
    // Single values
    // -------------------------------------------------------------------------

    /// Loads and parses a single value. Absent or empty-string keys are `None`.
    pub fn load_value<T: DeserializeOwned>(&self, key: &str) -> StoreResult<Option<T>> {
        match self.backend.get(key)? {
            None => Ok(None),
            Some(text) if text.is_empty() => Ok(None),
            Some(text) => serde_json::from_str(&text)
                .map(Some)
                .map_err(|source| StoreError::corrupt(key, source)),
        }
    }

    /// Serializes and stores a single value.
    pub fn save_value<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> StoreResult<()> {
        let text = serde_json::to_string(value).map_err(|source| StoreError::Serialization {
            key: key.to_string(),
            source,
        })?;
        self.backend.set(key, &text)
    }

    /// Removes a key.
    pub fn remove(&self, key: &str) -> StoreResult<()> {
        self.backend.remove(key)
    }

    /// Whether a key holds a value.
    pub fn contains(&self, key: &str) -> StoreResult<bool> {
        Ok(self.backend.get(key)?.is_some())
    }

    /// The raw stored text under `key`, for inspection.
    pub fn raw(&self, key: &str) -> StoreResult<Option<String>> {
        self.backend.get(key)
    }

    // -------------------------------------------------------------------------
    // Repositories
    // -------------------------------------------------------------------------

    /// Returns the item repository.
    ///
    /// ## Example
    /// ```rust
    /// use stockroom_store::Store;
    ///
    /// let store = Store::in_memory().unwrap();
    /// assert!(store.items().list().unwrap().is_empty());
    /// ```
    pub fn items(&self) -> ItemRepository {
        ItemRepository::new(self.clone())
    }

    /// Returns the session repository.
    pub fn sessions(&self) -> SessionRepository {
        SessionRepository::new(self.clone())
    }

    /// Reports which first-start values are present.
    pub fn status(&self) -> StoreResult<InitStatus> {
        bootstrap::status(self)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
