//! # First-Start Defaults
//!
//! Seeds a fresh store so the app has something to log in with.
//!
//! ## How It Works
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Store Initialization                               │
//! │                                                                         │
//! │  Store::open(config)                                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  "users" present?          no ──► write default user list             │
//! │       │ yes                                                             │
//! │       ▼                                                                 │
//! │  "inventoryItems" present? no ──► write []                            │
//! │       │ yes                                                             │
//! │       ▼                                                                 │
//! │  Leave everything as is (existing values are never rewritten)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Presence is checked on the raw value only, so a corrupt blob is left
//! untouched here and reported later by whichever operation reads it.

use stockroom_core::{Item, User};
use tracing::info;

use crate::error::StoreResult;
use crate::store::Store;

/// What `initialize` had to write.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InitReport {
    pub seeded_users: bool,
    pub seeded_inventory: bool,
}

/// Which first-start values are present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitStatus {
    pub users_present: bool,
    pub inventory_present: bool,
}

impl InitStatus {
    pub fn is_initialized(&self) -> bool {
        self.users_present && self.inventory_present
    }
}

/// Writes the default user list and an empty inventory where absent.
///
/// ## Safety
/// - Idempotent: safe to run on every start
/// - Never overwrites an existing value
pub fn initialize(store: &Store, default_users: &[User]) -> StoreResult<InitReport> {
    let keys = store.keys().clone();
    let mut report = InitReport::default();

    if !store.contains(&keys.users)? {
        store.save(&keys.users, default_users)?;
        report.seeded_users = true;
    }

    if !store.contains(&keys.inventory)? {
        store.save::<Item>(&keys.inventory, &[])?;
        report.seeded_inventory = true;
    }

    if report.seeded_users || report.seeded_inventory {
        info!(
            users = report.seeded_users,
            inventory = report.seeded_inventory,
            "Seeded first-start defaults"
        );
    }

    Ok(report)
}

/// Reports which first-start values exist (for diagnostics).
pub fn status(store: &Store) -> StoreResult<InitStatus> {
    let keys = store.keys();
    Ok(InitStatus {
        users_present: store.contains(&keys.users)?,
        inventory_present: store.contains(&keys.inventory)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MemoryBackend;
    use crate::store::StoreKeys;
    use std::sync::Arc;
    use stockroom_core::{INVENTORY_KEY, USERS_KEY};

    #[test]
    fn test_initialize_fresh_store() {
        let store = Store::with_backend(Arc::new(MemoryBackend::new()), StoreKeys::default());
        assert!(!status(&store).unwrap().is_initialized());

        let report = initialize(&store, &User::default_users()).unwrap();
        assert!(report.seeded_users);
        assert!(report.seeded_inventory);
        assert!(status(&store).unwrap().is_initialized());

        let users: Vec<User> = store.load(USERS_KEY).unwrap();
        assert_eq!(users, vec![User::new("admin", "123")]);
        assert_eq!(store.raw(INVENTORY_KEY).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_initialize_is_idempotent_and_preserves_data() {
        let backend = MemoryBackend::with_entries([
            (USERS_KEY, r#"[{"username":"ops","password":"pw"}]"#),
            (INVENTORY_KEY, r#"[{"id":3,"name":"Gear","quantity":1,"price":"9.99"}]"#),
        ]);
        let store = Store::with_backend(Arc::new(backend), StoreKeys::default());

        let report = initialize(&store, &User::default_users()).unwrap();
        assert_eq!(report, InitReport::default());

        let users: Vec<User> = store.load(USERS_KEY).unwrap();
        assert_eq!(users[0].username, "ops");
        assert_eq!(store.items().count().unwrap(), 1);
    }

    #[test]
    fn test_initialize_leaves_corrupt_blob_alone() {
        let backend = MemoryBackend::with_entries([(INVENTORY_KEY, "oops")]);
        let store = Store::with_backend(Arc::new(backend), StoreKeys::default());

        initialize(&store, &User::default_users()).unwrap();
        assert_eq!(store.raw(INVENTORY_KEY).unwrap().as_deref(), Some("oops"));
    }
}
