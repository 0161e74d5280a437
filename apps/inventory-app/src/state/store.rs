//! # Store State
//!
//! Wraps the `Store` handle for use in commands.
//!
//! ## Thread Safety
//! `Store` is a cheap clone around an `Arc<dyn KeyValueBackend>`, and every
//! backend call takes its own lock. Commands can share it without extra
//! locking; read-modify-write cycles from two callers can still interleave.
//!
//! ## Usage in Commands
//! ```rust,ignore
//! pub fn list_items(store: &StoreState, ...) -> Result<InventoryTable, ApiError> {
//!     store.require_user()?;
//!     let items = store.inner().items().search(term)?;
//!     ...
//! }
//! ```

use stockroom_store::Store;

use crate::error::ApiError;

/// Wrapper around `Store` for app state management.
#[derive(Debug, Clone)]
pub struct StoreState {
    store: Store,
}

impl StoreState {
    /// Creates a new StoreState wrapping the store handle.
    pub fn new(store: Store) -> Self {
        StoreState { store }
    }

    /// Returns a reference to the inner Store.
    pub fn inner(&self) -> &Store {
        &self.store
    }

    /// Returns the logged-in username.
    ///
    /// ## Errors
    /// * `ErrorCode::Unauthorized` - nobody is logged in
    pub fn require_user(&self) -> Result<String, ApiError> {
        self.store
            .sessions()
            .current_user()?
            .ok_or_else(ApiError::unauthorized)
    }
}
