//! # stockroom-store: Persistence Layer for Stockroom
//!
//! This crate keeps the inventory, the user list and the session in a flat
//! string key-value store (in memory or a JSON file on disk).
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockroom Data Flow                              │
//! │                                                                         │
//! │  App command (save_item)                                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  stockroom-store (THIS CRATE)                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │    Store      │    │  Repositories │    │   Export     │  │   │
//! │  │   │  (store.rs)   │    │  (item.rs)    │    │ (export.rs)  │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ load / save   │◄───│ ItemRepo      │    │ dated JSON   │  │   │
//! │  │   │ JSON blobs    │    │ SessionRepo   │    │ backup       │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │           │                                                     │   │
//! │  │           ▼                                                     │   │
//! │  │   KeyValueBackend (backend.rs): MemoryBackend | FileBackend     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ~/.local/share/stockroom/stockroom.json                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`backend`] - The key-value seam and its two implementations
//! - [`store`] - Store handle, configuration, load/save
//! - [`bootstrap`] - First-start defaults
//! - [`repository`] - Item and session repositories
//! - [`export`] - Dated inventory backup
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust
//! use stockroom_core::{ItemInput, Money};
//! use stockroom_store::{Store, StoreConfig};
//!
//! let store = Store::open(StoreConfig::in_memory()).unwrap();
//!
//! store.sessions().login("admin", "123").unwrap();
//! store.items().insert(&ItemInput::new("Widget", 3, Money::from_cents(999))).unwrap();
//!
//! assert_eq!(store.items().search("wid").unwrap().len(), 1);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod backend;
pub mod bootstrap;
pub mod error;
pub mod export;
pub mod repository;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use backend::{FileBackend, KeyValueBackend, MemoryBackend};
pub use bootstrap::{InitReport, InitStatus};
pub use error::{StoreError, StoreResult};
pub use export::{export_inventory, export_items, ExportError, InventoryExport};
pub use store::{BackendKind, Store, StoreConfig, StoreKeys};

// Repository re-exports for convenience
pub use repository::item::{ItemRepository, UpsertOutcome};
pub use repository::session::SessionRepository;
