//! # State Module
//!
//! Manages application state for the inventory app.
//!
//! ## Why Multiple State Types?
//! Instead of a single `AppState` struct containing everything,
//! we use separate state types. Commands declare exactly what they need.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────┐              │
//! │  │  StoreState  │  │  FormState   │  │   ConfigState    │              │
//! │  │              │  │              │  │                  │              │
//! │  │  Store       │  │  Arc<Mutex<  │  │  app_name        │              │
//! │  │  (shared     │  │    ItemForm  │  │  currency_symbol │              │
//! │  │   backend)   │  │  >>          │  │  data_path       │              │
//! │  └──────────────┘  └──────────────┘  └──────────────────┘              │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • StoreState: each backend call locks on its own                      │
//! │  • FormState: Protected by Arc<Mutex<T>> for exclusive access          │
//! │  • ConfigState: Read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod form;
mod store;

pub use config::{default_data_path, ConfigState, DATA_FILE_NAME};
pub use form::{FormState, ItemFields, ItemForm, ADD_LABEL, SAVE_LABEL};
pub use store::StoreState;
