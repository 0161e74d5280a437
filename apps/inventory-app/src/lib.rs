//! # Stockroom App Library
//!
//! Command and presentation layer of the Stockroom inventory manager.
//! A UI shell (web view, terminal, test) holds an [`App`] and calls the
//! functions in [`commands`] with the pieces of state each one needs.
//!
//! ## Module Organization
//! ```text
//! stockroom_app/
//! ├── lib.rs          ◄─── You are here (App wiring, tracing)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── store.rs    ◄─── Store handle + session gate
//! │   ├── form.rs     ◄─── Add/edit form state
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── auth.rs     ◄─── Login / logout / current view
//! │   ├── item.rs     ◄─── Item list, save, edit, delete
//! │   └── export.rs   ◄─── Inventory download
//! ├── view.rs         ◄─── Table rows, notices, screens
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## Usage
//! ```rust
//! use stockroom_app::commands::{auth, item};
//! use stockroom_app::state::ItemFields;
//! use stockroom_app::App;
//!
//! let app = App::in_memory().unwrap();
//! auth::login(&app.store, "admin", "123").unwrap();
//!
//! let fields = ItemFields::new("Widget", "3", "9.99");
//! let notice = item::save_item(&app.store, &app.form, &fields).unwrap();
//! assert_eq!(notice.unwrap().message, "Item \"Widget\" added successfully!");
//! ```

pub mod commands;
pub mod error;
pub mod state;
pub mod view;

use stockroom_store::{Store, StoreConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

use error::ApiError;
use state::{ConfigState, FormState, StoreState};

/// Everything a UI shell needs to drive the app.
#[derive(Debug, Clone)]
pub struct App {
    pub store: StoreState,
    pub config: ConfigState,
    pub form: FormState,
}

impl App {
    /// Opens the app with configuration from the environment.
    ///
    /// ## Startup Sequence
    /// ```text
    /// ┌─────────────────────────────────────────────────────────────────────────┐
    /// │                       Application Startup                               │
    /// │                                                                         │
    /// │  1. Initialize Logging ───────────────────────────────────────────────► │
    /// │     • tracing-subscriber with env filter                                │
    /// │     • Default: info,stockroom=debug; override with RUST_LOG             │
    /// │                                                                         │
    /// │  2. Load Configuration ───────────────────────────────────────────────► │
    /// │     • STOCKROOM_* variables over defaults                               │
    /// │                                                                         │
    /// │  3. Open Store ───────────────────────────────────────────────────────► │
    /// │     • JSON file at the data path (created on first write)               │
    /// │     • Seed default user + empty inventory if absent                     │
    /// │                                                                         │
    /// │  4. Initialize State Objects ─────────────────────────────────────────► │
    /// │     • StoreState, ConfigState, FormState (empty add form)               │
    /// └─────────────────────────────────────────────────────────────────────────┘
    /// ```
    pub fn start() -> Result<Self, ApiError> {
        init_tracing();
        info!("Starting Stockroom");
        App::open(ConfigState::from_env())
    }

    /// Opens the app with the given configuration.
    pub fn open(config: ConfigState) -> Result<Self, ApiError> {
        info!(path = %config.data_path.display(), app = %config.app_name, "Opening store");
        let store = Store::open(StoreConfig::new(&config.data_path))?;

        let status = store.status()?;
        info!(
            users = status.users_present,
            inventory = status.inventory_present,
            "Store ready"
        );

        Ok(App::with_store(store, config))
    }

    /// In-memory app with default configuration (for tests and demos).
    pub fn in_memory() -> Result<Self, ApiError> {
        let store = Store::open(StoreConfig::in_memory())?;
        Ok(App::with_store(store, ConfigState::default()))
    }

    fn with_store(store: Store, config: ConfigState) -> Self {
        App {
            store: StoreState::new(store),
            config,
            form: FormState::new(),
        }
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=stockroom_store=trace` - Show trace for the store crate only
/// - Default: `info,stockroom=debug`
///
/// Calling it again after a subscriber is set is a no-op.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,stockroom=debug"));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
