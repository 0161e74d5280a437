//! # stockroom-core: Pure Inventory Logic for Stockroom
//!
//! This crate is the **heart** of Stockroom. It contains the inventory rules
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockroom Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Browser Frontend                             │   │
//! │  │    Login Form ──► Item Form ──► Inventory Table ──► Export     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    inventory-app commands                       │   │
//! │  │    login, save_item, edit_item, delete_item, search, export    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ stockroom-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────┐│   │
//! │  │   │  types   │ │  money   │ │ identity │ │  filter  │ │valid.││   │
//! │  │   │  Item    │ │  Money   │ │ next_id  │ │ filter_  │ │rules ││   │
//! │  │   │  User    │ │  fixed   │ │          │ │  items   │ │      ││   │
//! │  │   └──────────┘ └──────────┘ └──────────┘ └──────────┘ └──────┘│   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO CLOCK • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                stockroom-store (Persistence Layer)              │   │
//! │  │          key-value backend, JSON blobs, repositories            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Item, ItemInput, User)
//! - [`money`] - Money type with integer cents and fixed 2-decimal text
//! - [`identity`] - Id allocation for inserted items
//! - [`filter`] - Case-insensitive search over name and id
//! - [`validation`] - Input rules checked before any mutation
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use stockroom_core::{filter_items, next_id, Item, ItemId, Money};
//!
//! let price: Money = "1.5".parse().unwrap();
//! assert_eq!(price.to_fixed_string(), "1.50");
//!
//! let items = vec![Item::new(ItemId::new(1), "Widget", 3, price)];
//! assert_eq!(next_id(&items), ItemId::new(2));
//! assert_eq!(filter_items(&items, "wid").len(), 1);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod filter;
pub mod identity;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{AuthError, MoneyParseError, ValidationError};
pub use filter::filter_items;
pub use identity::next_id;
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Key holding the inventory collection.
pub const INVENTORY_KEY: &str = "inventoryItems";

/// Key holding the logged-in username.
pub const SESSION_KEY: &str = "loggedInUser";

/// Key holding the static user list.
pub const USERS_KEY: &str = "users";

/// Maximum accepted length of a search term.
pub const MAX_SEARCH_TERM_LEN: usize = 100;
