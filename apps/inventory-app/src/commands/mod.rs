//! # Commands Module
//!
//! All commands exposed to the presentation layer.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── auth.rs     ◄─── Login, logout, current screen
//! ├── item.rs     ◄─── List/search, save, edit, delete
//! └── export.rs   ◄─── Inventory download
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  User clicks "Add Item"                                                │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  save_item(                                                             │
//! │      &app.store,   ◄── only the state it needs                         │
//! │      &app.form,                                                         │
//! │      fields,       ◄── the typed-in values                             │
//! │  ) -> Result<Option<Notice>, ApiError>                                  │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Presentation shows the notice (or the error as a notice) and          │
//! │  re-renders via list_items / current_view                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every item and export command requires a logged-in user.

pub mod auth;
pub mod export;
pub mod item;
