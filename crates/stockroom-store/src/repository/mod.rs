//! # Repository Module
//!
//! Repository implementations over the key-value store.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern Explained                         │
//! │                                                                         │
//! │  App command                                                           │
//! │       │                                                                 │
//! │       │  store.items().upsert(&input, None)                            │
//! │       ▼                                                                 │
//! │  ItemRepository                                                        │
//! │  ├── list / find / search                                              │
//! │  ├── upsert (insert or update by id)                                   │
//! │  └── delete                                                            │
//! │       │                                                                 │
//! │       │  load whole collection → change one record → save whole       │
//! │       ▼                                                                 │
//! │  Store (one JSON blob per key)                                         │
//! │                                                                         │
//! │  Benefits:                                                              │
//! │  • Storage format isolated in one place                                │
//! │  • Easy to test against the in-memory backend                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`ItemRepository`](item::ItemRepository) - Inventory CRUD and search
//! - [`SessionRepository`](session::SessionRepository) - Login, logout, current user

pub mod item;
pub mod session;
