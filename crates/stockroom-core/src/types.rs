//! # Domain Types
//!
//! Core domain types used throughout Stockroom.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      Item       │   │    ItemInput    │   │      User       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (ItemId)    │   │  name           │   │  username       │       │
//! │  │  name           │   │  quantity       │   │  password       │       │
//! │  │  quantity       │   │  price          │   │                 │       │
//! │  │  price ("x.yy") │   │  (no id)        │   │  static list    │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! `ItemId` is a positive integer assigned once on insert and never changed.
//! `ItemInput` carries everything the form edits, which is everything but the id.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Item Id
// =============================================================================

/// Integer identifier of an inventory item.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(transparent)]
#[ts(export)]
pub struct ItemId(u64);

impl ItemId {
    #[inline]
    pub const fn new(id: u64) -> Self {
        ItemId(id)
    }

    #[inline]
    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parses the hidden id field of the item form.
impl FromStr for ItemId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(ItemId)
    }
}

// =============================================================================
// Item
// =============================================================================

/// A stock item.
///
/// ## Stored Shape
/// ```json
/// { "id": 1, "name": "Bolt", "quantity": 10, "price": "1.50" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Item {
    /// Unique, immutable after creation.
    pub id: ItemId,

    /// Display name shown in the inventory table.
    pub name: String,

    /// Units in stock (>= 1).
    pub quantity: i64,

    /// Unit price, stored as fixed 2-decimal text.
    #[serde(with = "crate::money::fixed")]
    #[ts(type = "string")]
    pub price: Money,
}

impl Item {
    pub fn new(id: ItemId, name: impl Into<String>, quantity: i64, price: Money) -> Self {
        Item {
            id,
            name: name.into(),
            quantity,
            price,
        }
    }

    /// Builds a new item from validated input and an allocated id.
    pub fn from_input(id: ItemId, input: &ItemInput) -> Self {
        Item::new(id, input.name.clone(), input.quantity, input.price)
    }

    /// Overwrites every editable field, keeping the id.
    pub fn apply(&mut self, input: &ItemInput) {
        self.name = input.name.clone();
        self.quantity = input.quantity;
        self.price = input.price;
    }
}

// =============================================================================
// Item Input
// =============================================================================

/// The editable fields of an item, as submitted by the item form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ItemInput {
    pub name: String,
    pub quantity: i64,
    #[serde(with = "crate::money::fixed")]
    #[ts(type = "string")]
    pub price: Money,
}

impl ItemInput {
    pub fn new(name: impl Into<String>, quantity: i64, price: Money) -> Self {
        ItemInput {
            name: name.into(),
            quantity,
            price,
        }
    }
}

// =============================================================================
// User
// =============================================================================

/// A login account from the static, pre-seeded user list.
///
/// Passwords are compared as plain text; this list is a demo gate, not a
/// security boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct User {
    pub username: String,
    pub password: String,
}

impl User {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        User {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Exact, case-sensitive match on both fields.
    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }

    /// The user list written on first start.
    pub fn default_users() -> Vec<User> {
        vec![User::new("admin", "123")]
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_serializes_price_as_fixed_text() {
        let item = Item::new(ItemId::new(1), "Bolt", 10, Money::from_cents(150));
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(json, r#"{"id":1,"name":"Bolt","quantity":10,"price":"1.50"}"#);
    }

    #[test]
    fn test_item_reads_numeric_price() {
        let item: Item =
            serde_json::from_str(r#"{"id":4,"name":"Nut","quantity":2,"price":1.5}"#).unwrap();
        assert_eq!(item.price, Money::from_cents(150));

        let item: Item =
            serde_json::from_str(r#"{"id":4,"name":"Nut","quantity":2,"price":3}"#).unwrap();
        assert_eq!(item.price, Money::from_cents(300));
    }

    #[test]
    fn test_item_rejects_bad_price_text() {
        let result: Result<Item, _> =
            serde_json::from_str(r#"{"id":4,"name":"Nut","quantity":2,"price":"cheap"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_apply_keeps_id() {
        let mut item = Item::new(ItemId::new(7), "Old", 1, Money::from_cents(100));
        item.apply(&ItemInput::new("New", 5, Money::from_cents(250)));
        assert_eq!(item.id, ItemId::new(7));
        assert_eq!(item.name, "New");
        assert_eq!(item.quantity, 5);
        assert_eq!(item.price.cents(), 250);
    }

    #[test]
    fn test_item_id_parse() {
        assert_eq!(" 12 ".parse::<ItemId>().unwrap(), ItemId::new(12));
        assert!("".parse::<ItemId>().is_err());
        assert!("-1".parse::<ItemId>().is_err());
    }

    #[test]
    fn test_user_matches() {
        let admin = User::new("admin", "123");
        assert!(admin.matches("admin", "123"));
        assert!(!admin.matches("Admin", "123"));
        assert!(!admin.matches("admin", "1234"));
    }
}
