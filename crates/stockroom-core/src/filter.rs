//! # Query Filter
//!
//! Case-insensitive substring search over item name and id.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Search box: "wid"                                                      │
//! │                                                                         │
//! │  ┌────┬──────────────┐                                                  │
//! │  │ 1  │ Widget       │ ← "widget" contains "wid"       MATCH            │
//! │  │ 2  │ Bolt         │                                                  │
//! │  │ 12 │ Washer       │                                                  │
//! │  └────┴──────────────┘                                                  │
//! │                                                                         │
//! │  Search box: "2"  → ids "2" and "12" both contain "2"                  │
//! │  Search box: ""   → everything, original order                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Pure: no state, no side effects, insertion order always preserved.

use crate::types::Item;

/// Returns true when `item` matches an already-lowercased term.
fn matches_term(item: &Item, lowered_term: &str) -> bool {
    item.name.to_lowercase().contains(lowered_term) || item.id.to_string().contains(lowered_term)
}

/// Returns the items whose name or id contains `term`, ignoring case.
///
/// ## Example
/// ```rust
/// use stockroom_core::{filter_items, Item, ItemId, Money};
///
/// let items = vec![
///     Item::new(ItemId::new(1), "Widget", 3, Money::from_cents(100)),
///     Item::new(ItemId::new(2), "Bolt", 9, Money::from_cents(25)),
/// ];
///
/// assert_eq!(filter_items(&items, "WID")[0].name, "Widget");
/// assert_eq!(filter_items(&items, "").len(), 2);
/// ```
pub fn filter_items(items: &[Item], term: &str) -> Vec<Item> {
    if term.is_empty() {
        return items.to_vec();
    }

    let lowered = term.to_lowercase();
    items
        .iter()
        .filter(|item| matches_term(item, &lowered))
        .cloned()
        .collect()
}
