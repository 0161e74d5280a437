//! # Identity Allocation
//!
//! Derives the id for a newly inserted item from the current collection.
//!
//! ```text
//! []            → 1
//! [1, 2, 3]     → 4
//! [2]           → 3   (after deleting 1: ids are never reused below the max)
//! [5, 1]        → 6   (max, not last)
//! ```
//!
//! Only correct under sequential use: two writers reading the same collection
//! will allocate the same id.

use crate::types::{Item, ItemId};

/// Returns `1` for an empty collection, otherwise the largest id plus one.
pub fn next_id(items: &[Item]) -> ItemId {
    items
        .iter()
        .map(|item| item.id.get())
        .max()
        .map_or(ItemId::new(1), |max| ItemId::new(max.saturating_add(1)))
}
