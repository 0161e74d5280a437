//! # Item Repository
//!
//! Inventory operations over the stored item collection.
//!
//! ## Read-Modify-Write
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Every Mutation                                       │
//! │                                                                         │
//! │  validate input  (reject → nothing read, nothing written)              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  load "inventoryItems"  →  Vec<Item>                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  apply ONE change (append / replace fields / remove)                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  save "inventoryItems"  ←  Vec<Item>   (skipped when nothing changed)  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Not-Found Policy
//! Updating or deleting an unknown id is a silent no-op: it is reported in
//! the return value (`UpsertOutcome::Missing`, `None`) and never as an error.

use stockroom_core::validation::validate_item_input;
use stockroom_core::{filter_items, next_id, Item, ItemId, ItemInput};
use tracing::debug;

use crate::error::StoreResult;
use crate::store::Store;

/// Result of an upsert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// A new item was appended with a freshly allocated id.
    Inserted(Item),
    /// An existing item had its fields replaced.
    Updated(Item),
    /// The requested id does not exist; nothing was written.
    Missing(ItemId),
}

impl UpsertOutcome {
    /// The stored item, if anything was stored.
    pub fn item(&self) -> Option<&Item> {
        match self {
            UpsertOutcome::Inserted(item) | UpsertOutcome::Updated(item) => Some(item),
            UpsertOutcome::Missing(_) => None,
        }
    }

    /// Consumes the outcome, returning the stored item.
    pub fn into_item(self) -> Option<Item> {
        match self {
            UpsertOutcome::Inserted(item) | UpsertOutcome::Updated(item) => Some(item),
            UpsertOutcome::Missing(_) => None,
        }
    }
}

/// Repository for inventory items.
///
/// ## Usage
/// ```rust
/// use stockroom_core::{ItemInput, Money};
/// use stockroom_store::Store;
///
/// let store = Store::in_memory().unwrap();
/// let repo = store.items();
///
/// let bolt = repo.insert(&ItemInput::new("Bolt", 10, "1.5".parse::<Money>().unwrap())).unwrap();
/// assert_eq!(bolt.id.get(), 1);
/// assert_eq!(repo.find(bolt.id).unwrap(), Some(bolt));
/// ```
#[derive(Debug, Clone)]
pub struct ItemRepository {
    store: Store,
}

impl ItemRepository {
    /// Creates a new ItemRepository.
    pub fn new(store: Store) -> Self {
        ItemRepository { store }
    }

    fn key(&self) -> &str {
        &self.store.keys().inventory
    }

    /// Lists every item in stored (insertion) order.
    pub fn list(&self) -> StoreResult<Vec<Item>> {
        self.store.load(self.key())
    }

    /// Gets an item by id.
    ///
    /// ## Returns
    /// * `Ok(Some(Item))` - Item found
    /// * `Ok(None)` - Item not found
    pub fn find(&self, id: ItemId) -> StoreResult<Option<Item>> {
        Ok(self.list()?.into_iter().find(|item| item.id == id))
    }

    /// Returns items whose name or id contains `term`, ignoring case.
    ///
    /// An empty term returns the whole collection.
    pub fn search(&self, term: &str) -> StoreResult<Vec<Item>> {
        debug!(term = %term, "Searching items");
        let items = self.list()?;
        let found = filter_items(&items, term);
        debug!(count = found.len(), "Search returned items");
        Ok(found)
    }

    /// Inserts or updates an item.
    ///
    /// ## Behavior
    /// - `existing_id = None`: allocate `max(id) + 1` (or `1`) and append
    /// - `existing_id = Some(id)` and found: replace name, quantity and
    ///   price in place; the id never changes
    /// - `existing_id = Some(id)` and not found: [`UpsertOutcome::Missing`],
    ///   nothing written
    ///
    /// ## Errors
    /// * `StoreError::Validation` - name empty, quantity < 1 or price <= 0;
    ///   checked before the collection is read
    /// * `StoreError::Corrupt` - the stored collection does not parse
    pub fn upsert(&self, input: &ItemInput, existing_id: Option<ItemId>) -> StoreResult<UpsertOutcome> {
        validate_item_input(input)?;

        let mut items = self.list()?;

        let outcome = match existing_id {
            Some(id) => match items.iter_mut().find(|item| item.id == id) {
                Some(item) => {
                    debug!(id = %id, name = %input.name, "Updating item");
                    item.apply(input);
                    UpsertOutcome::Updated(item.clone())
                }
                None => {
                    debug!(id = %id, "Update target not found, skipping");
                    return Ok(UpsertOutcome::Missing(id));
                }
            },
            None => UpsertOutcome::Inserted(Self::append(&mut items, input)),
        };

        self.store.save(self.key(), &items)?;
        Ok(outcome)
    }

    /// Inserts a new item with an allocated id.
    pub fn insert(&self, input: &ItemInput) -> StoreResult<Item> {
        validate_item_input(input)?;

        let mut items = self.list()?;
        let item = Self::append(&mut items, input);
        self.store.save(self.key(), &items)?;

        Ok(item)
    }

    fn append(items: &mut Vec<Item>, input: &ItemInput) -> Item {
        let id = next_id(items);
        debug!(id = %id, name = %input.name, "Inserting item");
        let item = Item::from_input(id, input);
        items.push(item.clone());
        item
    }

    /// Updates an existing item. `Ok(None)` if the id is unknown.
    pub fn update(&self, id: ItemId, input: &ItemInput) -> StoreResult<Option<Item>> {
        Ok(self.upsert(input, Some(id))?.into_item())
    }

    /// Deletes an item by id.
    ///
    /// ## Returns
    /// * `Ok(Some(Item))` - the removed item (for the success message)
    /// * `Ok(None)` - no such id; the collection is left untouched
    pub fn delete(&self, id: ItemId) -> StoreResult<Option<Item>> {
        let mut items = self.list()?;

        let Some(position) = items.iter().position(|item| item.id == id) else {
            debug!(id = %id, "Delete target not found, skipping");
            return Ok(None);
        };

        let removed = items.remove(position);
        debug!(id = %id, name = %removed.name, "Deleting item");
        self.store.save(self.key(), &items)?;

        Ok(Some(removed))
    }

    /// Counts stored items.
    pub fn count(&self) -> StoreResult<usize> {
        Ok(self.list()?.len())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use stockroom_core::Money;

    fn input(name: &str, quantity: i64, cents: i64) -> ItemInput {
        ItemInput::new(name, quantity, Money::from_cents(cents))
    }

    #[test]
    fn test_inserts_get_dense_ids() {
        let store = Store::in_memory().unwrap();
        let repo = store.items();

        for expected in 1..=4u64 {
            let item = repo.insert(&input(&format!("item {expected}"), 1, 100)).unwrap();
            assert_eq!(item.id.get(), expected);
        }

        let ids: Vec<u64> = repo.list().unwrap().iter().map(|i| i.id.get()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_update_keeps_id_and_position() {
        let store = Store::in_memory().unwrap();
        let repo = store.items();
        repo.insert(&input("Bolt", 10, 150)).unwrap();
        repo.insert(&input("Nut", 5, 20)).unwrap();

        let outcome = repo.upsert(&input("Hex Bolt", 12, 175), Some(ItemId::new(1))).unwrap();
        let updated = outcome.item().unwrap();
        assert!(matches!(outcome, UpsertOutcome::Updated(_)));
        assert_eq!(updated.id, ItemId::new(1));
        assert_eq!(updated.name, "Hex Bolt");

        let items = repo.list().unwrap();
        assert_eq!(items[0].id, ItemId::new(1));
        assert_eq!(items[0].price.to_fixed_string(), "1.75");
        assert_eq!(items[1].name, "Nut");
    }

    #[test]
    fn test_update_missing_id_is_silent_noop() {
        let store = Store::in_memory().unwrap();
        let repo = store.items();
        repo.insert(&input("Bolt", 10, 150)).unwrap();
        let before = store.raw(repo.key()).unwrap();

        let outcome = repo.upsert(&input("Ghost", 1, 100), Some(ItemId::new(99))).unwrap();
        assert_eq!(outcome, UpsertOutcome::Missing(ItemId::new(99)));
        assert_eq!(repo.update(ItemId::new(99), &input("Ghost", 1, 100)).unwrap(), None);
        assert_eq!(store.raw(repo.key()).unwrap(), before);
    }

    #[test]
    fn test_validation_blocks_mutation() {
        let store = Store::in_memory().unwrap();
        let repo = store.items();
        repo.insert(&input("Bolt", 10, 150)).unwrap();
        let before = store.raw(repo.key()).unwrap();

        let zero_qty = repo.upsert(&input("Bolt", 0, 150), Some(ItemId::new(1)));
        assert!(matches!(zero_qty, Err(StoreError::Validation(_))));

        let zero_price = repo.upsert(&input("Washer", 3, 0), None);
        assert!(matches!(zero_price, Err(StoreError::Validation(_))));

        assert_eq!(store.raw(repo.key()).unwrap(), before);
    }

    #[test]
    fn test_delete_returns_removed_item() {
        let store = Store::in_memory().unwrap();
        let repo = store.items();
        repo.insert(&input("Bolt", 10, 150)).unwrap();
        repo.insert(&input("Nut", 5, 20)).unwrap();

        let removed = repo.delete(ItemId::new(1)).unwrap().unwrap();
        assert_eq!(removed.name, "Bolt");
        assert_eq!(repo.count().unwrap(), 1);
        assert_eq!(repo.find(ItemId::new(1)).unwrap(), None);
    }

    #[test]
    fn test_delete_missing_leaves_collection_unchanged() {
        let store = Store::in_memory().unwrap();
        let repo = store.items();
        repo.insert(&input("Bolt", 10, 150)).unwrap();
        let before = store.raw(repo.key()).unwrap();

        assert_eq!(repo.delete(ItemId::new(42)).unwrap(), None);
        assert_eq!(store.raw(repo.key()).unwrap(), before);
    }

    #[test]
    fn test_ids_continue_from_max_after_delete() {
        let store = Store::in_memory().unwrap();
        let repo = store.items();
        repo.insert(&input("A", 1, 100)).unwrap();
        repo.insert(&input("B", 1, 100)).unwrap();
        repo.delete(ItemId::new(1)).unwrap();

        assert_eq!(repo.insert(&input("C", 1, 100)).unwrap().id, ItemId::new(3));
    }

    #[test]
    fn test_search_delegates_to_filter() {
        let store = Store::in_memory().unwrap();
        let repo = store.items();
        repo.insert(&input("Widget", 3, 100)).unwrap();
        repo.insert(&input("Bolt", 9, 25)).unwrap();

        assert_eq!(repo.search("wid").unwrap()[0].name, "Widget");
        assert_eq!(repo.search("").unwrap().len(), 2);
    }
}
