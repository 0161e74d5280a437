//! # Item Commands
//!
//! Commands behind the item form, the search box and the per-row buttons.
//!
//! ## Save Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    save_item                                            │
//! │                                                                         │
//! │  fields ──► parse ──► invalid? ──► Err(VALIDATION_ERROR), form kept    │
//! │                │                                                        │
//! │                ▼                                                        │
//! │  form.editing_id ──► None      ──► insert  ──► "added successfully!"   │
//! │                 └──► Some(id)  ──► update  ──► "updated successfully!" │
//! │                                     │                                   │
//! │                                     └── id gone ──► no notice          │
//! │                │                                                        │
//! │                ▼                                                        │
//! │  form reset (label back to "Add Item")                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::time::Instant;

use stockroom_core::validation::validate_search_term;
use stockroom_core::ItemId;
use stockroom_store::UpsertOutcome;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::{ConfigState, FormState, ItemFields, ItemForm, StoreState};
use crate::view::{InventoryTable, Notice};

/// Renders the inventory table, filtered by `term`.
///
/// ## Arguments
/// * `term` - Search box contents; empty shows everything. Matched
///   case-insensitively against the name and the id.
pub fn list_items(
    store: &StoreState,
    config: &ConfigState,
    term: &str,
) -> Result<InventoryTable, ApiError> {
    store.require_user()?;
    let start = Instant::now();

    let term = validate_search_term(term, config.max_search_len)?;
    let items = store.inner().items().search(term)?;
    let table = InventoryTable::from_items(&items, config);

    debug!(
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        count = table.len(),
        term = %term,
        "list_items complete"
    );

    Ok(table)
}

/// Submits the item form.
///
/// The form's hidden id decides between insert and update.
///
/// ## Returns
/// * `Ok(Some(Notice))` - item added or updated
/// * `Ok(None)` - the item being edited no longer exists; nothing written
/// * `Err(ApiError)` - validation failed; nothing written, form unchanged
pub fn save_item(
    store: &StoreState,
    form: &FormState,
    fields: &ItemFields,
) -> Result<Option<Notice>, ApiError> {
    store.require_user()?;

    let input = fields.parse()?;
    let editing_id = form.with_form(|f| f.editing_id)?;

    let outcome = store.inner().items().upsert(&input, editing_id)?;
    form.with_form_mut(ItemForm::reset)?;

    let notice = match outcome {
        UpsertOutcome::Inserted(item) => {
            info!(id = %item.id, name = %item.name, "Item added");
            Some(Notice::item_added(&item.name))
        }
        UpsertOutcome::Updated(item) => {
            info!(id = %item.id, name = %item.name, "Item updated");
            Some(Notice::item_updated(&item.name))
        }
        UpsertOutcome::Missing(id) => {
            debug!(id = %id, "Edited item no longer exists");
            None
        }
    };

    Ok(notice)
}

/// Loads an item into the form for editing.
///
/// ## Returns
/// * `Ok(Some(ItemForm))` - the pre-filled form (label "Save Changes")
/// * `Ok(None)` - unknown id; the form is left as it was
pub fn edit_item(
    store: &StoreState,
    form: &FormState,
    id: ItemId,
) -> Result<Option<ItemForm>, ApiError> {
    store.require_user()?;
    debug!(id = %id, "edit_item command");

    let Some(item) = store.inner().items().find(id)? else {
        return Ok(None);
    };

    let filled = form.with_form_mut(|f| {
        f.load(&item);
        f.clone()
    })?;

    Ok(Some(filled))
}

/// Abandons an edit and returns to an empty add form.
pub fn cancel_edit(form: &FormState) -> Result<ItemForm, ApiError> {
    form.with_form_mut(|f| {
        f.reset();
        f.clone()
    })
}

/// Deletes an item.
///
/// Confirmation is the presentation layer's job; this runs unconditionally.
///
/// ## Returns
/// * `Ok(Some(Notice))` - `Item "<name>" deleted successfully.`
/// * `Ok(None)` - unknown id; nothing written
pub fn delete_item(store: &StoreState, id: ItemId) -> Result<Option<Notice>, ApiError> {
    store.require_user()?;

    let removed = store.inner().items().delete(id)?;

    Ok(removed.map(|item| {
        info!(id = %item.id, name = %item.name, "Item deleted");
        Notice::item_deleted(&item.name)
    }))
}
