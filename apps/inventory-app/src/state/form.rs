//! # Item Form State
//!
//! Holds the add/edit form between commands.
//!
//! ## Form Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Item Form States                                     │
//! │                                                                         │
//! │   ┌──────────────────────┐   edit_item(id)   ┌──────────────────────┐  │
//! │   │  Adding              │ ────────────────► │  Editing id          │  │
//! │   │  editing_id: None    │                   │  editing_id: Some(id)│  │
//! │   │  button: "Add Item"  │ ◄──────────────── │  "Save Changes"      │  │
//! │   └──────────────────────┘  save_item() ok   └──────────────────────┘  │
//! │                                                                         │
//! │   A rejected save keeps the form as it was so the user can fix it.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Thread Safety
//! The form is wrapped in `Arc<Mutex<T>>`; a poisoned lock surfaces as an
//! `Internal` API error.

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use stockroom_core::{validation::validate_item_name, Item, ItemId, ItemInput, Money};

use crate::error::{ApiError, ITEM_RANGE_MESSAGE};

/// Submit button label while adding.
pub const ADD_LABEL: &str = "Add Item";

/// Submit button label while editing.
pub const SAVE_LABEL: &str = "Save Changes";

/// The visible form fields, as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemFields {
    pub name: String,
    pub quantity: String,
    pub price: String,
}

impl ItemFields {
    pub fn new(
        name: impl Into<String>,
        quantity: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        ItemFields {
            name: name.into(),
            quantity: quantity.into(),
            price: price.into(),
        }
    }

    /// Reads the fields into an [`ItemInput`].
    ///
    /// Unreadable quantity or price text is reported with the same message
    /// as an out-of-range value.
    pub fn parse(&self) -> Result<ItemInput, ApiError> {
        validate_item_name(&self.name)?;

        let quantity: i64 = self
            .quantity
            .trim()
            .parse()
            .map_err(|_| ApiError::validation(ITEM_RANGE_MESSAGE))?;

        let price: Money = self
            .price
            .parse()
            .map_err(|_| ApiError::validation(ITEM_RANGE_MESSAGE))?;

        Ok(ItemInput::new(self.name.clone(), quantity, price))
    }
}

/// The add/edit form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemForm {
    /// Hidden id field; `Some` while editing.
    pub editing_id: Option<ItemId>,

    pub fields: ItemFields,
}

impl ItemForm {
    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }

    /// Label of the submit button.
    pub fn submit_label(&self) -> &'static str {
        if self.is_editing() {
            SAVE_LABEL
        } else {
            ADD_LABEL
        }
    }

    /// Pre-fills the form from a stored item.
    pub fn load(&mut self, item: &Item) {
        self.editing_id = Some(item.id);
        self.fields = ItemFields::new(
            item.name.clone(),
            item.quantity.to_string(),
            item.price.to_fixed_string(),
        );
    }

    /// Back to an empty add form.
    pub fn reset(&mut self) {
        *self = ItemForm::default();
    }
}

/// Shared form state.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    form: Arc<Mutex<ItemForm>>,
}

impl FormState {
    /// Creates a new empty form state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Executes a function with read access to the form.
    pub fn with_form<F, R>(&self, f: F) -> Result<R, ApiError>
    where
        F: FnOnce(&ItemForm) -> R,
    {
        let form = self
            .form
            .lock()
            .map_err(|_| ApiError::internal("Form state lock poisoned"))?;
        Ok(f(&form))
    }

    /// Executes a function with write access to the form.
    pub fn with_form_mut<F, R>(&self, f: F) -> Result<R, ApiError>
    where
        F: FnOnce(&mut ItemForm) -> R,
    {
        let mut form = self
            .form
            .lock()
            .map_err(|_| ApiError::internal("Form state lock poisoned"))?;
        Ok(f(&mut form))
    }

    /// A copy of the current form.
    pub fn snapshot(&self) -> Result<ItemForm, ApiError> {
        self.with_form(|form| form.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_parse_fields() {
        let input = ItemFields::new("Bolt", " 10 ", "1.5").parse().unwrap();
        assert_eq!(input.quantity, 10);
        assert_eq!(input.price, Money::from_cents(150));
    }

    #[test]
    fn test_unreadable_numbers_use_range_message() {
        for fields in [
            ItemFields::new("Bolt", "ten", "1.50"),
            ItemFields::new("Bolt", "10", "abc"),
            ItemFields::new("Bolt", "", "1.50"),
        ] {
            let err = fields.parse().unwrap_err();
            assert_eq!(err.code, ErrorCode::ValidationError);
            assert_eq!(err.message, ITEM_RANGE_MESSAGE);
        }
    }

    #[test]
    fn test_blank_name_is_required() {
        let err = ItemFields::new("  ", "1", "1").parse().unwrap_err();
        assert_eq!(err.message, "Item name is required.");
    }

    #[test]
    fn test_load_and_reset_flip_label() {
        let mut form = ItemForm::default();
        assert_eq!(form.submit_label(), "Add Item");

        let item = Item::new(ItemId::new(4), "Gear", 2, Money::from_cents(999));
        form.load(&item);
        assert_eq!(form.submit_label(), "Save Changes");
        assert_eq!(form.editing_id, Some(ItemId::new(4)));
        assert_eq!(form.fields, ItemFields::new("Gear", "2", "9.99"));

        form.reset();
        assert_eq!(form, ItemForm::default());
    }

    #[test]
    fn test_form_state_is_shared_between_clones() {
        let state = FormState::new();
        let other = state.clone();

        state
            .with_form_mut(|form| form.editing_id = Some(ItemId::new(1)))
            .unwrap();
        assert!(other.with_form(|form| form.is_editing()).unwrap());
    }
}
