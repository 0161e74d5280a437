//! # View Model
//!
//! Plain data handed to the presentation layer: the current screen, the
//! inventory table with its row actions, and transient notices.
//!
//! ## Screen Selection
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  session present?                                                       │
//! │     │                                                                   │
//! │     ├── no  ──► AppView::Login                                          │
//! │     │                                                                   │
//! │     └── yes ──► AppView::Inventory                                      │
//! │                 ├── welcome: "Welcome, admin"                           │
//! │                 └── table:                                              │
//! │                     ID │ Name │ Quantity │ Price │ Actions              │
//! │                     1  │ Bolt │ 10       │ $1.50 │ [Edit] [Delete]      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;

use serde::Serialize;
use stockroom_core::{Item, ItemId};

use crate::error::ApiError;
use crate::state::ConfigState;

// =============================================================================
// Notices
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Error,
}

/// A short message shown after a command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Notice {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Notice {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }

    pub fn welcome_back(username: &str) -> Self {
        Notice::success(format!("Welcome back, {}!", username))
    }

    pub fn logged_out() -> Self {
        Notice::success("Logged out successfully.")
    }

    pub fn item_added(name: &str) -> Self {
        Notice::success(format!("Item \"{}\" added successfully!", name))
    }

    pub fn item_updated(name: &str) -> Self {
        Notice::success(format!("Item \"{}\" updated successfully!", name))
    }

    pub fn item_deleted(name: &str) -> Self {
        Notice::success(format!("Item \"{}\" deleted successfully.", name))
    }

    pub fn downloaded() -> Self {
        Notice::success("Inventory data downloaded successfully!")
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}

/// A failed command is shown as an error notice carrying its message.
impl From<ApiError> for Notice {
    fn from(err: ApiError) -> Self {
        Notice::error(err.message)
    }
}

// =============================================================================
// Inventory Table
// =============================================================================

/// A per-row button and the item it acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "action", content = "id", rename_all = "lowercase")]
pub enum RowAction {
    Edit(ItemId),
    Delete(ItemId),
}

impl RowAction {
    pub fn label(&self) -> &'static str {
        match self {
            RowAction::Edit(_) => "Edit",
            RowAction::Delete(_) => "Delete",
        }
    }
}

/// One rendered table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryRow {
    pub id: ItemId,
    pub name: String,
    pub quantity: i64,
    /// Display price, e.g. `$1.50`
    pub price: String,
    pub actions: [RowAction; 2],
}

impl InventoryRow {
    pub fn from_item(item: &Item, config: &ConfigState) -> Self {
        InventoryRow {
            id: item.id,
            name: item.name.clone(),
            quantity: item.quantity,
            price: config.format_price(item.price),
            actions: [RowAction::Edit(item.id), RowAction::Delete(item.id)],
        }
    }
}

/// The (possibly filtered) inventory, ready to render.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InventoryTable {
    pub rows: Vec<InventoryRow>,
}

impl InventoryTable {
    /// Column headers, in display order.
    pub const COLUMNS: [&'static str; 5] = ["ID", "Name", "Quantity", "Price", "Actions"];

    pub fn from_items(items: &[Item], config: &ConfigState) -> Self {
        InventoryTable {
            rows: items
                .iter()
                .map(|item| InventoryRow::from_item(item, config))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Plain-text rendering for logs and terminals.
impl fmt::Display for InventoryTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [id, name, quantity, price, _] = Self::COLUMNS;
        writeln!(f, "{:<6} {:<30} {:>8} {:>12}", id, name, quantity, price)?;

        for row in &self.rows {
            writeln!(
                f,
                "{:<6} {:<30} {:>8} {:>12}",
                row.id.to_string(),
                row.name,
                row.quantity,
                row.price
            )?;
        }

        Ok(())
    }
}

// =============================================================================
// App View
// =============================================================================

/// Which screen to show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "view", rename_all = "camelCase")]
pub enum AppView {
    Login,
    Inventory {
        /// `Welcome, <username>`
        welcome: String,
        table: InventoryTable,
    },
}

impl AppView {
    pub fn inventory(username: &str, table: InventoryTable) -> Self {
        AppView::Inventory {
            welcome: format!("Welcome, {}", username),
            table,
        }
    }

    pub fn is_login(&self) -> bool {
        matches!(self, AppView::Login)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_core::Money;

    fn items() -> Vec<Item> {
        vec![
            Item::new(ItemId::new(1), "Bolt", 10, Money::from_cents(150)),
            Item::new(ItemId::new(2), "Nut", 4, Money::from_cents(20)),
        ]
    }

    #[test]
    fn test_rows_format_price_and_actions() {
        let table = InventoryTable::from_items(&items(), &ConfigState::default());
        assert_eq!(table.len(), 2);

        let row = &table.rows[0];
        assert_eq!(row.price, "$1.50");
        assert_eq!(row.actions[0].label(), "Edit");
        assert_eq!(row.actions[1], RowAction::Delete(ItemId::new(1)));
        assert_eq!(table.rows[1].price, "$0.20");
    }

    #[test]
    fn test_row_json_shape() {
        let table = InventoryTable::from_items(&items()[..1], &ConfigState::default());
        let json = serde_json::to_value(&table.rows[0]).unwrap();

        assert_eq!(json["id"], 1);
        assert_eq!(json["price"], "$1.50");
        assert_eq!(json["actions"][0]["action"], "edit");
        assert_eq!(json["actions"][1]["id"], 1);
    }

    #[test]
    fn test_display_lists_every_row() {
        let text = InventoryTable::from_items(&items(), &ConfigState::default()).to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("ID"));
        assert!(lines[1].contains("Bolt") && lines[1].ends_with("$1.50"));
    }

    #[test]
    fn test_notice_texts() {
        assert_eq!(Notice::welcome_back("admin").message, "Welcome back, admin!");
        assert_eq!(Notice::item_added("Bolt").message, "Item \"Bolt\" added successfully!");
        assert_eq!(Notice::item_deleted("Bolt").message, "Item \"Bolt\" deleted successfully.");

        let notice = Notice::from(ApiError::unauthorized());
        assert!(notice.is_error());
    }

    #[test]
    fn test_app_view_welcome() {
        let view = AppView::inventory("admin", InventoryTable::default());
        assert!(matches!(view, AppView::Inventory { ref welcome, .. } if welcome == "Welcome, admin"));
        assert!(AppView::Login.is_login());
    }
}
