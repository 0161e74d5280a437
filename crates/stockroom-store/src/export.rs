//! # Inventory Export
//!
//! Produces the dated JSON backup of the whole inventory.
//!
//! ## Output
//! ```text
//! inventory_backup_2026-03-14.json
//! [
//!   {
//!     "id": 1,
//!     "name": "Bolt",
//!     "quantity": 10,
//!     "price": "1.50"
//!   }
//! ]
//! ```
//!
//! The document is the stored collection, pretty-printed with two-space
//! indentation. An empty inventory produces no file.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use stockroom_core::Item;
use thiserror::Error;
use tracing::info;

use crate::error::StoreError;
use crate::repository::item::ItemRepository;

/// Export failures.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Nothing to export.
    #[error("No items to download.")]
    Empty,

    #[error("Failed to serialize inventory: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result type for export operations.
pub type ExportResult<T> = Result<T, ExportError>;

/// A rendered backup, ready to hand to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryExport {
    /// `inventory_backup_YYYY-MM-DD.json`
    pub file_name: String,
    /// Pretty-printed JSON array of items.
    pub contents: String,
    pub item_count: usize,
}

impl InventoryExport {
    /// Writes the backup into `dir` and returns the full path.
    pub fn write_to_dir(&self, dir: impl AsRef<Path>) -> ExportResult<PathBuf> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir).map_err(|source| ExportError::Io {
            path: dir.to_path_buf(),
            source,
        })?;

        let path = dir.join(&self.file_name);
        fs::write(&path, &self.contents).map_err(|source| ExportError::Io {
            path: path.clone(),
            source,
        })?;

        info!(path = %path.display(), items = self.item_count, "Inventory backup written");
        Ok(path)
    }
}

/// File name for a backup taken on `date`.
pub fn backup_file_name(date: NaiveDate) -> String {
    format!("inventory_backup_{}.json", date.format("%Y-%m-%d"))
}

/// Renders `items` as a backup dated `date`.
///
/// ## Errors
/// * `ExportError::Empty` - `items` is empty
pub fn export_items(items: &[Item], date: NaiveDate) -> ExportResult<InventoryExport> {
    if items.is_empty() {
        return Err(ExportError::Empty);
    }

    Ok(InventoryExport {
        file_name: backup_file_name(date),
        contents: serde_json::to_string_pretty(items)?,
        item_count: items.len(),
    })
}

/// Renders the full stored inventory (never a filtered view).
pub fn export_inventory(repo: &ItemRepository, date: NaiveDate) -> ExportResult<InventoryExport> {
    let items = repo.list()?;
    export_items(&items, date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Store;
    use stockroom_core::{ItemId, ItemInput, Money};

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 14).unwrap()
    }

    #[test]
    fn test_backup_file_name() {
        assert_eq!(backup_file_name(date()), "inventory_backup_2026-03-14.json");
    }

    #[test]
    fn test_empty_inventory_is_refused() {
        let store = Store::in_memory().unwrap();
        let err = export_inventory(&store.items(), date()).unwrap_err();
        assert!(matches!(err, ExportError::Empty));
        assert_eq!(err.to_string(), "No items to download.");
    }

    #[test]
    fn test_export_is_pretty_json_of_stored_items() {
        let items = vec![Item::new(ItemId::new(1), "Bolt", 10, Money::from_cents(150))];
        let export = export_items(&items, date()).unwrap();

        assert_eq!(export.item_count, 1);
        assert_eq!(
            export.contents,
            "[\n  {\n    \"id\": 1,\n    \"name\": \"Bolt\",\n    \"quantity\": 10,\n    \"price\": \"1.50\"\n  }\n]"
        );

        let parsed: Vec<Item> = serde_json::from_str(&export.contents).unwrap();
        assert_eq!(parsed, items);
    }

    #[test]
    fn test_export_ignores_search_state() {
        let store = Store::in_memory().unwrap();
        let repo = store.items();
        repo.insert(&ItemInput::new("Widget", 1, Money::from_cents(100))).unwrap();
        repo.insert(&ItemInput::new("Bolt", 2, Money::from_cents(200))).unwrap();
        assert_eq!(repo.search("wid").unwrap().len(), 1);

        let export = export_inventory(&repo, date()).unwrap();
        assert_eq!(export.item_count, 2);
    }

    #[test]
    fn test_write_to_dir() {
        let dir = tempfile::tempdir().unwrap();
        let items = vec![Item::new(ItemId::new(7), "Gear", 1, Money::from_cents(999))];
        let export = export_items(&items, date()).unwrap();

        let path = export.write_to_dir(dir.path().join("backups")).unwrap();
        assert!(path.ends_with("inventory_backup_2026-03-14.json"));
        assert_eq!(fs::read_to_string(path).unwrap(), export.contents);
    }
}
