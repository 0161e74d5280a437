//! # Export Commands
//!
//! Writes the dated inventory backup.

use std::path::{Path, PathBuf};

use chrono::{NaiveDate, Utc};
use serde::Serialize;
use stockroom_store::export_inventory;
use tracing::debug;

use crate::error::ApiError;
use crate::state::StoreState;
use crate::view::Notice;

/// Result of a successful download.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Download {
    pub path: PathBuf,
    pub item_count: usize,
    pub notice: Notice,
}

/// Writes `inventory_backup_<today>.json` into `dir`.
///
/// The backup always holds the full stored inventory, whatever the search
/// box currently shows.
///
/// ## Errors
/// * `EXPORT_ERROR` - `No items to download.` when the inventory is empty
pub fn download_inventory(store: &StoreState, dir: &Path) -> Result<Download, ApiError> {
    download_inventory_on(store, dir, Utc::now().date_naive())
}

/// [`download_inventory`] with an explicit date.
pub fn download_inventory_on(
    store: &StoreState,
    dir: &Path,
    date: NaiveDate,
) -> Result<Download, ApiError> {
    store.require_user()?;
    debug!(dir = %dir.display(), %date, "download_inventory command");

    let export = export_inventory(&store.inner().items(), date)?;
    let path = export.write_to_dir(dir)?;

    Ok(Download {
        path,
        item_count: export.item_count,
        notice: Notice::downloaded(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use stockroom_core::{Item, ItemInput, Money};
    use stockroom_store::Store;

    fn logged_in() -> StoreState {
        let store = StoreState::new(Store::in_memory().unwrap());
        store.inner().sessions().login("admin", "123").unwrap();
        store
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    #[test]
    fn test_empty_inventory_has_nothing_to_download() {
        let dir = tempfile::tempdir().unwrap();
        let err = download_inventory_on(&logged_in(), dir.path(), date()).unwrap_err();

        assert_eq!(err.code, ErrorCode::ExportError);
        assert_eq!(err.message, "No items to download.");
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_download_writes_backup() {
        let store = logged_in();
        store
            .inner()
            .items()
            .insert(&ItemInput::new("Bolt", 10, Money::from_cents(150)))
            .unwrap();
        let dir = tempfile::tempdir().unwrap();

        let download = download_inventory_on(&store, dir.path(), date()).unwrap();
        assert_eq!(download.notice.message, "Inventory data downloaded successfully!");
        assert_eq!(download.item_count, 1);
        assert!(download.path.ends_with("inventory_backup_2026-10-18.json"));

        let text = std::fs::read_to_string(&download.path).unwrap();
        let items: Vec<Item> = serde_json::from_str(&text).unwrap();
        assert_eq!(items[0].name, "Bolt");
        assert!(text.contains("\n  {\n    \"id\": 1,"));
    }

    #[test]
    fn test_download_requires_login() {
        let store = StoreState::new(Store::in_memory().unwrap());
        let dir = tempfile::tempdir().unwrap();
        let err = download_inventory(&store, dir.path()).unwrap_err();
        assert_eq!(err.code, ErrorCode::Unauthorized);
    }
}
