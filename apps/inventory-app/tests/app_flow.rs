//! A full session against a file-backed store, the way a UI shell drives it.

use chrono::NaiveDate;
use stockroom_app::commands::{auth, export, item};
use stockroom_app::error::ErrorCode;
use stockroom_app::state::{ConfigState, ItemFields};
use stockroom_app::view::{AppView, Notice};
use stockroom_app::App;
use stockroom_core::ItemId;

fn open(dir: &tempfile::TempDir) -> App {
    let config = ConfigState::default().with_data_path(dir.path().join("stockroom.json"));
    App::open(config).unwrap()
}

#[test]
fn test_full_session() {
    let dir = tempfile::tempdir().unwrap();
    let app = open(&dir);

    let err = auth::login(&app.store, "admin", "wrong").unwrap_err();
    assert_eq!(Notice::from(err).message, "Invalid username or password.");

    auth::login(&app.store, "admin", "123").unwrap();

    for (name, qty, price) in [("Bolt", "10", "1.5"), ("Widget", "3", "9.99"), ("Nut", "40", "0.05")] {
        item::save_item(&app.store, &app.form, &ItemFields::new(name, qty, price))
            .unwrap()
            .unwrap();
    }

    let table = item::list_items(&app.store, &app.config, "2").unwrap();
    assert_eq!(table.rows.iter().map(|r| r.id).collect::<Vec<_>>(), vec![ItemId::new(2)]);

    item::edit_item(&app.store, &app.form, ItemId::new(3)).unwrap().unwrap();
    let notice = item::save_item(&app.store, &app.form, &ItemFields::new("Lock Nut", "40", "0.07"))
        .unwrap()
        .unwrap();
    assert_eq!(notice.message, "Item \"Lock Nut\" updated successfully!");

    item::delete_item(&app.store, ItemId::new(1)).unwrap().unwrap();

    let download = export::download_inventory_on(
        &app.store,
        &dir.path().join("backups"),
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap(),
    )
    .unwrap();
    assert_eq!(download.item_count, 2);

    auth::logout(&app.store).unwrap();
    assert!(auth::current_view(&app.store, &app.config, "").unwrap().is_login());
}

#[test]
fn test_state_survives_restart() {
    let dir = tempfile::tempdir().unwrap();

    {
        let app = open(&dir);
        auth::login(&app.store, "admin", "123").unwrap();
        item::save_item(&app.store, &app.form, &ItemFields::new("Bolt", "10", "1.5")).unwrap();
    }

    let app = open(&dir);
    match auth::current_view(&app.store, &app.config, "").unwrap() {
        AppView::Inventory { welcome, table } => {
            assert_eq!(welcome, "Welcome, admin");
            assert_eq!(table.rows[0].price, "$1.50");
        }
        AppView::Login => panic!("session should persist"),
    }

    // Ids continue from the stored maximum
    item::save_item(&app.store, &app.form, &ItemFields::new("Nut", "1", "1")).unwrap();
    let table = item::list_items(&app.store, &app.config, "").unwrap();
    assert_eq!(table.rows[1].id, ItemId::new(2));
}

#[test]
fn test_open_seeds_first_start_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let app = open(&dir);

    let status = app.store.inner().status().unwrap();
    assert!(status.users_present);
    assert!(status.inventory_present);
    assert!(dir.path().join("stockroom.json").exists());
}

#[test]
fn test_corrupt_store_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stockroom.json");
    std::fs::write(&path, "{ not json").unwrap();

    let err = App::open(ConfigState::default().with_data_path(&path)).unwrap_err();
    assert_eq!(err.code, ErrorCode::StorageError);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "{ not json");
}
