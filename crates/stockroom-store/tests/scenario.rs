//! End-to-end scenarios against the public store API.

use std::sync::Arc;

use stockroom_core::{ItemId, ItemInput, Money, INVENTORY_KEY};
use stockroom_store::{MemoryBackend, Store, StoreConfig, StoreError, StoreKeys};

fn input(name: &str, quantity: i64, price: &str) -> ItemInput {
    ItemInput::new(name, quantity, price.parse::<Money>().unwrap())
}

#[test]
fn test_bolt_scenario() {
    let store = Store::in_memory().unwrap();
    let repo = store.items();
    assert!(repo.list().unwrap().is_empty());

    let bolt = repo.insert(&input("Bolt", 10, "1.5")).unwrap();
    assert_eq!(bolt.id, ItemId::new(1));
    assert!(store
        .raw(INVENTORY_KEY)
        .unwrap()
        .unwrap()
        .contains(r#""price":"1.50""#));

    let nut = repo.insert(&input("Nut", 4, "0.2")).unwrap();
    assert_eq!(nut.id, ItemId::new(2));

    assert_eq!(repo.delete(ItemId::new(1)).unwrap(), Some(bolt));
    assert_eq!(repo.list().unwrap(), vec![nut.clone()]);
    assert_eq!(repo.search("2").unwrap(), vec![nut]);
}

#[test]
fn test_rejected_update_leaves_bytes_unchanged() {
    let store = Store::in_memory().unwrap();
    let repo = store.items();
    repo.insert(&input("Bolt", 10, "1.5")).unwrap();
    repo.insert(&input("Nut", 4, "0.2")).unwrap();
    let before = store.raw(INVENTORY_KEY).unwrap();

    for (qty, price) in [(0, "1.00"), (5, "0"), (-1, "-2")] {
        let result = repo.upsert(&input("Bolt", qty, price), Some(ItemId::new(1)));
        assert!(matches!(result, Err(StoreError::Validation(_))));
    }

    assert_eq!(store.raw(INVENTORY_KEY).unwrap(), before);
}

#[test]
fn test_file_store_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stockroom.json");

    {
        let store = Store::open(StoreConfig::new(&path)).unwrap();
        store.sessions().login("admin", "123").unwrap();
        store.items().insert(&input("Widget", 3, "9.99")).unwrap();
    }

    let store = Store::open(StoreConfig::new(&path)).unwrap();
    assert_eq!(
        store.sessions().current_user().unwrap().as_deref(),
        Some("admin")
    );

    let items = store.items().list().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name, "Widget");
    assert_eq!(items[0].price, Money::from_cents(999));
}

#[test]
fn test_corrupt_inventory_fails_without_overwriting() {
    let backend = MemoryBackend::with_entries([(INVENTORY_KEY, "[{bad")]);
    let store = Store::with_backend(Arc::new(backend), StoreKeys::default());
    let repo = store.items();

    assert!(matches!(repo.list(), Err(StoreError::Corrupt { .. })));
    assert!(repo.insert(&input("Bolt", 1, "1")).is_err());
    assert!(repo.delete(ItemId::new(1)).is_err());
    assert_eq!(store.raw(INVENTORY_KEY).unwrap().as_deref(), Some("[{bad"));
}

#[test]
fn test_custom_keys_are_respected() {
    let keys = StoreKeys {
        inventory: "shop.items".to_string(),
        session: "shop.session".to_string(),
        users: "shop.users".to_string(),
    };
    let store = Store::open(StoreConfig::in_memory().keys(keys)).unwrap();
    store.items().insert(&input("Gear", 2, "3")).unwrap();

    assert!(store.contains("shop.items").unwrap());
    assert!(store.contains("shop.users").unwrap());
    assert!(!store.contains(INVENTORY_KEY).unwrap());
}
