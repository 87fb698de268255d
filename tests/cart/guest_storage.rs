use std::fs;
use std::sync::Arc;

use cart_engine::domain::cart::{CartEngine, GUEST_CART_STORAGE_KEY, GuestCartStorage};
use cart_engine::domain::helpers::memory::InMemoryCartStore;
use cart_engine::infra::{JsonFileStorage, get_config_settings};
use rust_decimal::Decimal;

use crate::test_utils::product_priced;

fn engine_with_storage(storage: Arc<JsonFileStorage>) -> (Arc<InMemoryCartStore>, CartEngine) {
    let store = Arc::new(InMemoryCartStore::new());
    let engine = CartEngine::with_guest_storage(store.clone(), storage);
    (store, engine)
}

#[tokio::test]
async fn the_guest_cart_survives_a_restart() {
    let dir = tempfile::tempdir().unwrap();
    let storage = Arc::new(JsonFileStorage::new(dir.path()));
    let product = product_priced(1299);

    let (_, engine) = engine_with_storage(storage.clone());
    engine.add_item(&product, 2).await.unwrap();
    drop(engine);

    let (_, engine) = engine_with_storage(storage);
    let state = engine.state().await;
    assert_eq!(state.line(product.id).unwrap().quantity, 2);
    // Totals are recomputed on load, never persisted.
    assert_eq!(state.subtotal(), Decimal::new(2598, 2));
    assert_eq!(state.item_count(), 2);
}

#[tokio::test]
async fn a_corrupt_snapshot_degrades_to_an_empty_cart() {
    let dir = tempfile::tempdir().unwrap();
    let storage = Arc::new(JsonFileStorage::new(dir.path()));
    fs::write(storage.path(), b"not json").unwrap();

    let (_, engine) = engine_with_storage(storage);

    assert!(engine.state().await.is_empty());
}

#[tokio::test]
async fn sign_in_empties_the_durable_guest_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let storage = Arc::new(JsonFileStorage::new(dir.path()));
    let (store, engine) = engine_with_storage(storage.clone());
    engine.add_item(&product_priced(450), 1).await.unwrap();

    let user_id = cart_engine::domain::cart::UserId::new();
    store.open_session(user_id);
    engine.resume_session().await.unwrap();
    drop(engine);

    // A later anonymous session must not resurrect the discarded guest cart.
    let (_, engine) = engine_with_storage(storage);
    assert!(engine.state().await.is_empty());
}

#[test]
fn the_storage_file_is_named_after_the_engines_key() {
    let storage = JsonFileStorage::new("/tmp/anywhere");
    assert!(
        storage
            .path()
            .ends_with(format!("{GUEST_CART_STORAGE_KEY}.json"))
    );
}

#[test]
fn a_missing_file_loads_as_an_empty_cart() {
    let dir = tempfile::tempdir().unwrap();
    let storage = JsonFileStorage::new(dir.path());
    assert!(storage.load().unwrap().is_empty());
}

#[test]
fn settings_resolve_from_the_config_directory() {
    let settings = get_config_settings().unwrap();
    assert_eq!(settings.guest_cart.directory, ".cart");
    let storage = JsonFileStorage::from_settings(&settings.guest_cart);
    assert!(storage.path().starts_with(".cart"));
}
