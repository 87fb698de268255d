use std::sync::Arc;
use std::time::Duration;

use cart_engine::domain::cart::{OwnerMode, UserId};
use rust_decimal::Decimal;

use crate::test_utils::{engine, product_priced};

#[tokio::test]
async fn a_guest_fills_a_cart_and_checks_out() {
    let (_, engine) = engine();
    let shirt = product_priced(1999);
    let mug = product_priced(1250);

    engine.add_item(&shirt, 2).await.unwrap();
    engine.add_item(&mug, 1).await.unwrap();

    let state = engine.state().await;
    assert_eq!(state.subtotal(), Decimal::new(5248, 2));
    assert_eq!(state.item_count(), 3);

    let quote = engine.checkout_quote().await;
    assert_eq!(quote.shipping, Decimal::ZERO);
    assert_eq!(quote.tax, Decimal::new(420, 2));
    assert_eq!(quote.total, Decimal::new(5668, 2));

    // Checkout records the order, then empties the cart.
    engine.clear_cart().await.unwrap();
    let state = engine.state().await;
    assert!(state.is_empty());
    assert_eq!(state.subtotal(), Decimal::ZERO);
}

#[tokio::test]
async fn totals_stay_consistent_across_a_mixed_sequence() {
    let (_, engine) = engine();
    let a = product_priced(500);
    let b = product_priced(1275);
    let c = product_priced(99);

    engine.add_item(&a, 3).await.unwrap();
    engine.add_item(&b, 1).await.unwrap();
    engine.add_item(&c, 2).await.unwrap();
    engine.update_quantity(a.id, 1).await.unwrap();
    engine.remove_item(b.id).await.unwrap();
    engine.add_item(&c, 1).await.unwrap();

    let state = engine.state().await;
    let expected: Decimal = state.lines().map(|line| line.line_total()).sum();
    let expected_count: u32 = state.lines().map(|line| line.quantity).sum();
    assert_eq!(state.subtotal(), expected);
    assert_eq!(state.item_count(), expected_count);
    assert_eq!(state.subtotal(), Decimal::new(797, 2));
    assert_eq!(state.item_count(), 4);
}

#[tokio::test]
async fn guest_mutations_never_reach_the_store() {
    let (store, engine) = engine();
    let product = product_priced(1500);

    engine.add_item(&product, 2).await.unwrap();
    engine.update_quantity(product.id, 5).await.unwrap();
    engine.remove_item(product.id).await.unwrap();
    engine.clear_cart().await.unwrap();

    assert_eq!(store.calls(), 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn concurrent_increments_do_not_lose_updates() {
    let (store, engine) = engine();
    let product = product_priced(1000);
    store.seed_product(product.clone());
    let user_id = UserId::new();
    store.open_session(user_id);
    engine.resume_session().await.unwrap();
    store.set_latency(Duration::from_millis(10));

    let engine = Arc::new(engine);
    let first = {
        let engine = Arc::clone(&engine);
        let product = product.clone();
        tokio::spawn(async move { engine.add_item(&product, 1).await })
    };
    let second = {
        let engine = Arc::clone(&engine);
        let product = product.clone();
        tokio::spawn(async move { engine.add_item(&product, 1).await })
    };
    first.await.unwrap().unwrap();
    second.await.unwrap().unwrap();

    // Both read-modify-write round trips were serialized by the cart lock,
    // so neither increment was lost.
    assert_eq!(engine.state().await.line(product.id).unwrap().quantity, 2);
    assert_eq!(store.row_count(user_id), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn the_busy_flag_tracks_in_flight_mutations() {
    let (store, engine) = engine();
    let product = product_priced(1000);
    store.seed_product(product.clone());
    let user_id = UserId::new();
    store.open_session(user_id);
    engine.resume_session().await.unwrap();
    assert!(!engine.is_busy());

    store.set_latency(Duration::from_millis(100));
    let engine = Arc::new(engine);
    let task = {
        let engine = Arc::clone(&engine);
        let product = product.clone();
        tokio::spawn(async move { engine.add_item(&product, 1).await })
    };
    tokio::time::sleep(Duration::from_millis(20)).await;
    assert!(engine.is_busy());

    task.await.unwrap().unwrap();
    assert!(!engine.is_busy());
}

#[tokio::test]
async fn a_full_session_round_trip() {
    let (store, engine) = engine();
    let guest_pick = product_priced(899);
    let server_pick = product_priced(2499);
    store.seed_product(server_pick.clone());

    // Browsing anonymously.
    engine.add_item(&guest_pick, 2).await.unwrap();
    assert_eq!(engine.state().await.mode(), OwnerMode::Guest);

    // Sign in: the persisted cart wins, the guest cart is discarded.
    let user_id = UserId::new();
    store.open_session(user_id);
    engine.resume_session().await.unwrap();
    engine.add_item(&server_pick, 1).await.unwrap();
    let state = engine.state().await;
    assert_eq!(state.mode(), OwnerMode::Authenticated(user_id));
    assert!(state.line(guest_pick.id).is_none());
    assert_eq!(state.item_count(), 1);

    // Sign out: back to an empty guest cart, server rows untouched.
    store.close_session();
    engine.sign_out().await;
    let state = engine.state().await;
    assert_eq!(state.mode(), OwnerMode::Guest);
    assert!(state.is_empty());
    assert_eq!(store.row_count(user_id), 1);
}
