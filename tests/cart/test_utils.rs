use std::sync::Arc;

use cart_engine::domain::cart::{CartEngine, Product};
use cart_engine::domain::helpers::memory::InMemoryCartStore;
use fake::{Fake, Faker};
use rust_decimal::Decimal;

pub fn engine() -> (Arc<InMemoryCartStore>, CartEngine) {
    let store = Arc::new(InMemoryCartStore::new());
    let engine = CartEngine::new(store.clone());
    (store, engine)
}

pub fn product_priced(cents: i64) -> Product {
    Product {
        price: Decimal::new(cents, 2),
        ..Faker.fake()
    }
}
