//! In-memory stand-in for the hosted cart table, used by tests and demos.
//!
//! Rows are kept bare and joined with the seeded catalog on every read, the
//! way the real backend joins the cart table with the product table. Failure
//! injection, latency injection, and a call counter support the rollback,
//! serialization, and mode-isolation tests.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use anyhow::anyhow;
use async_trait::async_trait;
use jiff::Timestamp;

use crate::domain::cart::{
    CartLine, CartStore, LineId, OwnerMode, Product, ProductId, ProductSnapshot, StoreError,
    UserId,
};

#[derive(Default)]
pub struct InMemoryCartStore {
    catalog: Mutex<HashMap<ProductId, Product>>,
    rows: Mutex<Vec<Row>>,
    session: Mutex<Option<UserId>>,
    fail_next: AtomicBool,
    calls: AtomicUsize,
    latency: Mutex<Option<Duration>>,
}

#[derive(Clone)]
struct Row {
    id: LineId,
    user_id: UserId,
    product_id: ProductId,
    quantity: u32,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl InMemoryCartStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed_product(&self, product: Product) {
        self.catalog.lock().unwrap().insert(product.id, product);
    }

    pub fn open_session(&self, user_id: UserId) {
        *self.session.lock().unwrap() = Some(user_id);
    }

    pub fn close_session(&self) {
        *self.session.lock().unwrap() = None;
    }

    /// Makes the next store call fail with a backend error.
    pub fn fail_next_call(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }

    /// Adds an artificial delay to every call, widening race windows.
    pub fn set_latency(&self, latency: Duration) {
        *self.latency.lock().unwrap() = Some(latency);
    }

    /// Total number of store calls issued, across all methods.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn row_count(&self, user_id: UserId) -> usize {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .filter(|row| row.user_id == user_id)
            .count()
    }

    async fn enter(&self) -> Result<(), StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let latency = *self.latency.lock().unwrap();
        if let Some(latency) = latency {
            tokio::time::sleep(latency).await;
        }
        if self.fail_next.swap(false, Ordering::SeqCst) {
            return Err(StoreError::Backend(anyhow!("injected backend failure")));
        }
        Ok(())
    }

    fn join(&self, row: &Row) -> Result<CartLine, StoreError> {
        let catalog = self.catalog.lock().unwrap();
        let product = catalog.get(&row.product_id).ok_or_else(|| {
            StoreError::Backend(anyhow!("product {} missing from catalog", row.product_id))
        })?;
        Ok(CartLine {
            id: row.id,
            owner: OwnerMode::Authenticated(row.user_id),
            product_id: row.product_id,
            quantity: row.quantity,
            product: ProductSnapshot::from(product),
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl CartStore for InMemoryCartStore {
    async fn get_cart_line(
        &self,
        user_id: UserId,
        product_id: ProductId,
    ) -> Result<Option<CartLine>, StoreError> {
        self.enter().await?;
        let row = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|row| row.user_id == user_id && row.product_id == product_id)
            .cloned();
        row.map(|row| self.join(&row)).transpose()
    }

    async fn insert_cart_line(
        &self,
        user_id: UserId,
        product_id: ProductId,
        quantity: u32,
    ) -> Result<CartLine, StoreError> {
        self.enter().await?;
        let now = Timestamp::now();
        let row = Row {
            id: LineId::new(),
            user_id,
            product_id,
            quantity,
            created_at: now,
            updated_at: now,
        };
        self.rows.lock().unwrap().push(row.clone());
        self.join(&row)
    }

    async fn update_cart_line_quantity(
        &self,
        line_id: LineId,
        quantity: u32,
    ) -> Result<CartLine, StoreError> {
        self.enter().await?;
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|row| row.id == line_id)
            .ok_or(StoreError::NotFound)?;
        row.quantity = quantity;
        row.updated_at = Timestamp::now();
        let row = row.clone();
        drop(rows);
        self.join(&row)
    }

    async fn delete_cart_line(&self, line_id: LineId) -> Result<(), StoreError> {
        self.enter().await?;
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|row| row.id != line_id);
        if rows.len() == before {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    async fn delete_all_cart_lines(&self, user_id: UserId) -> Result<(), StoreError> {
        self.enter().await?;
        self.rows.lock().unwrap().retain(|row| row.user_id != user_id);
        Ok(())
    }

    async fn list_cart_lines(&self, user_id: UserId) -> Result<Vec<CartLine>, StoreError> {
        self.enter().await?;
        let rows: Vec<Row> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|row| row.user_id == user_id)
            .cloned()
            .collect();
        rows.iter().map(|row| self.join(row)).collect()
    }

    async fn current_session_user(&self) -> Result<Option<UserId>, StoreError> {
        self.enter().await?;
        Ok(*self.session.lock().unwrap())
    }
}
