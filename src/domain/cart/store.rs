use async_trait::async_trait;

use super::{CartLine, LineId, ProductId, StoreError, UserId};

/// Persistence collaborator for authenticated carts. Implementations own the
/// cart table and return lines joined with the current product snapshot as
/// part of the same round trip.
#[async_trait]
pub trait CartStore: Send + Sync {
    async fn get_cart_line(
        &self,
        user_id: UserId,
        product_id: ProductId,
    ) -> Result<Option<CartLine>, StoreError>;

    async fn insert_cart_line(
        &self,
        user_id: UserId,
        product_id: ProductId,
        quantity: u32,
    ) -> Result<CartLine, StoreError>;

    async fn update_cart_line_quantity(
        &self,
        line_id: LineId,
        quantity: u32,
    ) -> Result<CartLine, StoreError>;

    async fn delete_cart_line(&self, line_id: LineId) -> Result<(), StoreError>;

    async fn delete_all_cart_lines(&self, user_id: UserId) -> Result<(), StoreError>;

    async fn list_cart_lines(&self, user_id: UserId) -> Result<Vec<CartLine>, StoreError>;

    async fn current_session_user(&self) -> Result<Option<UserId>, StoreError>;
}

/// Storage key the engine owns for the durable guest cart snapshot.
pub const GUEST_CART_STORAGE_KEY: &str = "cart-storage";

/// Optional local durable storage for the guest cart. Only the lines are
/// persisted; totals are always recomputed on load.
pub trait GuestCartStorage: Send + Sync {
    fn load(&self) -> anyhow::Result<Vec<CartLine>>;

    fn save(&self, lines: &[CartLine]) -> anyhow::Result<()>;
}
