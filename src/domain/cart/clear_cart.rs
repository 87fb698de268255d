//! Clear Cart slice

use super::{CartEngine, CartError, OwnerMode};

impl CartEngine {
    /// Empties the cart. For an authenticated session the user's persisted
    /// lines are bulk-deleted first; the local reset only happens once that
    /// confirms. Used by checkout after an order is recorded, and available
    /// standalone.
    pub async fn clear_cart(&self) -> Result<(), CartError> {
        let mut guard = self.begin_mutation().await;
        if let OwnerMode::Authenticated(user_id) = guard.state.mode() {
            self.store().delete_all_cart_lines(user_id).await?;
        }
        guard.state.clear_lines();
        if guard.state.mode() == OwnerMode::Guest {
            self.save_guest_snapshot(&[]);
        }
        tracing::debug!("cart cleared");
        Ok(())
    }
}
