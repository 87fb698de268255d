//! Remove Item slice

use super::{CartEngine, CartError, OwnerMode, ProductId, StoreError};

impl CartEngine {
    /// Removes the line for `product_id`. Removing an absent line is a
    /// no-op, and a line the server has already deleted counts as removed.
    /// In authenticated mode the local line is only dropped once the remote
    /// delete has confirmed.
    pub async fn remove_item(&self, product_id: ProductId) -> Result<(), CartError> {
        let mut guard = self.begin_mutation().await;
        let Some(line) = guard.state.line(product_id).cloned() else {
            return Ok(());
        };

        if let OwnerMode::Authenticated(_) = guard.state.mode() {
            match self.store().delete_cart_line(line.id).await {
                Ok(()) | Err(StoreError::NotFound) => {}
                Err(error) => return Err(error.into()),
            }
        }

        guard.state.take_line(product_id);
        if guard.state.mode() == OwnerMode::Guest {
            self.save_guest_snapshot(&guard.state.snapshot_lines());
        }
        tracing::debug!(%product_id, "item removed from cart");
        Ok(())
    }
}
