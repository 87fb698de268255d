//! Update Quantity slice

use jiff::Timestamp;

use super::{CartEngine, CartError, OwnerMode, ProductId, StoreError};

impl CartEngine {
    /// Sets the quantity of the line for `product_id`. A quantity of zero or
    /// less deletes the line; updating an absent line is a no-op. No upper
    /// bound is enforced here, stock clamping belongs to the caller.
    pub async fn update_quantity(
        &self,
        product_id: ProductId,
        new_quantity: i64,
    ) -> Result<(), CartError> {
        if new_quantity <= 0 {
            return self.remove_item(product_id).await;
        }
        let quantity =
            u32::try_from(new_quantity).map_err(|_| CartError::InvalidQuantity(new_quantity))?;

        let mut guard = self.begin_mutation().await;
        let Some(line) = guard.state.line(product_id).cloned() else {
            return Ok(());
        };

        match guard.state.mode() {
            OwnerMode::Guest => {
                let mut line = line;
                line.quantity = quantity;
                line.updated_at = Timestamp::now();
                guard.state.put_line(line);
                self.save_guest_snapshot(&guard.state.snapshot_lines());
            }
            OwnerMode::Authenticated(_) => {
                match self.store().update_cart_line_quantity(line.id, quantity).await {
                    Ok(updated) => guard.state.put_line(updated),
                    // The row is already gone server-side; tolerate the
                    // stale local view rather than fail the mutation.
                    Err(StoreError::NotFound) => {}
                    Err(error) => return Err(error.into()),
                }
            }
        }

        Ok(())
    }
}
