//! Add Item slice

use jiff::Timestamp;

use super::{CartEngine, CartError, CartLine, OwnerMode, Product};

impl CartEngine {
    /// Adds `quantity` of `product` to the cart, merging into the existing
    /// line for that product if there is one.
    ///
    /// Stock limits are a caller concern; the engine only rejects a zero
    /// quantity. In authenticated mode nothing is applied locally until the
    /// persistence round trip has confirmed.
    #[tracing::instrument(skip(self, product), fields(product_id = %product.id))]
    pub async fn add_item(&self, product: &Product, quantity: u32) -> Result<(), CartError> {
        if quantity == 0 {
            return Err(CartError::InvalidQuantity(0));
        }

        let mut guard = self.begin_mutation().await;
        match guard.state.mode() {
            OwnerMode::Guest => {
                let line = match guard.state.take_line(product.id) {
                    Some(mut line) => {
                        line.quantity += quantity;
                        line.updated_at = Timestamp::now();
                        line
                    }
                    None => CartLine::guest(product, quantity),
                };
                guard.state.put_line(line);
                self.save_guest_snapshot(&guard.state.snapshot_lines());
            }
            OwnerMode::Authenticated(user_id) => {
                let existing = self.store().get_cart_line(user_id, product.id).await?;
                let line = match existing {
                    Some(existing) => {
                        self.store()
                            .update_cart_line_quantity(existing.id, existing.quantity + quantity)
                            .await?
                    }
                    None => {
                        self.store()
                            .insert_cart_line(user_id, product.id, quantity)
                            .await?
                    }
                };
                guard.state.put_line(line);
            }
        }

        tracing::debug!(quantity, "item added to cart");
        Ok(())
    }
}
