use jiff::Timestamp;
use rust_decimal::Decimal;

use super::{LineId, Product, ProductId, ProductSnapshot, UserId};

/// Which session the line belongs to. Determines the persistence target:
/// guest lines live only client-side, authenticated lines mirror server rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum OwnerMode {
    Guest,
    Authenticated(UserId),
}

impl OwnerMode {
    pub fn user_id(&self) -> Option<UserId> {
        match self {
            OwnerMode::Guest => None,
            OwnerMode::Authenticated(user_id) => Some(*user_id),
        }
    }
}

/// One cart entry, uniquely keyed by product within a cart. A line with
/// quantity 0 must never exist; driving quantity to 0 deletes the line.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CartLine {
    pub id: LineId,
    pub owner: OwnerMode,
    pub product_id: ProductId,
    pub quantity: u32,
    pub product: ProductSnapshot,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl CartLine {
    /// Creates a local-only line for an anonymous session. The id is a
    /// locally generated placeholder; the server assigns one on persist.
    pub fn guest(product: &Product, quantity: u32) -> Self {
        let now = Timestamp::now();
        Self {
            id: LineId::new(),
            owner: OwnerMode::Guest,
            product_id: product.id,
            quantity,
            product: ProductSnapshot::from(product),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn line_total(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }
}
