use fake::Dummy;
use rust_decimal::Decimal;

use crate::domain::helpers::fake::{Price, Stock};

use super::ProductId;

/// Catalog record as fetched from the product table. Only the fields the
/// cart consumes are modeled here; the catalog itself is owned elsewhere.
#[derive(Clone, Debug, PartialEq, Dummy, serde::Serialize, serde::Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[dummy(faker = "Price")]
    pub price: Decimal,
    pub image_url: String,
    #[dummy(faker = "Stock")]
    pub stock: u32,
}

/// Denormalized copy of the product fields a cart line needs for display
/// and pricing. Captured at fetch time; consumers must tolerate staleness
/// (e.g. stock shrinking after the line was added).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ProductSnapshot {
    pub product_id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub image_url: String,
    pub stock: u32,
}

impl From<&Product> for ProductSnapshot {
    fn from(product: &Product) -> Self {
        Self {
            product_id: product.id,
            name: product.name.clone(),
            price: product.price,
            image_url: product.image_url.clone(),
            stock: product.stock,
        }
    }
}
