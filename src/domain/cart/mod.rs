mod add_item;
mod clear_cart;
mod engine;
mod errors;
mod ids;
mod line;
mod load_cart;
mod pricing;
mod product;
mod remove_item;
mod state;
mod store;
mod update_quantity;

pub use engine::CartEngine;
pub use errors::{CartError, StoreError};
pub use ids::*;
pub use line::{CartLine, OwnerMode};
pub use pricing::{CheckoutQuote, quote};
pub use product::{Product, ProductSnapshot};
pub use state::CartState;
pub use store::{CartStore, GUEST_CART_STORAGE_KEY, GuestCartStorage};
