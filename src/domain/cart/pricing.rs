//! Checkout pricing
//!
//! Pure derivations from the cart subtotal. The free-shipping threshold and
//! tax rate are product decisions and must not drift; checkout renders these
//! numbers verbatim.

use rust_decimal::{Decimal, RoundingStrategy};

use super::CartEngine;

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CheckoutQuote {
    pub subtotal: Decimal,
    pub shipping: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

/// Derives shipping, tax, and the grand total from a subtotal.
pub fn quote(subtotal: Decimal) -> CheckoutQuote {
    let shipping = if subtotal >= free_shipping_threshold() {
        Decimal::ZERO
    } else {
        flat_shipping_rate()
    };
    let tax = (subtotal * tax_rate())
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    CheckoutQuote {
        subtotal,
        shipping,
        tax,
        total: subtotal + shipping + tax,
    }
}

fn free_shipping_threshold() -> Decimal {
    Decimal::new(50, 0)
}

fn flat_shipping_rate() -> Decimal {
    Decimal::new(999, 2)
}

fn tax_rate() -> Decimal {
    Decimal::new(8, 2)
}

impl CartEngine {
    /// Quotes the current cart, for the checkout collaborator.
    pub async fn checkout_quote(&self) -> CheckoutQuote {
        quote(self.state().await.subtotal())
    }
}
