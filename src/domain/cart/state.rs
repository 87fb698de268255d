//! Cart aggregate state

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use super::{CartLine, OwnerMode, ProductId};

/// The single cart aggregate for a session. Presentation code reads clones
/// of this; all mutation goes through the engine operations.
#[derive(Clone, Debug, PartialEq)]
pub struct CartState {
    lines: BTreeMap<ProductId, CartLine>,
    mode: OwnerMode,
    subtotal: Decimal,
    item_count: u32,
}

impl Default for CartState {
    fn default() -> Self {
        Self {
            lines: BTreeMap::new(),
            mode: OwnerMode::Guest,
            subtotal: Decimal::ZERO,
            item_count: 0,
        }
    }
}

impl CartState {
    pub fn mode(&self) -> OwnerMode {
        self.mode
    }

    pub fn lines(&self) -> impl Iterator<Item = &CartLine> {
        self.lines.values()
    }

    pub fn line(&self, product_id: ProductId) -> Option<&CartLine> {
        self.lines.get(&product_id)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn subtotal(&self) -> Decimal {
        self.subtotal
    }

    pub fn item_count(&self) -> u32 {
        self.item_count
    }

    /// Recomputes `subtotal` and `item_count` from the current lines.
    /// Idempotent and side-effect free; the cached fields are never written
    /// anywhere else.
    pub fn calculate_totals(&mut self) {
        self.subtotal = self.lines.values().map(CartLine::line_total).sum();
        self.item_count = self.lines.values().map(|line| line.quantity).sum();
    }

    /// Inserts the line, replacing any existing line for the same product.
    pub(crate) fn put_line(&mut self, line: CartLine) {
        self.lines.insert(line.product_id, line);
        self.calculate_totals();
    }

    pub(crate) fn take_line(&mut self, product_id: ProductId) -> Option<CartLine> {
        let line = self.lines.remove(&product_id);
        self.calculate_totals();
        line
    }

    pub(crate) fn clear_lines(&mut self) {
        self.lines.clear();
        self.calculate_totals();
    }

    /// Wholesale replacement, used on mode transitions. Never merges.
    pub(crate) fn replace_lines(&mut self, mode: OwnerMode, lines: Vec<CartLine>) {
        self.mode = mode;
        self.lines = lines
            .into_iter()
            .map(|line| (line.product_id, line))
            .collect();
        self.calculate_totals();
    }

    pub(crate) fn reset_to_guest(&mut self) {
        self.replace_lines(OwnerMode::Guest, Vec::new());
    }

    pub(crate) fn snapshot_lines(&self) -> Vec<CartLine> {
        self.lines.values().cloned().collect()
    }
}
