//! Cart state container — app-owned, SDK-provided update logic.

use super::{reconcile, CartLine, ReconciledCart};
use crate::domain::product::Product;
use crate::shared::ProductId;

/// The client's cached copy of the server cart.
///
/// The app owns instances of this type. Writes go through the cart
/// sub-client, which replaces the lines with whatever the server returns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartState {
    lines: Vec<CartLine>,
}

impl CartState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all lines with the server's view of the cart.
    pub fn replace(&mut self, lines: Vec<CartLine>) {
        self.lines = lines;
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn contains(&self, product_id: &ProductId) -> bool {
        super::is_in_cart(&self.lines, product_id)
    }

    /// Quantity of `product_id` in the cart (0 if absent).
    pub fn quantity_of(&self, product_id: &ProductId) -> u32 {
        self.lines
            .iter()
            .find(|line| &line.product_id == product_id)
            .map(|line| line.quantity)
            .unwrap_or(0)
    }

    /// Join the lines with a catalog for display.
    pub fn reconcile(&self, catalog: &[Product]) -> ReconciledCart {
        reconcile(&self.lines, catalog)
    }

    /// Drop the cached lines (e.g. on logout).
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
