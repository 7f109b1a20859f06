//! Cart sidebar.

use crate::domain::cart::ReconciledCart;
use crate::shared::{fmt, ProductId};

/// Shown when the cart has no displayable items.
pub const EMPTY_CART_TEXT: &str = "Cart is empty. Add more items to the cart to checkout.";

#[derive(Debug, Clone, PartialEq)]
pub struct CartItemView {
    pub id: ProductId,
    pub name: String,
    pub image: String,
    pub cost: String,
    pub quantity: u32,
    pub line_total: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CartSidebarView {
    pub items: Vec<CartItemView>,
    pub total: String,
    pub item_count: u32,
}

impl CartSidebarView {
    pub fn render(cart: &ReconciledCart) -> Self {
        Self {
            items: cart
                .items
                .iter()
                .map(|item| CartItemView {
                    id: item.product.id.clone(),
                    name: item.product.name.clone(),
                    image: item.product.image.clone(),
                    cost: fmt::money(&item.product.cost),
                    quantity: item.quantity,
                    line_total: fmt::money(&item.line_total),
                })
                .collect(),
            total: fmt::money(&cart.total),
            item_count: cart.item_count,
        }
    }

    pub fn empty_text(&self) -> Option<&'static str> {
        self.items.is_empty().then_some(EMPTY_CART_TEXT)
    }
}

impl From<&ReconciledCart> for CartSidebarView {
    fn from(cart: &ReconciledCart) -> Self {
        Self::render(cart)
    }
}
