//! Conversions: wire types → CartLine domain types.

use super::wire::CartLineResponse;
use super::CartLine;
use crate::shared::ProductId;

impl From<CartLineResponse> for CartLine {
    fn from(resp: CartLineResponse) -> Self {
        CartLine {
            product_id: ProductId::from(resp.product_id),
            quantity: resp.qty,
        }
    }
}

/// Convert a server line set, dropping zero-quantity lines.
pub(crate) fn into_lines(responses: Vec<CartLineResponse>) -> Vec<CartLine> {
    responses
        .into_iter()
        .filter(|resp| resp.qty > 0)
        .map(CartLine::from)
        .collect()
}
