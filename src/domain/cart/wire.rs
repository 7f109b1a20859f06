//! Wire types for cart requests and responses (REST).

use crate::shared::ProductId;
use serde::{Deserialize, Serialize};

/// Body of `POST /cart`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLineRequest {
    #[serde(rename = "productId")]
    pub product_id: ProductId,
    pub qty: u32,
}

/// One line of the cart as returned by `GET /cart` and `POST /cart`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLineResponse {
    #[serde(rename = "productId")]
    pub product_id: String,
    #[serde(rename = "qty", alias = "quantity")]
    pub qty: u32,
}
