//! Wire types for product responses (REST).

use crate::shared::serde_util;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A product as returned by `GET /products` and `GET /products/search`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductResponse {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(with = "serde_util::decimal_number")]
    pub cost: Decimal,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub image: String,
}
