//! Catalog products, validation, listing state.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod state;
pub mod wire;

use crate::shared::ProductId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

pub use state::{ProductListing, SearchResults};

/// Highest star rating a product can carry.
pub const MAX_RATING: u8 = 5;

// ─── Product ─────────────────────────────────────────────────────────────────

/// A catalog product. Immutable once fetched; listings replace it wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub cost: Decimal,
    pub rating: u8,
    pub image: String,
}

/// Look up a product by id in a fetched catalog.
pub fn find<'a>(catalog: &'a [Product], id: &ProductId) -> Option<&'a Product> {
    catalog.iter().find(|p| &p.id == id)
}

// ─── Validation ──────────────────────────────────────────────────────────────

#[derive(Debug, PartialEq)]
pub enum ValidationError {
    MissingId,
    MissingName(String),
    NegativeCost(String, Decimal),
    RatingOutOfRange(String, f64),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingId => write!(f, "Missing id"),
            ValidationError::MissingName(id) => write!(f, "Missing name ({id})"),
            ValidationError::NegativeCost(id, cost) => write!(f, "Negative cost {cost} ({id})"),
            ValidationError::RatingOutOfRange(id, rating) => {
                write!(f, "Rating {rating} outside 0..={MAX_RATING} ({id})")
            }
        }
    }
}

impl std::error::Error for ValidationError {}
