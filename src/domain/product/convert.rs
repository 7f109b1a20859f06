//! Conversions: wire types → Product domain types.

use super::wire::ProductResponse;
use super::{Product, ValidationError, MAX_RATING};
use crate::shared::ProductId;

impl TryFrom<ProductResponse> for Product {
    type Error = ValidationError;

    fn try_from(resp: ProductResponse) -> Result<Self, Self::Error> {
        let id = resp.id.trim().to_string();
        if id.is_empty() {
            return Err(ValidationError::MissingId);
        }
        if resp.name.trim().is_empty() {
            return Err(ValidationError::MissingName(id));
        }
        if resp.cost.is_sign_negative() && !resp.cost.is_zero() {
            return Err(ValidationError::NegativeCost(id, resp.cost));
        }
        if !resp.rating.is_finite() || !(0.0..=f64::from(MAX_RATING)).contains(&resp.rating) {
            return Err(ValidationError::RatingOutOfRange(id, resp.rating));
        }

        Ok(Product {
            id: ProductId::from(id),
            name: resp.name,
            category: resp.category,
            cost: resp.cost,
            // Half stars are not displayed; round to the nearest whole star.
            rating: resp.rating.round() as u8,
            image: resp.image,
        })
    }
}

/// Convert a fetched product list, dropping entries that fail validation.
pub(crate) fn into_catalog(responses: Vec<ProductResponse>) -> Vec<Product> {
    responses
        .into_iter()
        .filter_map(|resp| match Product::try_from(resp) {
            Ok(product) => Some(product),
            Err(e) => {
                tracing::warn!(error = %e, "Skipping invalid product");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn response(id: &str, rating: f64, cost: i64) -> ProductResponse {
        ProductResponse {
            id: id.to_string(),
            name: "iPhone XR".to_string(),
            category: "Phones".to_string(),
            cost: Decimal::from(cost),
            rating,
            image: "https://i.imgur.com/lulqWzW.jpg".to_string(),
        }
    }

    #[test]
    fn test_deserialize_backend_shape() {
        let json = r#"{
            "name": "iPhone XR",
            "category": "Phones",
            "cost": 100,
            "rating": 4,
            "image": "https://i.imgur.com/lulqWzW.jpg",
            "_id": "v4sLtEcMpzabRyfx"
        }"#;
        let resp: ProductResponse = serde_json::from_str(json).unwrap();
        let product = Product::try_from(resp).unwrap();
        assert_eq!(product.id.as_str(), "v4sLtEcMpzabRyfx");
        assert_eq!(product.cost, Decimal::from(100));
        assert_eq!(product.rating, 4);
        assert_eq!(product.category, "Phones");
    }

    #[test]
    fn test_rating_rounds_to_whole_stars() {
        let product = Product::try_from(response("a", 3.6, 10)).unwrap();
        assert_eq!(product.rating, 4);
    }

    #[test]
    fn test_rejects_invalid_products() {
        assert_eq!(
            Product::try_from(response(" ", 3.0, 10)),
            Err(ValidationError::MissingId)
        );
        assert!(matches!(
            Product::try_from(response("a", 6.0, 10)),
            Err(ValidationError::RatingOutOfRange(_, _))
        ));
        assert!(matches!(
            Product::try_from(response("a", 3.0, -1)),
            Err(ValidationError::NegativeCost(_, _))
        ));
    }

    #[test]
    fn test_into_catalog_skips_invalid_entries() {
        let catalog = into_catalog(vec![
            response("a", 4.0, 100),
            response("b", 9.0, 100),
            response("c", 5.0, 50),
        ]);
        let ids: Vec<_> = catalog.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["a", "c"]);
    }
}
