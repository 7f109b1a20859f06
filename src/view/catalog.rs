//! Product grid.

use crate::domain::cart::CartState;
use crate::domain::product::{Product, ProductListing, MAX_RATING};
use crate::shared::{fmt, ProductId};

/// Shown while the initial catalog fetch is in flight.
pub const LOADING_TEXT: &str = "Loading Products...";
/// Shown when a search matched nothing.
pub const NO_PRODUCTS_FOUND: &str = "No products found";

/// One product card.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCardView {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub cost: String,
    pub rating: u8,
    pub image: String,
    pub in_cart: bool,
}

impl ProductCardView {
    pub fn new(product: &Product, cart: &CartState) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            category: product.category.clone(),
            cost: fmt::money(&product.cost),
            rating: product.rating,
            image: product.image.clone(),
            in_cart: cart.contains(&product.id),
        }
    }

    /// Rating as filled/empty stars, e.g. `"★★★★☆"`.
    pub fn stars(&self) -> String {
        let filled = self.rating.min(MAX_RATING) as usize;
        let empty = MAX_RATING as usize - filled;
        format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
    }
}

/// The product grid with its loading and empty states.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductGridView {
    pub cards: Vec<ProductCardView>,
    pub loading: bool,
    pub empty: bool,
}

impl ProductGridView {
    pub fn render(listing: &ProductListing, cart: &CartState) -> Self {
        Self {
            cards: listing
                .visible()
                .iter()
                .map(|p| ProductCardView::new(p, cart))
                .collect(),
            loading: listing.is_loading(),
            empty: listing.is_empty(),
        }
    }

    /// The status line under the grid, if any.
    pub fn status_text(&self) -> Option<&'static str> {
        if self.loading {
            Some(LOADING_TEXT)
        } else if self.empty {
            Some(NO_PRODUCTS_FOUND)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::CartLine;
    use crate::domain::product::SearchResults;
    use rust_decimal::Decimal;

    fn product(id: &str, rating: u8) -> Product {
        Product {
            id: ProductId::from(id),
            name: "Basketball".to_string(),
            category: "Sports".to_string(),
            cost: Decimal::from(1250),
            rating,
            image: "https://i.imgur.com/lulqWzW.jpg".to_string(),
        }
    }

    #[test]
    fn test_card_formats_cost_and_marks_in_cart() {
        let mut cart = CartState::new();
        cart.replace(vec![CartLine::new("a", 1)]);
        let card = ProductCardView::new(&product("a", 4), &cart);
        assert_eq!(card.cost, "$1,250");
        assert!(card.in_cart);
        assert_eq!(card.stars(), "★★★★☆");
        assert!(!ProductCardView::new(&product("b", 0), &cart).in_cart);
    }

    #[test]
    fn test_grid_status_text() {
        let cart = CartState::new();
        let mut listing = ProductListing::new();
        listing.begin_load();
        assert_eq!(
            ProductGridView::render(&listing, &cart).status_text(),
            Some(LOADING_TEXT)
        );

        listing.apply_catalog(vec![product("a", 5)]);
        let grid = ProductGridView::render(&listing, &cart);
        assert_eq!(grid.cards.len(), 1);
        assert_eq!(grid.status_text(), None);

        listing.apply_search(SearchResults {
            generation: 1,
            query: "zzz".to_string(),
            products: vec![],
        });
        let grid = ProductGridView::render(&listing, &cart);
        assert!(grid.cards.is_empty());
        assert_eq!(grid.status_text(), Some(NO_PRODUCTS_FOUND));
    }
}
