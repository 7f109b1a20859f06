//! Product listing state — app-owned, SDK-provided update logic.

use super::Product;

/// Results of one debounced search, tagged with the generation it was issued under.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResults {
    pub generation: u64,
    pub query: String,
    pub products: Vec<Product>,
}

/// What the product grid shows: the full catalog, or the latest search.
///
/// The app owns instances of this type and calls SDK-provided update methods.
/// The full catalog is kept separately from the visible list so the cart can
/// still be reconciled while a search narrows the grid.
#[derive(Debug, Clone, Default)]
pub struct ProductListing {
    catalog: Vec<Product>,
    visible: Vec<Product>,
    loading: bool,
    empty: bool,
    applied_generation: u64,
}

impl ProductListing {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the initial catalog fetch as in flight.
    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    /// Apply a full catalog fetch (replaces everything).
    pub fn apply_catalog(&mut self, products: Vec<Product>) {
        self.catalog = products.clone();
        self.visible = products;
        self.loading = false;
        self.empty = false;
    }

    /// The catalog fetch failed; stop showing the spinner and keep what we had.
    pub fn fail_load(&mut self) {
        self.loading = false;
    }

    /// Apply search results unless a newer search was already applied.
    ///
    /// Returns whether the results were applied.
    pub fn apply_search(&mut self, results: SearchResults) -> bool {
        if results.generation < self.applied_generation {
            tracing::debug!(
                generation = results.generation,
                applied = self.applied_generation,
                "Dropping stale search results"
            );
            return false;
        }
        self.applied_generation = results.generation;
        self.empty = results.products.is_empty();
        self.visible = results.products;
        true
    }

    /// A search failed: the grid is cleared and shows the empty state.
    pub fn fail_search(&mut self, generation: u64) -> bool {
        if generation < self.applied_generation {
            return false;
        }
        self.applied_generation = generation;
        self.visible.clear();
        self.empty = true;
        true
    }

    /// The last fetched full catalog.
    pub fn catalog(&self) -> &[Product] {
        &self.catalog
    }

    /// The products the grid currently shows.
    pub fn visible(&self) -> &[Product] {
        &self.visible
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Whether the "No products found" state should be shown.
    pub fn is_empty(&self) -> bool {
        self.empty
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::ProductId;
    use rust_decimal::Decimal;

    fn product(id: &str, name: &str) -> Product {
        Product {
            id: ProductId::from(id),
            name: name.to_string(),
            category: "Phones".to_string(),
            cost: Decimal::from(100),
            rating: 4,
            image: String::new(),
        }
    }

    fn results(generation: u64, products: Vec<Product>) -> SearchResults {
        SearchResults {
            generation,
            query: "phone".to_string(),
            products,
        }
    }

    #[test]
    fn test_load_lifecycle() {
        let mut listing = ProductListing::new();
        listing.begin_load();
        assert!(listing.is_loading());
        listing.apply_catalog(vec![product("a", "iPhone XR"), product("b", "Basketball")]);
        assert!(!listing.is_loading());
        assert_eq!(listing.visible().len(), 2);
        assert_eq!(listing.catalog().len(), 2);
    }

    #[test]
    fn test_search_with_match_clears_empty_flag() {
        let mut listing = ProductListing::new();
        listing.apply_catalog(vec![product("a", "iPhone XR"), product("b", "Basketball")]);
        assert!(listing.apply_search(results(1, vec![product("a", "iPhone XR")])));
        assert_eq!(listing.visible().len(), 1);
        assert!(!listing.is_empty());
        // The full catalog is untouched by searches.
        assert_eq!(listing.catalog().len(), 2);
    }

    #[test]
    fn test_search_without_match_sets_empty_flag() {
        let mut listing = ProductListing::new();
        listing.apply_catalog(vec![product("a", "iPhone XR")]);
        assert!(listing.apply_search(results(1, vec![])));
        assert!(listing.visible().is_empty());
        assert!(listing.is_empty());
    }

    #[test]
    fn test_older_search_does_not_overwrite_newer() {
        let mut listing = ProductListing::new();
        assert!(listing.apply_search(results(2, vec![product("b", "Basketball")])));
        assert!(!listing.apply_search(results(1, vec![product("a", "iPhone XR")])));
        assert_eq!(listing.visible()[0].id.as_str(), "b");
        assert!(!listing.fail_search(1));
        assert_eq!(listing.visible().len(), 1);
    }

    #[test]
    fn test_failed_search_shows_empty_state() {
        let mut listing = ProductListing::new();
        listing.apply_catalog(vec![product("a", "iPhone XR")]);
        assert!(listing.fail_search(1));
        assert!(listing.visible().is_empty());
        assert!(listing.is_empty());
    }
}
