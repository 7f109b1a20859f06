//! Products sub-client — catalog fetch, search, debounced search.

use crate::client::QKartClient;
use crate::domain::product::convert::into_catalog;
use crate::domain::product::{Product, ProductListing, SearchResults};
use crate::error::SdkError;

/// Sub-client for catalog operations.
pub struct Products<'a> {
    pub(crate) client: &'a QKartClient,
}

impl<'a> Products<'a> {
    /// Fetch the full catalog and remember it as the last fetched catalog.
    pub async fn list(&self) -> Result<Vec<Product>, SdkError> {
        let resp = self.client.http.get_products().await?;
        let catalog = into_catalog(resp);
        *self.client.catalog.write().await = catalog.clone();
        Ok(catalog)
    }

    /// Search the catalog. An empty result is not an error.
    ///
    /// A blank query lists the full catalog.
    pub async fn search(&self, query: &str) -> Result<Vec<Product>, SdkError> {
        if query.trim().is_empty() {
            return self.list().await;
        }
        let resp = self.client.http.search_products(query).await?;
        Ok(into_catalog(resp))
    }

    /// Debounced search for one keystroke.
    ///
    /// Returns `Ok(None)` when a later keystroke superseded this one, either
    /// during the quiet period or while the request was in flight. Errors are
    /// likewise swallowed when they belong to a superseded search.
    pub async fn search_debounced(&self, query: &str) -> Result<Option<SearchResults>, SdkError> {
        let debouncer = &self.client.search_debouncer;
        let Some(generation) = debouncer.settle().await else {
            return Ok(None);
        };

        let result = self.search(query).await;

        if !debouncer.is_current(generation) {
            tracing::debug!(generation, query, "Discarding stale search response");
            return Ok(None);
        }

        Ok(Some(SearchResults {
            generation,
            query: query.to_string(),
            products: result?,
        }))
    }

    /// The catalog from the last successful [`list`](Self::list).
    pub async fn last_catalog(&self) -> Vec<Product> {
        self.client.catalog.read().await.clone()
    }

    // ── Listing helpers ──────────────────────────────────────────────────

    /// Fetch the catalog into a listing, driving its loading flag.
    pub async fn load_into(&self, listing: &mut ProductListing) -> Result<(), SdkError> {
        listing.begin_load();
        match self.list().await {
            Ok(catalog) => {
                listing.apply_catalog(catalog);
                Ok(())
            }
            Err(e) => {
                listing.fail_load();
                Err(e)
            }
        }
    }

    /// Run a debounced search and apply its outcome to a listing.
    ///
    /// Returns whether the listing changed. A failed search is not an error
    /// here: it clears the grid into its empty state.
    pub async fn search_into(&self, listing: &mut ProductListing, query: &str) -> bool {
        let debouncer = &self.client.search_debouncer;
        let Some(generation) = debouncer.settle().await else {
            return false;
        };

        let result = self.search(query).await;
        if !debouncer.is_current(generation) {
            tracing::debug!(generation, query, "Discarding stale search response");
            return false;
        }

        match result {
            Ok(products) => listing.apply_search(SearchResults {
                generation,
                query: query.to_string(),
                products,
            }),
            Err(e) => {
                tracing::warn!(error = %e, query, "Search failed");
                listing.fail_search(generation)
            }
        }
    }
}
