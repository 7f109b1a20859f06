//! High-level client — `QKartClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, shared state, and accessor methods.

use crate::auth::client::Auth;
use crate::domain::cart::client::Cart;
use crate::domain::product::client::Products;
use crate::domain::product::Product;
use crate::error::SdkError;
use crate::http::QKartHttp;
use crate::search::{SearchDebouncer, DEFAULT_QUIET_PERIOD};
use crate::session::{Session, SessionStore};

use async_lock::RwLock;
use std::sync::Arc;
use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::auth::client::Auth as AuthClient;
pub use crate::domain::cart::client::Cart as CartClient;
pub use crate::domain::product::client::Products as ProductsClient;

/// The primary entry point for the QKart SDK.
///
/// Provides nested sub-client accessors for each domain:
/// `client.auth()`, `client.products()`, `client.cart()`.
/// Clones share the session store, the last fetched catalog and the search
/// generation counter.
#[derive(Clone)]
pub struct QKartClient {
    pub(crate) http: QKartHttp,
    pub(crate) sessions: SessionStore,
    /// The last fetched full catalog.
    pub(crate) catalog: Arc<RwLock<Vec<Product>>>,
    pub(crate) search_debouncer: SearchDebouncer,
}

impl QKartClient {
    pub fn builder() -> QKartClientBuilder {
        QKartClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn auth(&self) -> Auth<'_> {
        Auth { client: self }
    }

    pub fn products(&self) -> Products<'_> {
        Products { client: self }
    }

    pub fn cart(&self) -> Cart<'_> {
        Cart { client: self }
    }

    // ── Shared state ─────────────────────────────────────────────────────

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    /// The persisted session, if any. Shorthand for `auth().session()`.
    pub fn session(&self) -> Result<Option<Session>, SdkError> {
        Ok(self.sessions.load()?)
    }

    pub fn session_store(&self) -> &SessionStore {
        &self.sessions
    }

    pub fn search_debouncer(&self) -> &SearchDebouncer {
        &self.search_debouncer
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct QKartClientBuilder {
    base_url: String,
    session_store: Option<SessionStore>,
    search_quiet_period: Duration,
}

impl Default for QKartClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            session_store: None,
            search_quiet_period: DEFAULT_QUIET_PERIOD,
        }
    }
}

impl QKartClientBuilder {
    /// Start from defaults, taking the base URL from `QKART_API_URL` when set.
    pub fn from_env() -> Self {
        let builder = Self::default();
        match std::env::var(crate::network::API_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => {
                tracing::debug!(url = %url, "Using API URL from environment");
                builder.base_url(url.trim())
            }
            _ => builder,
        }
    }

    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Where the session is persisted. Defaults to an in-memory store.
    pub fn session_store(mut self, store: SessionStore) -> Self {
        self.session_store = Some(store);
        self
    }

    /// How long search input must pause before a search is sent.
    pub fn search_quiet_period(mut self, quiet_period: Duration) -> Self {
        self.search_quiet_period = quiet_period;
        self
    }

    pub fn build(self) -> Result<QKartClient, SdkError> {
        let base_url = self.base_url.trim();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(SdkError::Other(format!(
                "Base URL must start with http:// or https://, got {base_url:?}"
            )));
        }

        Ok(QKartClient {
            http: QKartHttp::new(base_url),
            sessions: self.session_store.unwrap_or_default(),
            catalog: Arc::new(RwLock::new(Vec::new())),
            search_debouncer: SearchDebouncer::new(self.search_quiet_period),
        })
    }
}
