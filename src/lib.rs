//! # QKart SDK
//!
//! A Rust client for the QKart storefront backend, supporting both native and
//! WASM targets.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Product and cart domain types, cart reconciliation, formatting (always available, WASM-safe)
//! 2. **Session** — Persisted token/username/balance behind a key-value store (memory, file, `localStorage`)
//! 3. **HTTP API** — `QKartHttp`, single-shot JSON calls with status mapping
//! 4. **High-Level Client** — `QKartClient` with nested sub-clients and debounced search
//! 5. **Views** — Render-ready models for the product grid, cart sidebar, header and forms
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use qkart_sdk::prelude::*;
//!
//! let client = QKartClient::builder()
//!     .base_url("http://localhost:8082/api/v1")
//!     .build()?;
//!
//! client.auth().login("crio.do", "learnbydoing").await?;
//! let catalog = client.products().list().await?;
//! let mut cart = CartState::new();
//! client.cart().refresh(&mut cart).await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes and formatting helpers.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, state.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: Session ─────────────────────────────────────────────────────────

/// Session persistence backends.
pub mod session;

/// Authentication: credentials, validation, login/logout.
pub mod auth;

// ── Layer 3: HTTP API ────────────────────────────────────────────────────────

/// HTTP client for the storefront REST endpoints.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// Debounced, generation-tagged search.
#[cfg(feature = "http")]
pub mod search;

/// `QKartClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Layer 5: Views ───────────────────────────────────────────────────────────

/// View models and notifications.
pub mod view;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{AddOrigin, ProductId};

    // Domain types — product
    pub use crate::domain::product::{Product, ProductListing, SearchResults};

    // Domain types — cart
    pub use crate::domain::cart::state::CartState;
    pub use crate::domain::cart::{is_in_cart, reconcile, CartItem, CartLine, ReconciledCart};

    // Errors
    pub use crate::error::{AuthError, CartError, SdkError, StorageError, ValidationError};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // Auth + session
    pub use crate::auth::Credentials;
    pub use crate::session::{KeyValueStore, MemoryStore, Session, SessionStore};
    #[cfg(not(target_arch = "wasm32"))]
    pub use crate::session::FileStore;
    #[cfg(feature = "web-storage")]
    pub use crate::session::LocalStorage;

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{AuthClient, CartClient, ProductsClient, QKartClient, QKartClientBuilder};
    #[cfg(feature = "http")]
    pub use crate::search::SearchDebouncer;

    // Views
    pub use crate::view::{
        CartSidebarView, HeaderAction, HeaderView, LoginForm, Notification, ProductCardView,
        ProductGridView, RegisterForm,
    };
}
