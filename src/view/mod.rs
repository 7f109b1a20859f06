//! Render-ready models for the storefront screens.
//!
//! Nothing here draws pixels. Each view is a plain struct built from the
//! app-owned state ([`ProductListing`](crate::domain::product::ProductListing),
//! [`CartState`](crate::domain::cart::CartState), the session), with prices
//! already formatted, so any UI toolkit can render it directly.

pub mod cart;
pub mod catalog;
pub mod forms;
pub mod header;

pub use cart::{CartItemView, CartSidebarView};
pub use catalog::{ProductCardView, ProductGridView};
pub use forms::{LoginForm, RegisterForm};
pub use header::{HeaderAction, HeaderView};

use serde::Serialize;

/// Severity of a transient notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Success,
    Error,
    Warning,
}

/// A transient message for the user (a toast/snackbar).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub variant: Variant,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            variant: Variant::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            variant: Variant::Error,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            variant: Variant::Warning,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Notification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}
