//! Cart lines, add-to-cart rules, reconciliation with the catalog.
//!
//! The server owns the cart. The client keeps the last line set the server
//! returned and replaces it wholesale after every successful write; it never
//! merges locally.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod state;
pub mod wire;

use crate::domain::product::{self, Product};
use crate::error::CartError;
use crate::session::Session;
use crate::shared::{AddOrigin, ProductId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub use state::CartState;

// ─── CartLine ────────────────────────────────────────────────────────────────

/// Server-tracked quantity of one product in the user's cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: ProductId,
    pub quantity: u32,
}

impl CartLine {
    pub fn new(product_id: impl Into<ProductId>, quantity: u32) -> Self {
        Self {
            product_id: product_id.into(),
            quantity,
        }
    }
}

/// Whether any line refers to `product_id`.
pub fn is_in_cart(lines: &[CartLine], product_id: &ProductId) -> bool {
    lines.iter().any(|line| &line.product_id == product_id)
}

// ─── Add-to-cart rules ───────────────────────────────────────────────────────

/// An add-to-cart action that passed the client-side rules and should be sent.
#[derive(Debug, Clone, PartialEq)]
pub struct AddPlan<'a> {
    pub token: &'a str,
    pub request: wire::CartLineRequest,
}

/// Decide what an add-to-cart action should do, without touching the network.
///
/// - No session: rejected as [`CartError::LoginRequired`], whatever the origin,
///   since there is no token to send.
/// - Catalog button for a product already in the cart: [`CartError::Duplicate`].
/// - Anything else becomes an upsert of `quantity` for `product_id`.
pub fn plan_add<'a>(
    session: Option<&'a Session>,
    lines: &[CartLine],
    product_id: &ProductId,
    quantity: u32,
    origin: AddOrigin,
) -> Result<AddPlan<'a>, CartError> {
    let Some(session) = session else {
        return Err(CartError::LoginRequired);
    };

    if origin.is_catalog_button() && is_in_cart(lines, product_id) {
        return Err(CartError::Duplicate);
    }

    Ok(AddPlan {
        token: session.token(),
        request: wire::CartLineRequest {
            product_id: product_id.clone(),
            qty: quantity,
        },
    })
}

// ─── Reconciliation ──────────────────────────────────────────────────────────

/// One cart line joined with its catalog product.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub product: Product,
    pub quantity: u32,
    pub line_total: Decimal,
}

/// The cart as the sidebar shows it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReconciledCart {
    pub items: Vec<CartItem>,
    pub total: Decimal,
    pub item_count: u32,
}

impl ReconciledCart {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Join server lines with the catalog.
///
/// Lines whose product is not in the catalog are skipped: catalog and cart
/// may diverge, and that is tolerated rather than reported.
pub fn reconcile(lines: &[CartLine], catalog: &[Product]) -> ReconciledCart {
    let mut cart = ReconciledCart::default();
    for line in lines {
        let Some(product) = product::find(catalog, &line.product_id) else {
            tracing::debug!(product_id = %line.product_id, "Cart line not in catalog");
            continue;
        };
        let line_total = product.cost * Decimal::from(line.quantity);
        cart.total += line_total;
        cart.item_count = cart.item_count.saturating_add(line.quantity);
        cart.items.push(CartItem {
            product: product.clone(),
            quantity: line.quantity,
            line_total,
        });
    }
    cart
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, cost: i64) -> Product {
        Product {
            id: ProductId::from(id),
            name: format!("Product {id}"),
            category: "Sports".to_string(),
            cost: Decimal::from(cost),
            rating: 5,
            image: String::new(),
        }
    }

    fn session() -> Session {
        Session::new("testtoken", "criodo", Decimal::from(5000))
    }

    #[test]
    fn test_is_in_cart() {
        let lines = vec![CartLine::new("a", 1), CartLine::new("b", 2)];
        assert!(is_in_cart(&lines, &ProductId::from("b")));
        assert!(!is_in_cart(&lines, &ProductId::from("c")));
        assert!(!is_in_cart(&[], &ProductId::from("a")));
    }

    #[test]
    fn test_is_in_cart_is_exact_match() {
        let lines = vec![CartLine::new("abc", 1)];
        assert!(!is_in_cart(&lines, &ProductId::from("ab")));
        assert!(!is_in_cart(&lines, &ProductId::from("ABC")));
    }

    #[test]
    fn test_plan_add_anonymous_requires_login() {
        let err = plan_add(None, &[], &ProductId::from("a"), 1, AddOrigin::CatalogButton)
            .unwrap_err();
        assert_eq!(err, CartError::LoginRequired);
        let err = plan_add(None, &[], &ProductId::from("a"), 1, AddOrigin::CartControl)
            .unwrap_err();
        assert_eq!(err, CartError::LoginRequired);
    }

    #[test]
    fn test_plan_add_duplicate_from_catalog() {
        let s = session();
        let lines = vec![CartLine::new("a", 1)];
        let err = plan_add(Some(&s), &lines, &ProductId::from("a"), 1, AddOrigin::CatalogButton)
            .unwrap_err();
        assert_eq!(err, CartError::Duplicate);
    }

    #[test]
    fn test_plan_add_cart_control_updates_existing() {
        let s = session();
        let lines = vec![CartLine::new("a", 1)];
        let plan = plan_add(Some(&s), &lines, &ProductId::from("a"), 2, AddOrigin::CartControl)
            .unwrap();
        assert_eq!(plan.token, "testtoken");
        assert_eq!(plan.request.product_id.as_str(), "a");
        assert_eq!(plan.request.qty, 2);
    }

    #[test]
    fn test_plan_add_new_product_from_catalog() {
        let s = session();
        let lines = vec![CartLine::new("a", 1)];
        let plan = plan_add(Some(&s), &lines, &ProductId::from("b"), 1, AddOrigin::CatalogButton)
            .unwrap();
        assert_eq!(plan.request.product_id.as_str(), "b");
    }

    #[test]
    fn test_reconcile_totals() {
        let catalog = vec![product("a", 100), product("b", 250)];
        let lines = vec![CartLine::new("a", 2), CartLine::new("b", 1)];
        let cart = reconcile(&lines, &catalog);
        assert_eq!(cart.items.len(), 2);
        assert_eq!(cart.items[0].line_total, Decimal::from(200));
        assert_eq!(cart.total, Decimal::from(450));
        assert_eq!(cart.item_count, 3);
    }

    #[test]
    fn test_reconcile_skips_unknown_products() {
        let catalog = vec![product("a", 100)];
        let lines = vec![CartLine::new("a", 1), CartLine::new("gone", 5)];
        let cart = reconcile(&lines, &catalog);
        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.total, Decimal::from(100));
        assert_eq!(cart.item_count, 1);
    }

    #[test]
    fn test_reconcile_item_count_saturates() {
        let catalog = vec![product("a", 1), product("b", 1)];
        let lines = vec![CartLine::new("a", u32::MAX), CartLine::new("b", 2)];
        let cart = reconcile(&lines, &catalog);
        assert_eq!(cart.item_count, u32::MAX);
        assert_eq!(cart.total, Decimal::from(u32::MAX) + Decimal::from(2));
    }

    #[test]
    fn test_reconcile_empty() {
        let cart = reconcile(&[], &[product("a", 100)]);
        assert!(cart.is_empty());
        assert_eq!(cart.total, Decimal::ZERO);
    }
}
