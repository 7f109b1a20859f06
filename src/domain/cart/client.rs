//! Cart sub-client — fetch, add, quantity controls.

use crate::client::QKartClient;
use crate::domain::cart::convert::into_lines;
use crate::domain::cart::wire::CartLineRequest;
use crate::domain::cart::{plan_add, CartLine, CartState, ReconciledCart};
use crate::domain::product::Product;
use crate::error::{AuthError, SdkError};
use crate::shared::{AddOrigin, ProductId};

/// Sub-client for cart operations. Every call needs a persisted session.
pub struct Cart<'a> {
    pub(crate) client: &'a QKartClient,
}

impl<'a> Cart<'a> {
    /// Fetch the server cart for the current session.
    ///
    /// Anonymous sessions fail with [`AuthError::NotAuthenticated`] without
    /// a request being made.
    pub async fn fetch(&self) -> Result<Vec<CartLine>, SdkError> {
        let session = self
            .client
            .sessions
            .load()?
            .ok_or(AuthError::NotAuthenticated)?;
        let resp = self.client.http.get_cart(session.token()).await?;
        Ok(into_lines(resp))
    }

    /// Fetch the server cart into `state`, replacing its lines.
    pub async fn refresh(&self, state: &mut CartState) -> Result<(), SdkError> {
        let lines = self.fetch().await?;
        state.replace(lines);
        Ok(())
    }

    /// Set the quantity of one product, returning the server's new line set.
    ///
    /// No client-side rules apply here; see [`add`](Self::add) for those.
    pub async fn upsert_line(
        &self,
        token: &str,
        product_id: &ProductId,
        quantity: u32,
    ) -> Result<Vec<CartLine>, SdkError> {
        let request = CartLineRequest {
            product_id: product_id.clone(),
            qty: quantity,
        };
        let resp = self.client.http.post_cart(token, &request).await?;
        Ok(into_lines(resp))
    }

    /// Add-to-cart as triggered from the UI.
    ///
    /// Rejections ([`CartError`](crate::error::CartError)) happen before any
    /// request and leave `state` untouched. On success the local lines are
    /// replaced by the server response and the reconciled cart is returned.
    pub async fn add(
        &self,
        state: &mut CartState,
        catalog: &[Product],
        product_id: &ProductId,
        quantity: u32,
        origin: AddOrigin,
    ) -> Result<ReconciledCart, SdkError> {
        let session = self.client.sessions.load()?;
        let plan = plan_add(session.as_ref(), state.lines(), product_id, quantity, origin)?;

        let resp = self.client.http.post_cart(plan.token, &plan.request).await?;
        state.replace(into_lines(resp));
        tracing::debug!(%product_id, quantity, lines = state.lines().len(), "Cart updated");
        Ok(state.reconcile(catalog))
    }

    /// Cart sidebar "+" button.
    pub async fn increment(
        &self,
        state: &mut CartState,
        catalog: &[Product],
        product_id: &ProductId,
    ) -> Result<ReconciledCart, SdkError> {
        let quantity = state.quantity_of(product_id).saturating_add(1);
        self.add(state, catalog, product_id, quantity, AddOrigin::CartControl)
            .await
    }

    /// Cart sidebar "-" button. Reaching zero removes the line server-side.
    pub async fn decrement(
        &self,
        state: &mut CartState,
        catalog: &[Product],
        product_id: &ProductId,
    ) -> Result<ReconciledCart, SdkError> {
        let quantity = state.quantity_of(product_id).saturating_sub(1);
        self.add(state, catalog, product_id, quantity, AddOrigin::CartControl)
            .await
    }
}
