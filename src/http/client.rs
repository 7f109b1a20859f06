//! Low-level HTTP client — `QKartHttp`.
//!
//! One method per API endpoint. Returns wire types (conversion to domain types
//! happens in the sub-clients). Every call is single-shot: no retries, and no
//! timeout beyond the transport default.

use crate::auth::{Credentials, LoginResponse, RegisterResponse};
use crate::domain::cart::wire::{CartLineRequest, CartLineResponse};
use crate::domain::product::wire::ProductResponse;
use crate::error::HttpError;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Low-level HTTP client for the QKart REST API.
#[derive(Clone)]
pub struct QKartHttp {
    base_url: String,
    client: Client,
}

impl QKartHttp {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ── Auth ─────────────────────────────────────────────────────────────

    pub async fn login(&self, body: &Credentials) -> Result<LoginResponse, HttpError> {
        let url = format!("{}/auth/login", self.base_url);
        self.post(&url, body, None).await
    }

    pub async fn register(&self, body: &Credentials) -> Result<RegisterResponse, HttpError> {
        let url = format!("{}/auth/register", self.base_url);
        self.post(&url, body, None).await
    }

    // ── Products ─────────────────────────────────────────────────────────

    pub async fn get_products(&self) -> Result<Vec<ProductResponse>, HttpError> {
        let url = format!("{}/products", self.base_url);
        self.get(&url, None).await
    }

    /// Search the catalog. The backend answers 404 when nothing matches;
    /// that is reported as an empty list.
    pub async fn search_products(&self, query: &str) -> Result<Vec<ProductResponse>, HttpError> {
        let url = format!(
            "{}/products/search?value={}",
            self.base_url,
            urlencoding::encode(query)
        );
        match self.get(&url, None).await {
            Err(HttpError::NotFound(_)) => Ok(Vec::new()),
            other => other,
        }
    }

    // ── Cart ─────────────────────────────────────────────────────────────

    pub async fn get_cart(&self, token: &str) -> Result<Vec<CartLineResponse>, HttpError> {
        let url = format!("{}/cart", self.base_url);
        self.get(&url, Some(token)).await
    }

    pub async fn post_cart(
        &self,
        token: &str,
        body: &CartLineRequest,
    ) -> Result<Vec<CartLineResponse>, HttpError> {
        let url = format!("{}/cart", self.base_url);
        self.post(&url, body, Some(token)).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        url: &str,
        token: Option<&str>,
    ) -> Result<T, HttpError> {
        self.do_request(reqwest::Method::GET, url, None::<&()>, token)
            .await
    }

    pub(crate) async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        url: &str,
        body: &B,
        token: Option<&str>,
    ) -> Result<T, HttpError> {
        self.do_request(reqwest::Method::POST, url, Some(body), token)
            .await
    }

    async fn do_request<T: DeserializeOwned, B: Serialize>(
        &self,
        method: reqwest::Method,
        url: &str,
        body: Option<&B>,
        token: Option<&str>,
    ) -> Result<T, HttpError> {
        tracing::debug!(%method, url, authed = token.is_some(), "Sending request");

        let mut req = self.client.request(method, url);
        if let Some(token) = token {
            req = req.bearer_auth(token);
        }
        if let Some(b) = body {
            req = req.json(b);
        }

        let resp = req.send().await?;
        let status = resp.status();

        if status.is_success() {
            let parsed = resp.json::<T>().await?;
            return Ok(parsed);
        }

        let status_code = status.as_u16();
        let body_text = resp.text().await.unwrap_or_default();
        tracing::debug!(status = status_code, url, "Request rejected");

        match status_code {
            401 => Err(HttpError::Unauthorized(error_message(&body_text))),
            404 => Err(HttpError::NotFound(error_message(&body_text))),
            400..=499 => Err(HttpError::BadRequest(error_message(&body_text))),
            _ => Err(HttpError::ServerError {
                status: status_code,
                body: body_text,
            }),
        }
    }
}

/// Pull `message` out of a JSON error body, falling back to the raw text.
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message")?.as_str().map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string())
}
