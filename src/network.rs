//! Network URL constants for the QKart SDK.

/// Default REST API base URL (the backend's local development port).
pub const DEFAULT_API_URL: &str = "http://localhost:8082/api/v1";

/// Environment variable read by `QKartClientBuilder::from_env`.
pub const API_URL_ENV: &str = "QKART_API_URL";
