//! HTTP client layer — `QKartHttp`, one method per backend endpoint.

pub mod client;

pub use client::QKartHttp;
