//! The logged-in user's credentials, persisted as plain strings.
//!
//! The session lives in a key-value store under three keys (`token`,
//! `username`, `balance`), exactly like the browser storefront keeps it in
//! `localStorage`. Backends:
//!
//! - [`MemoryStore`] — process-local, used by tests and short-lived tools.
//! - [`FileStore`] — a JSON object on disk (native only).
//! - [`LocalStorage`] — the browser's `window.localStorage` (`web-storage` feature).
//!
//! A session has no expiry on the client. It exists from a successful login
//! until [`SessionStore::clear`] is called.

pub mod memory;

#[cfg(not(target_arch = "wasm32"))]
pub mod file;

#[cfg(feature = "web-storage")]
pub mod web;

pub use memory::MemoryStore;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStore;

#[cfg(feature = "web-storage")]
pub use web::LocalStorage;

use std::sync::Arc;

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::error::StorageError;

/// Storage key for the bearer token.
pub const TOKEN_KEY: &str = "token";
/// Storage key for the display username.
pub const USERNAME_KEY: &str = "username";
/// Storage key for the wallet balance.
pub const BALANCE_KEY: &str = "balance";

// ─── Backend trait ───────────────────────────────────────────────────────────

/// A string-to-string persistent store.
///
/// Mirrors the browser `Storage` API. Implementations must tolerate
/// removing keys that do not exist.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

// ─── Session ─────────────────────────────────────────────────────────────────

/// Client-held credentials and display state of an authenticated user.
#[derive(Clone, PartialEq)]
pub struct Session {
    token: String,
    pub username: String,
    pub balance: Decimal,
}

impl Session {
    pub fn new(token: impl Into<String>, username: impl Into<String>, balance: Decimal) -> Self {
        Self {
            token: token.into(),
            username: username.into(),
            balance,
        }
    }

    /// Bearer token for authenticated cart calls.
    pub fn token(&self) -> &str {
        &self.token
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("token", &"<redacted>")
            .field("username", &self.username)
            .field("balance", &self.balance)
            .finish()
    }
}

// ─── SessionStore ────────────────────────────────────────────────────────────

/// Reads and writes the [`Session`] through a [`KeyValueStore`] backend.
#[derive(Clone)]
pub struct SessionStore {
    backend: Arc<dyn KeyValueStore>,
}

impl SessionStore {
    pub fn new(backend: impl KeyValueStore + 'static) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    /// An ephemeral in-memory store.
    pub fn memory() -> Self {
        Self::new(MemoryStore::new())
    }

    /// Load the persisted session.
    ///
    /// Returns `None` (anonymous) unless both token and username are present.
    /// A missing or unparseable balance reads as zero.
    pub fn load(&self) -> Result<Option<Session>, StorageError> {
        let token = self.backend.get(TOKEN_KEY)?;
        let username = self.backend.get(USERNAME_KEY)?;
        let (Some(token), Some(username)) = (token, username) else {
            return Ok(None);
        };

        let balance = match self.backend.get(BALANCE_KEY)? {
            Some(raw) => Decimal::from_str(raw.trim()).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Ignoring unparseable persisted balance");
                Decimal::ZERO
            }),
            None => Decimal::ZERO,
        };

        Ok(Some(Session {
            token,
            username,
            balance,
        }))
    }

    /// Persist all session fields.
    pub fn persist(&self, session: &Session) -> Result<(), StorageError> {
        self.backend.set(USERNAME_KEY, &session.username)?;
        self.backend.set(TOKEN_KEY, &session.token)?;
        self.backend
            .set(BALANCE_KEY, &session.balance.normalize().to_string())?;
        tracing::debug!(username = %session.username, "Session persisted");
        Ok(())
    }

    /// Remove every session field. Anything else in the backend is left alone.
    pub fn clear(&self) -> Result<(), StorageError> {
        for key in [TOKEN_KEY, USERNAME_KEY, BALANCE_KEY] {
            self.backend.remove(key)?;
        }
        tracing::debug!("Session cleared");
        Ok(())
    }

    /// Whether a session is currently persisted.
    pub fn is_authenticated(&self) -> bool {
        matches!(self.load(), Ok(Some(_)))
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::memory()
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_empty_is_anonymous() {
        let store = SessionStore::memory();
        assert!(store.load().unwrap().is_none());
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_persist_then_load() {
        let store = SessionStore::memory();
        store
            .persist(&Session::new("testtoken", "criodo", Decimal::from(5000)))
            .unwrap();
        let session = store.load().unwrap().unwrap();
        assert_eq!(session.token(), "testtoken");
        assert_eq!(session.username, "criodo");
        assert_eq!(session.balance, Decimal::from(5000));
    }

    #[test]
    fn test_balance_is_stored_as_plain_string() {
        let backend = MemoryStore::new();
        let store = SessionStore::new(backend.clone());
        store
            .persist(&Session::new("t", "criodo", Decimal::new(50000, 1)))
            .unwrap();
        assert_eq!(backend.get(BALANCE_KEY).unwrap().as_deref(), Some("5000"));
    }

    #[test]
    fn test_clear_removes_all_fields() {
        let backend = MemoryStore::new();
        let store = SessionStore::new(backend.clone());
        store
            .persist(&Session::new("t", "criodo", Decimal::ONE))
            .unwrap();
        backend.set("theme", "dark").unwrap();

        store.clear().unwrap();

        for key in [TOKEN_KEY, USERNAME_KEY, BALANCE_KEY] {
            assert!(backend.get(key).unwrap().is_none(), "{key} should be gone");
        }
        assert_eq!(backend.get("theme").unwrap().as_deref(), Some("dark"));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_token_without_username_is_anonymous() {
        let backend = MemoryStore::new();
        backend.set(TOKEN_KEY, "t").unwrap();
        let store = SessionStore::new(backend);
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_bad_balance_reads_as_zero() {
        let backend = MemoryStore::new();
        backend.set(TOKEN_KEY, "t").unwrap();
        backend.set(USERNAME_KEY, "criodo").unwrap();
        backend.set(BALANCE_KEY, "lots").unwrap();
        let session = SessionStore::new(backend).load().unwrap().unwrap();
        assert_eq!(session.balance, Decimal::ZERO);
    }

    #[test]
    fn test_debug_redacts_token() {
        let session = Session::new("secret-token", "criodo", Decimal::ZERO);
        let printed = format!("{session:?}");
        assert!(!printed.contains("secret-token"));
        assert!(printed.contains("criodo"));
    }
}
