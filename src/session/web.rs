//! Browser `localStorage` backend (`web-storage` feature).
//!
//! Holds no JS handles: the storage object is looked up on every call, so
//! the type stays `Send + Sync` like the other backends.

use super::KeyValueStore;
use crate::error::StorageError;

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }

    /// Whether `window.localStorage` is reachable in this context.
    pub fn is_available() -> bool {
        storage().is_ok()
    }
}

fn storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?
        .local_storage()
        .map_err(|e| StorageError::Unavailable(format!("{e:?}")))?
        .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_string()))
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        storage()?
            .get_item(key)
            .map_err(|e| StorageError::Unavailable(format!("{e:?}")))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Unavailable(format!("{e:?}")))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        storage()?
            .remove_item(key)
            .map_err(|e| StorageError::Unavailable(format!("{e:?}")))
    }
}
