//! JSON-file key-value backend for native clients.
//!
//! The whole store is one flat JSON object of strings, rewritten on every
//! change. A missing file is an empty store.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::KeyValueStore;
use crate::error::StorageError;

#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process.
    lock: Mutex<()>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) if raw.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn write_all(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let raw = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }

    fn modify(
        &self,
        f: impl FnOnce(&mut BTreeMap<String, String>),
    ) -> Result<(), StorageError> {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        let mut entries = self.read_all()?;
        f(&mut entries);
        self.write_all(&entries)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        Ok(self.read_all()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.modify(|entries| {
            entries.insert(key.to_string(), value.to_string());
        })
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.modify(|entries| {
            entries.remove(key);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("qkart-sdk-test-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn test_missing_file_is_empty() {
        let store = FileStore::new(temp_path("missing.json"));
        assert!(store.get("token").unwrap().is_none());
    }

    #[test]
    fn test_values_survive_a_new_handle() {
        let path = temp_path("persist.json");
        let _ = fs::remove_file(&path);

        FileStore::new(&path).set("username", "criodo").unwrap();
        let reopened = FileStore::new(&path);
        assert_eq!(reopened.get("username").unwrap().as_deref(), Some("criodo"));

        reopened.remove("username").unwrap();
        assert!(FileStore::new(&path).get("username").unwrap().is_none());
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let path = temp_path("corrupt.json");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "not json").unwrap();
        let err = FileStore::new(&path).get("token").unwrap_err();
        assert!(matches!(err, StorageError::Corrupt(_)));
        let _ = fs::remove_file(&path);
    }
}
