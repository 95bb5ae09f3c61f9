//! Web storage implementation using browser LocalStorage.

use funclab_core::storage::{KeyValueStore, StorageError};
use gloo_storage::{LocalStorage, Storage as GlooStorage};

/// LocalStorage-backed key-value store.
///
/// Values are written as-is; the catalogs already hand over JSON text, which
/// is also what `gloo_storage` would have written for the same data.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebStorage;

impl WebStorage {
    pub fn new() -> Self {
        Self
    }
}

impl KeyValueStore for WebStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        LocalStorage::raw()
            .get_item(key)
            .map_err(|e| StorageError::NotAvailable(format!("Failed to read {key}: {e:?}")))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|e| StorageError::Io(format!("Failed to write {key}: {e:?}")))
    }
}
