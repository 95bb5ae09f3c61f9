//! Storage port for the catalogs.
//!
//! The engine never touches a filesystem or browser API directly. Catalogs are
//! handed a [`KeyValueStore`] that maps string keys to JSON blobs; the app
//! crate provides filesystem and LocalStorage backends, and [`MemoryStore`]
//! covers tests and storage-less sessions.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde::Serialize;
use serde::de::DeserializeOwned;

pub use crate::error::StorageError;

/// Key holding the ordered list of custom problems
pub const PROBLEMS_KEY: &str = "funclab_custom_problems";
/// Key holding the ordered list of saved simulator snapshots
pub const SIMULATIONS_KEY: &str = "funclab_saved_simulations";

/// Synchronous key → JSON blob store.
///
/// No transactional guarantees; the last `set` for a key wins.
pub trait KeyValueStore {
    /// Fetch the blob stored under `key`, `None` if nothing was ever stored.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the blob stored under `key`.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

/// In-memory store. Clones share the same underlying map, so a test can keep
/// a handle and inspect what a catalog persisted.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw blob for `key`, bypassing the trait's error type.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.raw(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Load a JSON list from `key`.
///
/// Missing keys, read failures and corrupt data all yield an empty list; the
/// problem is logged and never propagated.
pub fn load_list<T: DeserializeOwned>(store: &impl KeyValueStore, key: &str) -> Vec<T> {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            tracing::warn!(key, error = %e, "Failed to read stored list, starting empty");
            return Vec::new();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(list) => list,
        Err(e) => {
            tracing::warn!(key, error = %e, "Stored list is corrupt, starting empty");
            Vec::new()
        }
    }
}

/// Serialize `items` as a JSON array under `key`.
pub fn save_list<T: Serialize>(
    store: &impl KeyValueStore,
    key: &str,
    items: &[T],
) -> Result<(), StorageError> {
    let json = serde_json::to_string(items)
        .map_err(|e| StorageError::Serialize(format!("Failed to serialize {key}: {e}")))?;
    store.set(key, &json)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingStore;

    impl KeyValueStore for FailingStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::NotAvailable("disabled".to_string()))
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::NotAvailable("disabled".to_string()))
        }
    }

    #[test]
    fn test_round_trip_list() {
        let store = MemoryStore::new();
        save_list(&store, "numbers", &[1, 2, 3]).unwrap();
        assert_eq!(load_list::<i32>(&store, "numbers"), vec![1, 2, 3]);
    }

    #[test]
    fn test_missing_key_is_empty() {
        let store = MemoryStore::new();
        assert!(load_list::<i32>(&store, "nothing").is_empty());
    }

    #[test]
    fn test_corrupt_data_is_empty() {
        let store = MemoryStore::new();
        store.set("numbers", "{not json").unwrap();
        assert!(load_list::<i32>(&store, "numbers").is_empty());

        store.set("numbers", r#"{"an":"object"}"#).unwrap();
        assert!(load_list::<i32>(&store, "numbers").is_empty());
    }

    #[test]
    fn test_read_failure_is_empty() {
        assert!(load_list::<i32>(&FailingStore, "numbers").is_empty());
        assert!(save_list(&FailingStore, "numbers", &[1]).is_err());
    }

    #[test]
    fn test_clones_share_entries() {
        let store = MemoryStore::new();
        let handle = store.clone();
        store.set("k", "v").unwrap();
        assert_eq!(handle.raw("k").as_deref(), Some("v"));
    }
}
