//! Filesystem-backed key-value store (native only)
//!
//! Directory structure:
//! ~/.funclab/
//!   config.yaml
//!   funclab.log
//!   store/
//!     funclab_custom_problems.json
//!     funclab_saved_simulations.json

use std::fs;
use std::path::{Path, PathBuf};

use funclab_core::storage::{KeyValueStore, StorageError};

/// Stores each key as `<root>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `root`. The directory is created on first write.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Store inside the given data directory (`<data_dir>/store`).
    pub fn in_data_dir(data_dir: &Path) -> Self {
        Self::new(data_dir.join("store"))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", sanitize_key(key)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }

        fs::read_to_string(&path)
            .map(Some)
            .map_err(|e| StorageError::Io(format!("Failed to read {}: {}", path.display(), e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.root)
            .map_err(|e| StorageError::Io(format!("Failed to create store directory: {}", e)))?;

        let path = self.key_path(key);
        fs::write(&path, value)
            .map_err(|e| StorageError::Io(format!("Failed to write {}: {}", path.display(), e)))
    }
}

/// Keep keys safe to use as file names
fn sanitize_key(key: &str) -> String {
    key.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}
