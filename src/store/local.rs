//! # Local Filesystem Backend

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use super::backend::StoreBackend;
use super::errors::{StoreError, StoreResult};

/// Stores each collection as `<root>/<collection>.json`
#[derive(Debug, Clone)]
pub struct LocalBackend {
    root: PathBuf,
}

impl LocalBackend {
    /// Create a new local backend rooted at the data directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// File path backing a collection
    pub fn collection_path(&self, collection: &str) -> StoreResult<PathBuf> {
        if collection.is_empty()
            || collection.contains(|c: char| c == '/' || c == '\\')
            || collection.starts_with('.')
        {
            return Err(StoreError::InvalidName(collection.to_string()));
        }
        Ok(self.root.join(format!("{}.json", collection)))
    }
}

impl StoreBackend for LocalBackend {
    fn load(&self, collection: &str) -> StoreResult<Option<Vec<u8>>> {
        let path = self.collection_path(collection)?;

        match fs::read(&path) {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::io(collection, e)),
        }
    }

    fn save(&self, collection: &str, data: &[u8]) -> StoreResult<()> {
        let path = self.collection_path(collection)?;

        fs::create_dir_all(&self.root).map_err(|e| StoreError::io(collection, e))?;
        fs::write(&path, data).map_err(|e| StoreError::io(collection, e))
    }
}
