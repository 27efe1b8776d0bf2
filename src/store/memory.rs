//! # In-Memory Backend

use std::collections::HashMap;
use std::sync::RwLock;

use super::backend::StoreBackend;
use super::errors::{StoreError, StoreResult};

/// Keeps collections in a map. Used by tests and ephemeral runs.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    collections: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a collection with raw bytes
    pub fn with_collection(self, collection: &str, data: impl Into<Vec<u8>>) -> Self {
        if let Ok(mut map) = self.collections.write() {
            map.insert(collection.to_string(), data.into());
        }
        self
    }

    /// Raw bytes currently stored for a collection
    pub fn raw(&self, collection: &str) -> Option<Vec<u8>> {
        self.collections
            .read()
            .ok()
            .and_then(|map| map.get(collection).cloned())
    }
}

impl StoreBackend for MemoryBackend {
    fn load(&self, collection: &str) -> StoreResult<Option<Vec<u8>>> {
        let map = self
            .collections
            .read()
            .map_err(|_| StoreError::Backend("lock poisoned".into()))?;
        Ok(map.get(collection).cloned())
    }

    fn save(&self, collection: &str, data: &[u8]) -> StoreResult<()> {
        let mut map = self
            .collections
            .write()
            .map_err(|_| StoreError::Backend("lock poisoned".into()))?;
        map.insert(collection.to_string(), data.to_vec());
        Ok(())
    }
}
