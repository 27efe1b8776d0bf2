//! # Storage Backend Trait

use super::errors::StoreResult;

/// Raw persistence for named collections.
pub trait StoreBackend: Send + Sync + std::fmt::Debug {
    /// Bytes of a collection, or `None` if it has never been written
    fn load(&self, collection: &str) -> StoreResult<Option<Vec<u8>>>;

    /// Replace a collection's bytes
    fn save(&self, collection: &str, data: &[u8]) -> StoreResult<()>;
}
