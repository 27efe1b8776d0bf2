//! File-backed record store
//!
//! Each collection is one JSON array persisted as one blob by a
//! [`StoreBackend`]. [`RecordStore`] implements whole-collection
//! read/modify/write operations on top of it.
//!
//! # Semantics
//!
//! - Reads never fail: a missing, unreadable or malformed collection is
//!   logged and treated as empty
//! - Writes replace the entire collection and report failures
//! - There is no locking across a read/modify/write cycle; concurrent
//!   writers to one collection race and the last write wins

mod backend;
mod errors;
mod local;
mod memory;
mod record_store;

pub use backend::StoreBackend;
pub use errors::{StoreError, StoreResult};
pub use local::LocalBackend;
pub use memory::MemoryBackend;
pub use record_store::{Record, RecordStore};
