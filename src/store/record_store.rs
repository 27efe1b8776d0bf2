//! Whole-collection operations on JSON records.

use std::path::PathBuf;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};
use tracing::error;

use super::backend::StoreBackend;
use super::errors::{StoreError, StoreResult};
use super::local::LocalBackend;
use super::memory::MemoryBackend;

/// A typed record that lives in its own collection.
pub trait Record: Serialize + DeserializeOwned {
    /// Collection (file) name
    const COLLECTION: &'static str;
}

/// Read/modify/write access to collections of JSON records.
///
/// Cloning is cheap; clones share the backend.
#[derive(Debug, Clone)]
pub struct RecordStore {
    backend: Arc<dyn StoreBackend>,
}

impl RecordStore {
    pub fn new(backend: impl StoreBackend + 'static) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    pub fn from_backend(backend: Arc<dyn StoreBackend>) -> Self {
        Self { backend }
    }

    /// Store backed by `<data_dir>/<collection>.json` files
    pub fn local(data_dir: impl Into<PathBuf>) -> Self {
        Self::new(LocalBackend::new(data_dir))
    }

    pub fn in_memory() -> Self {
        Self::new(MemoryBackend::new())
    }

    /// All records of a collection.
    ///
    /// Returns an empty list if the collection is absent or cannot be
    /// read or parsed. The failure is logged, never returned.
    pub fn read_all(&self, collection: &str) -> Vec<Value> {
        match self.try_read_all(collection) {
            Ok(records) => records,
            Err(e) => {
                error!(collection, error = %e, "failed to read collection, treating as empty");
                Vec::new()
            }
        }
    }

    fn try_read_all(&self, collection: &str) -> StoreResult<Vec<Value>> {
        let Some(raw) = self.backend.load(collection)? else {
            return Ok(Vec::new());
        };

        let parsed: Value =
            serde_json::from_slice(&raw).map_err(|source| StoreError::Malformed {
                collection: collection.to_string(),
                source,
            })?;

        match parsed {
            Value::Array(records) => Ok(records),
            _ => Err(StoreError::NotAnArray(collection.to_string())),
        }
    }

    /// Replaces the whole collection
    pub fn write_all(&self, collection: &str, records: &[Value]) -> StoreResult<()> {
        let data = encode(collection, records)?;
        self.backend.save(collection, &data)
    }

    /// Appends one record and returns the collection as written
    pub fn append(&self, collection: &str, record: Value) -> StoreResult<Vec<Value>> {
        let mut records = self.read_all(collection);
        records.push(record);
        self.write_all(collection, &records)?;
        Ok(records)
    }

    /// First record whose `key` field strictly equals `value`
    pub fn find_by_key(&self, collection: &str, key: &str, value: &Value) -> Option<Value> {
        self.read_all(collection)
            .into_iter()
            .find(|record| key_matches(record, key, value))
    }

    /// Shallow-merges `patch` onto the first matching record.
    ///
    /// Returns the merged record, or `None` (without writing) if nothing
    /// matched.
    pub fn update_by_key(
        &self,
        collection: &str,
        key: &str,
        value: &Value,
        patch: &Map<String, Value>,
    ) -> StoreResult<Option<Value>> {
        let mut records = self.read_all(collection);
        let Some(index) = records.iter().position(|r| key_matches(r, key, value)) else {
            return Ok(None);
        };

        let merged = match &records[index] {
            Value::Object(existing) => {
                let mut merged = existing.clone();
                for (field, new_value) in patch {
                    merged.insert(field.clone(), new_value.clone());
                }
                merged
            }
            _ => patch.clone(),
        };
        records[index] = Value::Object(merged);

        self.write_all(collection, &records)?;
        Ok(Some(records.swap_remove(index)))
    }

    /// Removes the first matching record.
    ///
    /// Returns `false` (without writing) if nothing matched.
    pub fn delete_by_key(&self, collection: &str, key: &str, value: &Value) -> StoreResult<bool> {
        let mut records = self.read_all(collection);
        let Some(index) = records.iter().position(|r| key_matches(r, key, value)) else {
            return Ok(false);
        };

        records.remove(index);
        self.write_all(collection, &records)?;
        Ok(true)
    }

    /// Records of `T`'s collection that decode as `T`, in stored order.
    ///
    /// Each record is decoded on its own; one that does not match the shape
    /// is logged and skipped without hiding the rest. Read-only: collections
    /// are always rewritten from [`read_all`](Self::read_all) so skipped
    /// records are never lost.
    pub fn read_typed<T: Record>(&self) -> Vec<T> {
        self.read_all(T::COLLECTION)
            .into_iter()
            .enumerate()
            .filter_map(|(index, record)| match serde_json::from_value(record) {
                Ok(typed) => Some(typed),
                Err(e) => {
                    error!(
                        collection = T::COLLECTION,
                        index,
                        error = %e,
                        "record does not match record shape, skipping"
                    );
                    None
                }
            })
            .collect()
    }

    /// Appends a record to `T`'s collection
    pub fn append_typed<T: Record>(&self, record: &T) -> StoreResult<()> {
        let value = serde_json::to_value(record).map_err(|source| StoreError::Encode {
            collection: T::COLLECTION.to_string(),
            source,
        })?;
        self.append(T::COLLECTION, value).map(|_| ())
    }
}

/// Strict equality: no coercion between kinds. Numbers compare by value.
fn strict_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x.as_f64() == y.as_f64(),
        _ => a == b,
    }
}

fn key_matches(record: &Value, key: &str, value: &Value) -> bool {
    record
        .get(key)
        .map(|field| strict_eq(field, value))
        .unwrap_or(false)
}

/// Pretty JSON, four-space indent
fn encode<T: Serialize + ?Sized>(collection: &str, records: &T) -> StoreResult<Vec<u8>> {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    records
        .serialize(&mut ser)
        .map_err(|source| StoreError::Encode {
            collection: collection.to_string(),
            source,
        })?;
    Ok(buf)
}
