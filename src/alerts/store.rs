//! AlertStore - Durable CRUD over the alert collection.

use std::sync::Arc;

use crate::storage::{KeyValueStore, StorageError};

use super::AlertRecord;

/// Default storage key for the alert collection.
pub const STORAGE_KEY: &str = "alerts";

/// Owns the durable alert collection: a JSON array of records under a
/// single key-value slot.
///
/// Every mutation is a full load-modify-save of the slot; there are no
/// partial writes. The read path fails soft: an absent slot, an unreadable
/// backend, or unparseable JSON all load as the empty collection, never as
/// an error.
#[derive(Clone)]
pub struct AlertStore {
    storage: Arc<dyn KeyValueStore>,
    key: String,
}

impl AlertStore {
    /// Create a store over the given backend, using the default slot key.
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self::with_key(storage, STORAGE_KEY)
    }

    /// Create a store over the given backend with a custom slot key.
    pub fn with_key(storage: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// The slot key this store reads and writes.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Load the full collection. Absent or malformed data loads as empty.
    pub fn load(&self) -> Vec<AlertRecord> {
        let raw = match self.storage.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) | Err(_) => return Vec::new(),
        };

        serde_json::from_str(&raw).unwrap_or_default()
    }

    /// Serialize and overwrite the full collection (full-replace semantics).
    pub fn save(&self, records: &[AlertRecord]) -> Result<(), StorageError> {
        let json = serde_json::to_string(records)
            .map_err(|e| StorageError::Serialize(e.to_string()))?;
        self.storage.set(&self.key, &json)
    }

    /// Append one record to the persisted collection.
    ///
    /// The caller supplies a pre-populated record; no validation happens
    /// here.
    pub fn add(&self, record: AlertRecord) -> Result<(), StorageError> {
        let mut records = self.load();
        records.push(record);
        self.save(&records)
    }

    /// Remove every record with the given id. Returns true if anything was
    /// removed; an absent id is a no-op, not an error.
    pub fn remove(&self, id: &str) -> Result<bool, StorageError> {
        let mut records = self.load();
        let before = records.len();
        records.retain(|r| r.id != id);
        let removed = records.len() < before;
        self.save(&records)?;
        Ok(removed)
    }

    /// Delete the persisted slot entirely.
    pub fn clear(&self) -> Result<(), StorageError> {
        self.storage.remove(&self.key)
    }
}
