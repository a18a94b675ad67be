//! KeyValueStore - Abstract string-valued durable storage.

use super::StorageError;

/// Abstract durable key-value storage.
pub trait KeyValueStore: Send + Sync {
    /// Get the value stored under a key. Returns None if absent.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite the value stored under a key (full replace).
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete a key entirely. Not an error if the key is absent.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
