//! Storage - Pluggable durable key-value backend.
//!
//! The alert collection lives under a single key in a string-valued
//! key-value store. The backend is abstract so hosts can plug in whatever
//! persistence the environment offers (browser local storage, a file, a
//! database row); the library ships an in-memory implementation for
//! development and tests.
//!
//! ## Example
//!
//! ```ignore
//! use alert_map::{InMemoryKeyValueStore, KeyValueStore};
//!
//! let storage = InMemoryKeyValueStore::new();
//! storage.set("alerts", "[]")?;
//! assert_eq!(storage.get("alerts")?, Some("[]".to_string()));
//! ```

mod in_memory;
mod store;

use std::fmt;

/// Error type for storage operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// Backend-level failure reported by the key-value store.
    Backend(String),
    /// A lock guarding shared storage state was poisoned.
    LockPoisoned(&'static str),
    /// Failed to serialize the collection before writing.
    Serialize(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Backend(msg) => write!(f, "storage backend error: {}", msg),
            StorageError::LockPoisoned(operation) => {
                write!(f, "storage lock poisoned during {}", operation)
            }
            StorageError::Serialize(msg) => write!(f, "failed to serialize alerts: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

pub use in_memory::InMemoryKeyValueStore;
pub use store::KeyValueStore;
