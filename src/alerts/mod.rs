//! Alerts - The persisted alert record and its durable store.
//!
//! An alert is a point on the map with a severity state and an optional
//! description. The full collection is serialized as a JSON array of objects
//! under a single storage key; [`AlertStore`] owns that slot and is the only
//! writer.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use alert_map::{AlertRecord, AlertState, AlertStore, InMemoryKeyValueStore};
//!
//! let store = AlertStore::new(Arc::new(InMemoryKeyValueStore::new()));
//! store.add(AlertRecord::new(10.0, 20.0, AlertState::Danger, None))?;
//! assert_eq!(store.load().len(), 1);
//! ```

mod record;
mod store;

pub use record::{generate_id, AlertRecord, AlertState, InvalidState};
pub use store::{AlertStore, STORAGE_KEY};
