//! Emitter - Post-mutation event hooks for hosts.
//!
//! Wraps an `EventEmitter` so hosts can react to successful mutations
//! (update a counter badge, log, ping another pane) without the sync
//! layer knowing about them. Purely additive; nothing in the sync logic
//! depends on listeners being registered.
//!
//! # Example
//!
//! ```ignore
//! use alert_map::AlertEmitter;
//!
//! let mut emitter = AlertEmitter::new();
//! emitter.on(AlertEmitter::CREATED, |payload: String| {
//!     println!("alert created: {}", payload);
//! });
//! ```

use event_emitter_rs::EventEmitter;

use crate::alerts::AlertRecord;

/// Typed event surface over an `EventEmitter`.
///
/// Payloads are strings: the JSON-encoded record for creates, the record
/// id for removes, and empty for clears.
pub struct AlertEmitter {
    emitter: EventEmitter,
}

impl Default for AlertEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl AlertEmitter {
    /// Fired after a record is created; payload is the JSON record.
    pub const CREATED: &'static str = "AlertCreated";
    /// Fired after a record is removed; payload is the record id.
    pub const REMOVED: &'static str = "AlertRemoved";
    /// Fired after the collection is cleared; payload is empty.
    pub const CLEARED: &'static str = "AlertsCleared";

    /// Create an emitter with no listeners.
    pub fn new() -> Self {
        Self {
            emitter: EventEmitter::new(),
        }
    }

    /// Register a listener for an event type.
    pub fn on<F>(&mut self, event: &str, listener: F)
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        self.emitter.on(event, listener);
    }

    pub(crate) fn alert_created(&mut self, record: &AlertRecord) {
        // Serialization of a record cannot fail; fall back to the id if
        // it somehow does.
        let payload =
            serde_json::to_string(record).unwrap_or_else(|_| record.id.clone());
        self.emitter.emit(Self::CREATED, payload);
    }

    pub(crate) fn alert_removed(&mut self, id: &str) {
        self.emitter.emit(Self::REMOVED, id.to_string());
    }

    pub(crate) fn alerts_cleared(&mut self) {
        self.emitter.emit(Self::CLEARED, String::new());
    }
}
