mod alerts;
#[cfg(feature = "emitter")]
mod emitter;
mod input;
mod map;
mod storage;

pub use alerts::{generate_id, AlertRecord, AlertState, AlertStore, InvalidState, STORAGE_KEY};
#[cfg(feature = "emitter")]
pub use emitter::AlertEmitter;
pub use input::{InputProvider, ScriptedInput};
pub use map::{
    Gesture, InMemoryMapWidget, MapSync, MapWidget, Marker, MarkerColor, Popup, SyncOutcome,
};
pub use storage::{InMemoryKeyValueStore, KeyValueStore, StorageError};

// Re-export the EventEmitter from the event_emitter_rs crate
#[cfg(feature = "emitter")]
pub use event_emitter_rs::EventEmitter;
