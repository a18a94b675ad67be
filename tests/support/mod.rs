use std::sync::Arc;

use alert_map::{
    AlertRecord, AlertState, AlertStore, InMemoryKeyValueStore, InMemoryMapWidget, MapSync,
    ScriptedInput,
};

/// Fully-wired sync layer over in-memory doubles, with shared handles to
/// every collaborator for assertions.
pub struct Harness {
    pub sync: MapSync<InMemoryMapWidget, ScriptedInput>,
    pub store: AlertStore,
    pub backend: InMemoryKeyValueStore,
    pub widget: InMemoryMapWidget,
    pub input: ScriptedInput,
}

pub fn harness() -> Harness {
    harness_over(InMemoryKeyValueStore::new())
}

/// Harness over an existing backend, for restart scenarios.
pub fn harness_over(backend: InMemoryKeyValueStore) -> Harness {
    let store = AlertStore::new(Arc::new(backend.clone()));
    let widget = InMemoryMapWidget::new();
    let input = ScriptedInput::new();
    let sync = MapSync::new(store.clone(), widget.clone(), input.clone());

    Harness {
        sync,
        store,
        backend,
        widget,
        input,
    }
}

pub fn record(id: &str, state: AlertState) -> AlertRecord {
    AlertRecord {
        id: id.into(),
        lat: 10.0,
        lng: 20.0,
        state,
        text: None,
    }
}
