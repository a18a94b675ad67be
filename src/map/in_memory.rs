//! InMemoryMapWidget - Recording map widget for testing and development.

use std::sync::{Arc, RwLock};

use super::{MapWidget, Marker};

#[derive(Default)]
struct WidgetState {
    markers: Vec<Marker>,
    locate_calls: usize,
}

/// Map widget double that records displayed markers in memory.
///
/// Clone-friendly via Arc: clones share the same state, so tests can hold
/// onto a handle while the sync layer owns another.
#[derive(Clone, Default)]
pub struct InMemoryMapWidget {
    state: Arc<RwLock<WidgetState>>,
}

impl InMemoryMapWidget {
    /// Create a widget with no displayed markers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the currently displayed markers, in display order.
    pub fn markers(&self) -> Vec<Marker> {
        self.state
            .read()
            .map(|s| s.markers.clone())
            .unwrap_or_default()
    }

    /// Number of times the view was recentered on the user.
    pub fn locate_calls(&self) -> usize {
        self.state.read().map(|s| s.locate_calls).unwrap_or(0)
    }
}

impl MapWidget for InMemoryMapWidget {
    fn add_marker(&self, marker: Marker) {
        if let Ok(mut state) = self.state.write() {
            state.markers.push(marker);
        }
    }

    fn remove_marker(&self, id: &str) {
        if let Ok(mut state) = self.state.write() {
            state.markers.retain(|m| m.id != id);
        }
    }

    fn recenter_on_user(&self) {
        if let Ok(mut state) = self.state.write() {
            state.locate_calls += 1;
        }
    }
}
