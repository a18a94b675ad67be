//! Map - Marker projection of the alert collection.
//!
//! The map widget itself is an external collaborator behind the
//! [`MapWidget`] trait; this module owns everything that decides *what*
//! gets drawn: marker construction from records, the state-to-color
//! lookup, and [`MapSync`], which keeps the displayed markers an exact
//! projection of the store and turns user gestures into store mutations.

mod in_memory;
mod sync;
mod widget;

use std::fmt;

use crate::alerts::{AlertRecord, AlertState};

/// Visual marker color, chosen from the record's state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerColor {
    Red,
    Orange,
    Green,
    /// Neutral fallback for unrecognized states.
    Gray,
}

impl fmt::Display for MarkerColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MarkerColor::Red => "red",
            MarkerColor::Orange => "orange",
            MarkerColor::Green => "green",
            MarkerColor::Gray => "gray",
        };
        f.write_str(name)
    }
}

impl AlertState {
    /// Fixed state-to-color lookup. Unrecognized states fall back to a
    /// neutral color; rendering never fails on a bad state.
    pub fn color(self) -> MarkerColor {
        match self {
            AlertState::Danger => MarkerColor::Red,
            AlertState::Alert => MarkerColor::Orange,
            AlertState::Ok => MarkerColor::Green,
            AlertState::Unknown => MarkerColor::Gray,
        }
    }
}

/// Info popup bound to a marker.
///
/// `delete_id` is captured from the record at construction time, so the
/// delete control always resolves to its own marker's record even when
/// many popups are open at once.
#[derive(Debug, Clone, PartialEq)]
pub struct Popup {
    pub state_label: String,
    pub text: Option<String>,
    pub delete_id: String,
}

/// A transient visual marker, fully derived from one record.
///
/// Markers are never the source of truth; they are rebuilt from the store
/// on every render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub id: String,
    pub lat: f64,
    pub lng: f64,
    pub color: MarkerColor,
    pub popup: Popup,
}

impl Marker {
    /// Build the marker for a record.
    pub fn for_record(record: &AlertRecord) -> Self {
        Self {
            id: record.id.clone(),
            lat: record.lat,
            lng: record.lng,
            color: record.state.color(),
            popup: Popup {
                state_label: record.state.label().to_string(),
                text: record.text.clone(),
                delete_id: record.id.clone(),
            },
        }
    }
}

pub use in_memory::InMemoryMapWidget;
pub use sync::{Gesture, MapSync, SyncOutcome};
pub use widget::MapWidget;
