//! MapWidget - Abstract map-rendering collaborator.

use super::Marker;

/// Abstract map-rendering widget.
///
/// Implementations wrap the real mapping library (tile layers, icons,
/// popup wiring); the operations here are the full surface the sync layer
/// needs. Widget operations are infallible from this system's point of
/// view; implementations use interior mutability.
pub trait MapWidget: Send + Sync {
    /// Display a marker with its bound popup.
    fn add_marker(&self, marker: Marker);

    /// Remove a displayed marker by id. No-op if not displayed.
    fn remove_marker(&self, id: &str);

    /// Recenter the view on the user's current location. Fire-and-forget;
    /// the widget delegates to the host's geolocation facility.
    fn recenter_on_user(&self);
}
