//! MapSync - Keeps the displayed markers an exact projection of the store.

use crate::alerts::{AlertRecord, AlertState, AlertStore};
use crate::input::InputProvider;
use crate::storage::StorageError;

#[cfg(feature = "emitter")]
use crate::emitter::AlertEmitter;

use super::{MapWidget, Marker};

const STATE_PROMPT: &str = "Alert state: enter \"danger\", \"alert\" or \"ok\"";
const TEXT_PROMPT: &str = "Description (optional)";
const INVALID_STATE_NOTICE: &str = "Invalid alert state";
const CLEAR_CONFIRM: &str = "Delete all saved alerts?";

/// A discrete user gesture, as reported by the host UI.
#[derive(Debug, Clone, PartialEq)]
pub enum Gesture {
    /// The user clicked the map at the given coordinates.
    MapClick { lat: f64, lng: f64 },
    /// The user clicked the delete control inside a marker's popup. The id
    /// comes from that popup's `delete_id`, captured at construction.
    DeleteMarker { id: String },
    /// The user asked to clear every alert.
    ClearAll,
    /// The user asked to recenter on their location.
    Locate,
}

/// Outcome of one gesture, for hosts that care.
#[derive(Debug, Clone, PartialEq)]
pub enum SyncOutcome {
    /// A new alert was created and displayed.
    Created(AlertRecord),
    /// The gesture was abandoned (dismissed or invalid input) with no
    /// state change.
    Abandoned,
    /// An alert was removed.
    Removed,
    /// The whole collection was cleared.
    Cleared,
    /// The view was recentered.
    Located,
}

/// Reconciles the map widget with the store and translates user gestures
/// into store mutations.
///
/// Holds only transient derived state: the ids of currently-displayed
/// markers. Markers are fully rebuilt from the store on every render pass;
/// the store is always the source of truth.
pub struct MapSync<W, I> {
    store: AlertStore,
    widget: W,
    input: I,
    displayed: Vec<String>,
    #[cfg(feature = "emitter")]
    emitter: Option<AlertEmitter>,
}

impl<W: MapWidget, I: InputProvider> MapSync<W, I> {
    /// Create a sync layer over the given collaborators. Call [`start`]
    /// to display the persisted collection.
    ///
    /// [`start`]: MapSync::start
    pub fn new(store: AlertStore, widget: W, input: I) -> Self {
        Self {
            store,
            widget,
            input,
            displayed: Vec::new(),
            #[cfg(feature = "emitter")]
            emitter: None,
        }
    }

    /// Attach an emitter; post-mutation events fire on it.
    #[cfg(feature = "emitter")]
    pub fn with_emitter(mut self, emitter: AlertEmitter) -> Self {
        self.emitter = Some(emitter);
        self
    }

    /// Initial render: display every persisted record.
    pub fn start(&mut self) {
        self.render_all();
    }

    /// Ids of currently-displayed markers, in display order.
    pub fn displayed(&self) -> &[String] {
        &self.displayed
    }

    /// Dispatch one gesture.
    pub fn handle(&mut self, gesture: Gesture) -> Result<SyncOutcome, StorageError> {
        match gesture {
            Gesture::MapClick { lat, lng } => Ok(self
                .handle_map_click(lat, lng)?
                .map(SyncOutcome::Created)
                .unwrap_or(SyncOutcome::Abandoned)),
            Gesture::DeleteMarker { id } => {
                self.handle_delete(&id)?;
                Ok(SyncOutcome::Removed)
            }
            Gesture::ClearAll => Ok(if self.handle_clear_all()? {
                SyncOutcome::Cleared
            } else {
                SyncOutcome::Abandoned
            }),
            Gesture::Locate => {
                self.handle_locate();
                Ok(SyncOutcome::Located)
            }
        }
    }

    /// Create gesture: prompt for a state and an optional description,
    /// persist the new record, and display its marker incrementally.
    ///
    /// A dismissed, empty, or invalid state answer abandons the whole
    /// gesture with a one-shot notice and no state change; a dismissed or
    /// empty description is accepted (only the state is mandatory). The
    /// incremental add is the one path that skips a full re-render.
    pub fn handle_map_click(
        &mut self,
        lat: f64,
        lng: f64,
    ) -> Result<Option<AlertRecord>, StorageError> {
        let state = match self.prompt_state() {
            Some(state) => state,
            None => return Ok(None),
        };

        let text = self
            .input
            .prompt(TEXT_PROMPT)
            .filter(|t| !t.is_empty());

        let record = AlertRecord::new(lat, lng, state, text);
        self.store.add(record.clone())?;

        self.widget.add_marker(Marker::for_record(&record));
        self.displayed.push(record.id.clone());

        #[cfg(feature = "emitter")]
        if let Some(emitter) = &mut self.emitter {
            emitter.alert_created(&record);
        }

        Ok(Some(record))
    }

    /// Delete gesture: remove the record, then re-render everything. An
    /// absent id still re-renders but fires no removal event.
    pub fn handle_delete(&mut self, id: &str) -> Result<(), StorageError> {
        let removed = self.store.remove(id)?;
        self.render_all();

        #[cfg(feature = "emitter")]
        if removed {
            if let Some(emitter) = &mut self.emitter {
                emitter.alert_removed(id);
            }
        }
        #[cfg(not(feature = "emitter"))]
        let _ = removed;

        Ok(())
    }

    /// Clear-all gesture: confirm, clear the store, re-render. Returns
    /// false (with nothing touched) when the user declines.
    pub fn handle_clear_all(&mut self) -> Result<bool, StorageError> {
        if !self.input.confirm(CLEAR_CONFIRM) {
            return Ok(false);
        }

        self.store.clear()?;
        self.render_all();

        #[cfg(feature = "emitter")]
        if let Some(emitter) = &mut self.emitter {
            emitter.alerts_cleared();
        }

        Ok(true)
    }

    /// Locate gesture: delegate to the widget's geolocation facility.
    pub fn handle_locate(&mut self) {
        self.widget.recenter_on_user();
    }

    /// Remove every displayed marker, reload the collection, and display
    /// one marker per record.
    pub fn render_all(&mut self) {
        for id in self.displayed.drain(..) {
            self.widget.remove_marker(&id);
        }

        for record in self.store.load() {
            self.widget.add_marker(Marker::for_record(&record));
            self.displayed.push(record.id);
        }
    }

    fn prompt_state(&self) -> Option<AlertState> {
        let raw = match self.input.prompt(STATE_PROMPT) {
            Some(raw) if !raw.trim().is_empty() => raw,
            _ => {
                self.input.notify(INVALID_STATE_NOTICE);
                return None;
            }
        };

        match raw.trim().parse() {
            Ok(state) => Some(state),
            Err(_) => {
                self.input.notify(INVALID_STATE_NOTICE);
                None
            }
        }
    }
}
