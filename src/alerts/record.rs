//! AlertRecord - A single persisted marker and its severity state.

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// Severity state of an alert. Serialized as a lowercase tag.
///
/// `Unknown` is the deserialization catch-all: a persisted record with an
/// unrecognized state tag still loads (and renders with the fallback color)
/// instead of poisoning the whole collection. It is never accepted from
/// user input; `FromStr` only parses the three valid tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertState {
    Danger,
    Alert,
    Ok,
    #[serde(other)]
    Unknown,
}

impl AlertState {
    /// Lowercase tag for this state, matching the serialized form.
    pub fn label(self) -> &'static str {
        match self {
            AlertState::Danger => "danger",
            AlertState::Alert => "alert",
            AlertState::Ok => "ok",
            AlertState::Unknown => "unknown",
        }
    }
}

impl fmt::Display for AlertState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when parsing a state tag that is not one of the three
/// valid values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidState(pub String);

impl fmt::Display for InvalidState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid alert state: {:?}", self.0)
    }
}

impl std::error::Error for InvalidState {}

impl FromStr for AlertState {
    type Err = InvalidState;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "danger" => Ok(AlertState::Danger),
            "alert" => Ok(AlertState::Alert),
            "ok" => Ok(AlertState::Ok),
            other => Err(InvalidState(other.to_string())),
        }
    }
}

/// A single persisted alert marker.
///
/// Records are immutable after creation: there is no update operation,
/// only add and remove.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertRecord {
    pub id: String,
    pub lat: f64,
    pub lng: f64,
    pub state: AlertState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl AlertRecord {
    /// Create a record with a freshly generated unique id.
    pub fn new(lat: f64, lng: f64, state: AlertState, text: Option<String>) -> Self {
        Self {
            id: generate_id(),
            lat,
            lng,
            state,
            text,
        }
    }
}

static NEXT_SEQ: AtomicU64 = AtomicU64::new(0);

/// Generate a unique alert id.
///
/// Time-based (`a_<millis>_<n>`) with a process-wide monotonic counter
/// suffix, so ids stay unique even when several alerts are created within
/// the same millisecond.
pub fn generate_id() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    let seq = NEXT_SEQ.fetch_add(1, Ordering::Relaxed);
    format!("a_{}_{}", millis, seq)
}
