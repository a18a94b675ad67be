//! Input - Pluggable user prompt/confirm/notify capability.
//!
//! The create and clear-all gestures need blocking user input. Hosts plug
//! in whatever the environment offers (native dialogs, a custom modal
//! widget); the library ships [`ScriptedInput`], a headless double that
//! makes gesture logic testable without a UI.

mod provider;
mod scripted;

pub use provider::InputProvider;
pub use scripted::ScriptedInput;
