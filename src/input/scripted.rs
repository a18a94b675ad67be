//! ScriptedInput - Headless input double with queued answers.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use super::InputProvider;

#[derive(Default)]
struct Script {
    prompts: VecDeque<Option<String>>,
    confirms: VecDeque<bool>,
    notices: Vec<String>,
}

/// Input provider that answers from pre-queued responses and records every
/// notice it was asked to show.
///
/// An exhausted prompt queue answers None (dismissed); an exhausted
/// confirm queue answers false. Clone-friendly via Arc: clones share the
/// same script, so a test can keep a handle for assertions while the sync
/// layer owns another.
#[derive(Clone, Default)]
pub struct ScriptedInput {
    script: Arc<Mutex<Script>>,
}

impl ScriptedInput {
    /// Create an input double with empty queues.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the answer for the next prompt. `None` means dismissed.
    pub fn push_prompt(&self, answer: Option<&str>) {
        if let Ok(mut script) = self.script.lock() {
            script.prompts.push_back(answer.map(str::to_string));
        }
    }

    /// Queue the answer for the next confirm dialog.
    pub fn push_confirm(&self, answer: bool) {
        if let Ok(mut script) = self.script.lock() {
            script.confirms.push_back(answer);
        }
    }

    /// All notices shown so far, in order.
    pub fn notices(&self) -> Vec<String> {
        self.script
            .lock()
            .map(|s| s.notices.clone())
            .unwrap_or_default()
    }
}

impl InputProvider for ScriptedInput {
    fn prompt(&self, _message: &str) -> Option<String> {
        self.script
            .lock()
            .ok()
            .and_then(|mut s| s.prompts.pop_front())
            .flatten()
    }

    fn confirm(&self, _message: &str) -> bool {
        self.script
            .lock()
            .ok()
            .and_then(|mut s| s.confirms.pop_front())
            .unwrap_or(false)
    }

    fn notify(&self, message: &str) {
        if let Ok(mut script) = self.script.lock() {
            script.notices.push(message.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_prompts_in_order() {
        let input = ScriptedInput::new();
        input.push_prompt(Some("one"));
        input.push_prompt(None);

        assert_eq!(input.prompt("?"), Some("one".to_string()));
        assert_eq!(input.prompt("?"), None);
        // exhausted queue answers dismissed
        assert_eq!(input.prompt("?"), None);
    }

    #[test]
    fn exhausted_confirm_queue_declines() {
        let input = ScriptedInput::new();
        input.push_confirm(true);

        assert!(input.confirm("?"));
        assert!(!input.confirm("?"));
    }

    #[test]
    fn records_notices() {
        let input = ScriptedInput::new();
        input.notify("first");
        input.notify("second");
        assert_eq!(input.notices(), vec!["first", "second"]);
    }
}
