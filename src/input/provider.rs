//! InputProvider - Abstract blocking user-input collaborator.

/// Abstract user input: blocking prompts, confirm dialogs, and one-shot
/// notices.
pub trait InputProvider: Send + Sync {
    /// Ask the user for a line of text. Returns None if the prompt was
    /// dismissed.
    fn prompt(&self, message: &str) -> Option<String>;

    /// Ask the user a yes/no question.
    fn confirm(&self, message: &str) -> bool;

    /// Show the user a one-shot notice.
    fn notify(&self, message: &str);
}
