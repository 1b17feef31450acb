use thiserror::Error;

/// Rejected user input. The message is shown as-is in the error banner.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a task")]
    EmptyTask,
    #[error("Please enter a note")]
    EmptyNote,
    #[error("Please enter reminder text and time")]
    IncompleteReminder,
    #[error("Invalid reminder time '{0}' (expected YYYY-MM-DD HH:MM)")]
    InvalidReminderTime(String),
}

/// Stored collection data that is not valid JSON for its record type
#[derive(Debug, Error)]
#[error("malformed {key} data: {source}")]
pub struct PersistenceParseError {
    pub key: &'static str,
    #[source]
    pub source: serde_json::Error,
}

/// A stored legacy reminder string that does not contain the text/time delimiter
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("reminder entry '{0}' does not match '<text> 🕐 <time>'")]
pub struct ReminderParseError(pub String);
