use super::enums::Priority;
use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Format used for the `time` field of a reminder (matches a datetime-local input)
pub const REMINDER_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Format used for a note's creation timestamp
pub const NOTE_TIMESTAMP_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// A task in the task list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// In-memory handle (not persisted)
    #[serde(skip, default = "Uuid::new_v4")]
    pub id: Uuid,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub priority: Priority,
}

impl Task {
    pub fn new(text: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            text,
            completed: false,
            priority: Priority::Medium,
        }
    }

    /// Lowercased text used for search and alphabetical sorting
    pub fn search_text(&self) -> String {
        self.text.to_lowercase()
    }
}

/// A free-form note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    #[serde(skip, default = "Uuid::new_v4")]
    pub id: Uuid,
    pub text: String,
    #[serde(default)]
    pub timestamp: String,
}

impl Note {
    pub fn new(text: String, created_at: DateTime<Local>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text,
            timestamp: created_at.format(NOTE_TIMESTAMP_FORMAT).to_string(),
        }
    }
}

/// A timed reminder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    #[serde(skip, default = "Uuid::new_v4")]
    pub id: Uuid,
    pub text: String,
    /// Local datetime, normally `YYYY-MM-DDTHH:MM`
    pub time: String,
}

impl Reminder {
    pub fn new(text: String, time: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            text,
            time,
        }
    }

    /// Absolute fire time, if `time` is a parseable local datetime
    pub fn fire_at(&self) -> Option<DateTime<Local>> {
        parse_local_datetime(&self.time)
    }

    /// Short display form of the time ("Oct 5, 09:30"), falls back to the raw string
    pub fn time_display(&self) -> String {
        match self.fire_at() {
            Some(at) => at.format("%b %-d, %H:%M").to_string(),
            None => self.time.clone(),
        }
    }
}

/// Parse a reminder time in local time. Accepts `YYYY-MM-DDTHH:MM`,
/// the same with seconds, or a space instead of the `T`.
pub fn parse_local_datetime(input: &str) -> Option<DateTime<Local>> {
    let input = input.trim();
    let formats = [
        REMINDER_TIME_FORMAT,
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%d %H:%M:%S",
    ];

    formats
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
        .and_then(|naive| Local.from_local_datetime(&naive).earliest())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_defaults() {
        let task = Task::new("Buy milk".to_string());
        assert_eq!(task.priority, Priority::Medium);
        assert!(!task.completed);
        assert_eq!(task.search_text(), "buy milk");
    }

    #[test]
    fn test_task_record_without_priority() {
        let task: Task = serde_json::from_str(r#"{"text":"Old","completed":true}"#).unwrap();
        assert_eq!(task.priority, Priority::Medium);
        assert!(task.completed);
    }

    #[test]
    fn test_task_serializes_without_id() {
        let task = Task::new("Pay rent".to_string());
        let json = serde_json::to_string(&task).unwrap();
        assert_eq!(json, r#"{"text":"Pay rent","completed":false,"priority":"medium"}"#);
    }

    #[test]
    fn test_note_timestamp_format() {
        let at = Local.with_ymd_and_hms(2024, 3, 7, 14, 5, 9).unwrap();
        let note = Note::new("Idea".to_string(), at);
        assert_eq!(note.timestamp, "3/7/2024, 2:05:09 PM");
    }

    #[test]
    fn test_reminder_fire_at() {
        let reminder = Reminder::new("Dentist".to_string(), "2030-01-02T09:30".to_string());
        let at = reminder.fire_at().unwrap();
        assert_eq!(at.format("%Y-%m-%d %H:%M").to_string(), "2030-01-02 09:30");
        assert_eq!(reminder.time_display(), "Jan 2, 09:30");
    }

    #[test]
    fn test_reminder_unparseable_time() {
        let reminder = Reminder::new("A".to_string(), "B".to_string());
        assert!(reminder.fire_at().is_none());
        assert_eq!(reminder.time_display(), "B");
    }
}
