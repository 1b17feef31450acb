use super::storage::KeyValueStore;
use crate::domain::{ItemKind, Note, Reminder, Task};
use crate::error::{PersistenceParseError, ReminderParseError};
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Separator between text and time in legacy reminder strings
pub const LEGACY_REMINDER_DELIMITER: &str = "🕐";

/// Serialize the full collection under the kind's key
pub fn save_collection<T: Serialize>(
    store: &mut dyn KeyValueStore,
    kind: ItemKind,
    items: &[T],
) -> Result<()> {
    let json = serde_json::to_string(items)
        .with_context(|| format!("Failed to serialize {}", kind.key()))?;
    store.set(kind.key(), &json)
}

/// Load a collection. Missing keys, unreadable storage and malformed JSON all
/// yield an empty collection.
pub fn load_collection<T: DeserializeOwned>(store: &dyn KeyValueStore, kind: ItemKind) -> Vec<T> {
    let raw = match store.get(kind.key()) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            log::warn!("Failed to read {}: {:#}", kind.key(), e);
            return Vec::new();
        }
    };

    // `null` is what an empty slot looks like after a manual edit
    match serde_json::from_str::<Option<Vec<T>>>(&raw) {
        Ok(items) => items.unwrap_or_default(),
        Err(source) => {
            let err = PersistenceParseError {
                key: kind.key(),
                source,
            };
            log::warn!("Discarding stored data: {}", err);
            Vec::new()
        }
    }
}

pub fn load_tasks(store: &dyn KeyValueStore) -> Vec<Task> {
    load_collection(store, ItemKind::Tasks)
}

pub fn load_notes(store: &dyn KeyValueStore) -> Vec<Note> {
    load_collection(store, ItemKind::Notes)
}

/// A reminder as found in storage: a structured record, or the older
/// "<text> 🕐 <time>" display string
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StoredReminder {
    Record(Reminder),
    Legacy(String),
}

/// Load reminders, accepting both structured records and legacy strings.
/// Legacy strings that don't match the pattern are dropped.
pub fn load_reminders(store: &dyn KeyValueStore) -> Vec<Reminder> {
    load_collection::<StoredReminder>(store, ItemKind::Reminders)
        .into_iter()
        .filter_map(|stored| match stored {
            StoredReminder::Record(reminder) => Some(reminder),
            StoredReminder::Legacy(entry) => match parse_legacy_reminder(&entry) {
                Ok(reminder) => Some(reminder),
                Err(e) => {
                    log::warn!("Dropping reminder: {}", e);
                    None
                }
            },
        })
        .collect()
}

/// Split a legacy "<text> 🕐 <time>" string at the first delimiter that is
/// surrounded by whitespace. Text containing the delimiter is cut short, so
/// "A 🕐 B 🕐 Jan 2, 09:30" yields text "A" and time "B 🕐 Jan 2, 09:30".
pub fn parse_legacy_reminder(entry: &str) -> Result<Reminder, ReminderParseError> {
    for (idx, _) in entry.match_indices(LEGACY_REMINDER_DELIMITER) {
        let before = &entry[..idx];
        let after = &entry[idx + LEGACY_REMINDER_DELIMITER.len()..];

        let text = before.trim_end();
        let time = after.trim_start();
        let spaced = before.ends_with(char::is_whitespace) && after.starts_with(char::is_whitespace);

        // Blank text or time is rejected
        if spaced && !text.trim().is_empty() && !time.trim().is_empty() {
            return Ok(Reminder::new(text.trim().to_string(), time.trim().to_string()));
        }
    }

    Err(ReminderParseError(entry.to_string()))
}

/// Render a reminder in the legacy display form
pub fn format_legacy_reminder(reminder: &Reminder) -> String {
    format!(
        "{} {} {}",
        reminder.text,
        LEGACY_REMINDER_DELIMITER,
        reminder.time_display()
    )
}
