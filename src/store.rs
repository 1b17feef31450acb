//! Authoritative in-memory collections of tasks, notes and reminders.
//!
//! Every mutation writes the whole affected collection through to storage
//! before returning. Storage failures are logged and otherwise ignored so a
//! broken disk never takes the in-memory state down with it.

use crate::domain::{
    parse_local_datetime, DashboardStats, ItemKind, Note, Priority, Reminder, Task,
    REMINDER_TIME_FORMAT,
};
use crate::error::ValidationError;
use crate::persistence::{load_notes, load_reminders, load_tasks, save_collection, KeyValueStore};
use chrono::{DateTime, Local};
use uuid::Uuid;

/// Direction for reordering a task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
}

pub struct ItemStore {
    tasks: Vec<Task>,
    notes: Vec<Note>,
    reminders: Vec<Reminder>,
    storage: Box<dyn KeyValueStore>,
}

impl ItemStore {
    /// Load all collections from storage
    pub fn load(storage: Box<dyn KeyValueStore>) -> Self {
        let tasks = load_tasks(storage.as_ref());
        let notes = load_notes(storage.as_ref());
        let reminders = load_reminders(storage.as_ref());
        log::info!(
            "Loaded {} tasks, {} notes, {} reminders",
            tasks.len(),
            notes.len(),
            reminders.len()
        );

        Self {
            tasks,
            notes,
            reminders,
            storage,
        }
    }

    /// Empty store backed by memory
    #[cfg(test)]
    pub fn in_memory() -> Self {
        Self::load(Box::new(crate::persistence::MemoryStore::new()))
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn reminders(&self) -> &[Reminder] {
        &self.reminders
    }

    pub fn task(&self, id: Uuid) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn storage(&self) -> &dyn KeyValueStore {
        self.storage.as_ref()
    }

    pub fn storage_mut(&mut self) -> &mut dyn KeyValueStore {
        self.storage.as_mut()
    }

    pub fn stats(&self) -> DashboardStats {
        DashboardStats::compute(&self.tasks, &self.notes, &self.reminders)
    }

    /// Re-read every collection from storage, replacing in-memory state
    #[cfg(test)]
    pub fn reload(&mut self) {
        self.tasks = load_tasks(self.storage.as_ref());
        self.notes = load_notes(self.storage.as_ref());
        self.reminders = load_reminders(self.storage.as_ref());
    }

    fn persist(&mut self, kind: ItemKind) {
        let result = match kind {
            ItemKind::Tasks => save_collection(self.storage.as_mut(), kind, &self.tasks),
            ItemKind::Notes => save_collection(self.storage.as_mut(), kind, &self.notes),
            ItemKind::Reminders => save_collection(self.storage.as_mut(), kind, &self.reminders),
        };
        if let Err(e) = result {
            log::error!("Failed to save {}: {:#}", kind.key(), e);
        }
    }

    fn task_index(&self, id: Uuid) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }

    /// Append a new medium-priority, open task
    pub fn add_task(&mut self, text: &str) -> Result<Uuid, ValidationError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ValidationError::EmptyTask);
        }

        let task = Task::new(text.to_string());
        let id = task.id;
        self.tasks.push(task);
        self.persist(ItemKind::Tasks);
        Ok(id)
    }

    /// Returns true if the task existed and its state changed
    pub fn set_completed(&mut self, id: Uuid, completed: bool) -> bool {
        let Some(idx) = self.task_index(id) else {
            return false;
        };
        if self.tasks[idx].completed == completed {
            return false;
        }
        self.tasks[idx].completed = completed;
        self.persist(ItemKind::Tasks);
        true
    }

    pub fn set_priority(&mut self, id: Uuid, priority: Priority) -> bool {
        let Some(idx) = self.task_index(id) else {
            return false;
        };
        if self.tasks[idx].priority == priority {
            return false;
        }
        self.tasks[idx].priority = priority;
        self.persist(ItemKind::Tasks);
        true
    }

    /// Replace a task's text. Empty or unchanged text keeps the old value.
    pub fn edit_text(&mut self, id: Uuid, new_text: &str) -> bool {
        let new_text = new_text.trim();
        let Some(idx) = self.task_index(id) else {
            return false;
        };
        if new_text.is_empty() || self.tasks[idx].text == new_text {
            return false;
        }
        self.tasks[idx].text = new_text.to_string();
        self.persist(ItemKind::Tasks);
        true
    }

    /// Remove a task. Unknown handles are ignored.
    pub fn delete_task(&mut self, id: Uuid) -> Option<Task> {
        let idx = self.task_index(id)?;
        let task = self.tasks.remove(idx);
        self.persist(ItemKind::Tasks);
        Some(task)
    }

    /// Swap a task with its neighbour in insertion order
    pub fn move_task(&mut self, id: Uuid, direction: MoveDirection) -> bool {
        let Some(idx) = self.task_index(id) else {
            return false;
        };
        let target = match direction {
            MoveDirection::Up if idx > 0 => idx - 1,
            MoveDirection::Down if idx + 1 < self.tasks.len() => idx + 1,
            _ => return false,
        };
        self.tasks.swap(idx, target);
        self.persist(ItemKind::Tasks);
        true
    }

    pub fn add_note(&mut self, text: &str, now: DateTime<Local>) -> Result<Uuid, ValidationError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ValidationError::EmptyNote);
        }

        let note = Note::new(text.to_string(), now);
        let id = note.id;
        self.notes.push(note);
        self.persist(ItemKind::Notes);
        Ok(id)
    }

    pub fn delete_note(&mut self, id: Uuid) -> Option<Note> {
        let idx = self.notes.iter().position(|n| n.id == id)?;
        let note = self.notes.remove(idx);
        self.persist(ItemKind::Notes);
        Some(note)
    }

    /// Add a reminder. `time` must be a local datetime; it is stored normalized.
    pub fn add_reminder(&mut self, text: &str, time: &str) -> Result<Uuid, ValidationError> {
        let text = text.trim();
        let time = time.trim();
        if text.is_empty() || time.is_empty() {
            return Err(ValidationError::IncompleteReminder);
        }

        let at = parse_local_datetime(time)
            .ok_or_else(|| ValidationError::InvalidReminderTime(time.to_string()))?;

        let reminder = Reminder::new(
            text.to_string(),
            at.format(REMINDER_TIME_FORMAT).to_string(),
        );
        let id = reminder.id;
        self.reminders.push(reminder);
        self.persist(ItemKind::Reminders);
        Ok(id)
    }

    pub fn delete_reminder(&mut self, id: Uuid) -> Option<Reminder> {
        let idx = self.reminders.iter().position(|r| r.id == id)?;
        let reminder = self.reminders.remove(idx);
        self.persist(ItemKind::Reminders);
        Some(reminder)
    }

    /// Wipe storage and every in-memory collection
    pub fn clear_all(&mut self) {
        if let Err(e) = self.storage.clear() {
            log::error!("Failed to clear storage: {:#}", e);
        }
        self.tasks.clear();
        self.notes.clear();
        self.reminders.clear();
    }
}
