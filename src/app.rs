use crate::domain::{DashboardStats, Page, Priority, SortMode, Theme, UiMode};
use crate::error::ValidationError;
use crate::feed::{Feed, NoticeLevel, DEFAULT_NOTICE_DURATION};
use crate::filter::FilterSort;
use crate::notifications;
use crate::persistence::settings::{
    clamp_font_size, save_font_size, save_notifications, save_sound, save_theme,
};
use crate::persistence::{load_settings, write_export, Settings};
use crate::scheduler::{Debouncer, DueReminder, ReminderScheduler};
use crate::store::{ItemStore, MoveDirection};
use crate::ticker;
use anyhow::Result;
use chrono::{DateTime, Local, Utc};
use std::path::PathBuf;
use std::time::Instant;
use uuid::Uuid;

/// Debounce key for the task search box
const SEARCH_KEY: &str = "search";

/// What an input form creates or edits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Task,
    Note,
    Reminder,
    EditTask(Uuid),
}

/// Input form state
#[derive(Debug, Clone)]
pub struct InputFormState {
    pub kind: FormKind,
    pub text: String,
    /// Only used by reminders
    pub time: String,
    pub editing_field: usize, // 0 = text, 1 = time
}

impl InputFormState {
    pub fn field_count(&self) -> usize {
        if self.kind == FormKind::Reminder {
            2
        } else {
            1
        }
    }
}

/// Rows on the settings page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsRow {
    Theme,
    FontSize,
    Notifications,
    Sound,
    Export,
    ClearData,
}

impl SettingsRow {
    pub fn all() -> &'static [SettingsRow] {
        &[
            SettingsRow::Theme,
            SettingsRow::FontSize,
            SettingsRow::Notifications,
            SettingsRow::Sound,
            SettingsRow::Export,
            SettingsRow::ClearData,
        ]
    }
}

/// Main application state
pub struct AppState {
    pub store: ItemStore,
    pub filter: FilterSort,
    pub feed: Feed,
    pub scheduler: ReminderScheduler,
    pub settings: Settings,
    pub stats: DashboardStats,
    pub page: Page,
    pub ui_mode: UiMode,
    pub input_form: Option<InputFormState>,
    /// Raw text in the search box; applied to the filter after the debounce window
    pub search_input: String,
    search_debounce: Debouncer<&'static str, String>,
    /// Selection index into the visible task list
    pub selected_task: usize,
    pub selected_note: usize,
    pub selected_reminder: usize,
    pub settings_cursor: usize,
    /// Whether system notifications were available at startup
    pub system_notifications: bool,
    /// Where exports are written
    pub export_dir: PathBuf,
}

impl AppState {
    pub fn new(store: ItemStore, export_dir: PathBuf) -> Self {
        let settings = load_settings(store.storage());
        let stats = store.stats();

        let system_notifications = notifications::system_notifications_supported();
        if settings.notifications && !system_notifications {
            log::info!("System notifications unavailable; reminders will use in-app notices");
        }

        let mut scheduler = ReminderScheduler::new();
        let armed = scheduler.rearm(store.reminders(), Local::now());
        if armed > 0 {
            log::info!("Re-armed {} pending reminders", armed);
        }

        Self {
            store,
            filter: FilterSort::new(),
            feed: Feed::new(),
            scheduler,
            settings,
            stats,
            page: Page::Home,
            ui_mode: UiMode::Normal,
            input_form: None,
            search_input: String::new(),
            search_debounce: Debouncer::new(ticker::search_debounce()),
            selected_task: 0,
            selected_note: 0,
            selected_reminder: 0,
            settings_cursor: 0,
            system_notifications,
            export_dir,
        }
    }

    fn notify(&mut self, message: impl Into<String>, level: NoticeLevel) {
        self.feed
            .notify(message, level, DEFAULT_NOTICE_DURATION, Instant::now());
    }

    fn record_activity(&mut self, text: &str) {
        self.feed.record_activity(text, Local::now());
    }

    fn reject(&mut self, err: &ValidationError) {
        log::debug!("Rejected input: {}", err);
        self.notify(err.to_string(), NoticeLevel::Error);
    }

    /// Recompute dashboard counts and keep selections in range
    fn refresh(&mut self) {
        self.stats = self.store.stats();
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        let visible = self.visible_tasks().len();
        self.selected_task = self.selected_task.min(visible.saturating_sub(1));
        self.selected_note = self
            .selected_note
            .min(self.store.notes().len().saturating_sub(1));
        self.selected_reminder = self
            .selected_reminder
            .min(self.store.reminders().len().saturating_sub(1));
    }

    // ----- tasks -----

    pub fn add_task(&mut self, text: &str) -> Result<Uuid, ValidationError> {
        match self.store.add_task(text) {
            Ok(id) => {
                self.notify("Task added successfully!", NoticeLevel::Success);
                self.record_activity("Task added");
                self.refresh();
                Ok(id)
            }
            Err(e) => {
                self.reject(&e);
                Err(e)
            }
        }
    }

    pub fn set_completed(&mut self, id: Uuid, completed: bool) {
        if self.store.set_completed(id, completed) {
            self.record_activity(if completed {
                "Task completed"
            } else {
                "Task marked as incomplete"
            });
            self.refresh();
        }
    }

    pub fn set_priority(&mut self, id: Uuid, priority: Priority) {
        if self.store.set_priority(id, priority) {
            self.refresh();
        }
    }

    pub fn edit_task(&mut self, id: Uuid, text: &str) {
        if self.store.edit_text(id, text) {
            self.notify("Task updated!", NoticeLevel::Success);
            self.refresh();
        }
    }

    /// Delete a task; unknown ids are ignored
    pub fn delete_task(&mut self, id: Uuid) {
        if self.store.delete_task(id).is_some() {
            self.notify("Task deleted", NoticeLevel::Info);
            self.record_activity("Task deleted");
            self.refresh();
        }
    }

    /// Indexes into `store.tasks()` in display order, hidden tasks excluded
    pub fn visible_tasks(&self) -> Vec<usize> {
        self.filter.display_order(self.store.tasks())
    }

    pub fn selected_task_id(&self) -> Option<Uuid> {
        let visible = self.visible_tasks();
        let idx = *visible.get(self.selected_task)?;
        self.store.tasks().get(idx).map(|t| t.id)
    }

    pub fn toggle_selected_completed(&mut self) {
        if let Some(id) = self.selected_task_id() {
            let completed = self.store.task(id).map(|t| t.completed).unwrap_or(false);
            self.set_completed(id, !completed);
        }
    }

    pub fn cycle_selected_priority(&mut self) {
        if let Some(id) = self.selected_task_id() {
            if let Some(priority) = self.store.task(id).map(|t| t.priority.next()) {
                self.set_priority(id, priority);
            }
        }
    }

    pub fn delete_selected_task(&mut self) {
        if let Some(id) = self.selected_task_id() {
            self.delete_task(id);
        }
    }

    /// Move the selected task in insertion order. The selection follows it
    /// when the list is shown unsorted.
    pub fn move_selected_task(&mut self, direction: MoveDirection) {
        if let Some(id) = self.selected_task_id() {
            if self.store.move_task(id, direction) {
                if let Some(pos) = self
                    .visible_tasks()
                    .iter()
                    .position(|&i| self.store.tasks()[i].id == id)
                {
                    self.selected_task = pos;
                }
            }
        }
    }

    // ----- search and sort -----

    /// Record a keystroke in the search box; the filter updates once typing pauses
    pub fn set_search_input(&mut self, text: String, now: Instant) {
        self.search_input = text.clone();
        self.search_debounce.schedule(SEARCH_KEY, text, now);
    }

    /// Apply a search term immediately
    pub fn apply_search(&mut self, text: &str) {
        self.search_debounce.cancel(&SEARCH_KEY);
        self.search_input = text.to_string();
        self.filter.set_search_term(text);
        self.selected_task = 0;
        self.clamp_selection();
    }

    pub fn cycle_sort_mode(&mut self) -> SortMode {
        let mode = self.filter.cycle_sort_mode();
        self.clamp_selection();
        mode
    }

    // ----- notes -----

    pub fn add_note(&mut self, text: &str) -> Result<Uuid, ValidationError> {
        match self.store.add_note(text, Local::now()) {
            Ok(id) => {
                self.notify("Note added!", NoticeLevel::Success);
                self.record_activity("Note added");
                self.refresh();
                Ok(id)
            }
            Err(e) => {
                self.reject(&e);
                Err(e)
            }
        }
    }

    pub fn delete_note(&mut self, id: Uuid) {
        if self.store.delete_note(id).is_some() {
            self.refresh();
        }
    }

    pub fn delete_selected_note(&mut self) {
        if let Some(id) = self.store.notes().get(self.selected_note).map(|n| n.id) {
            self.delete_note(id);
        }
    }

    // ----- reminders -----

    pub fn add_reminder(&mut self, text: &str, time: &str) -> Result<Uuid, ValidationError> {
        match self.store.add_reminder(text, time) {
            Ok(id) => {
                if let Some(reminder) = self.store.reminders().iter().find(|r| r.id == id) {
                    if let Some(at) = reminder.fire_at() {
                        self.scheduler.schedule(id, &reminder.text, at, Local::now());
                    }
                }
                self.notify("Reminder set!", NoticeLevel::Success);
                self.record_activity("Reminder set");
                self.refresh();
                Ok(id)
            }
            Err(e) => {
                self.reject(&e);
                Err(e)
            }
        }
    }

    pub fn delete_reminder(&mut self, id: Uuid) {
        if self.store.delete_reminder(id).is_some() {
            self.scheduler.cancel(id);
            self.refresh();
        }
    }

    pub fn delete_selected_reminder(&mut self) {
        if let Some(id) = self
            .store
            .reminders()
            .get(self.selected_reminder)
            .map(|r| r.id)
        {
            self.delete_reminder(id);
        }
    }

    /// Deliver a fired reminder: system notification when permitted, in-app notice otherwise
    fn fire_reminder(&mut self, due: DueReminder) {
        log::info!("Reminder due: {}", due.text);
        let delivered = self.settings.notifications
            && self.system_notifications
            && notifications::notify_reminder(&due.text, self.settings.sound);

        if !delivered {
            self.feed.notify(
                format!("Reminder: {}", due.text),
                NoticeLevel::Info,
                ticker::reminder_notice_duration(),
                Instant::now(),
            );
        }
    }

    // ----- timers -----

    /// Run deferred work: debounced search, due reminders, notice expiry
    pub fn tick(&mut self, now: Instant, wall_clock: DateTime<Local>) {
        for (_, term) in self.search_debounce.take_due(now) {
            self.filter.set_search_term(&term);
            self.selected_task = 0;
            self.clamp_selection();
        }

        for due in self.scheduler.poll(wall_clock) {
            self.fire_reminder(due);
        }

        self.feed.expire(now);
    }

    // ----- navigation -----

    pub fn navigate(&mut self, page: Page) {
        if self.page == page {
            return;
        }
        self.page = page;
        self.record_activity(&format!("Navigated to {}", page.name()));
    }

    // ----- settings -----

    fn save_setting(&mut self, result: Result<()>) {
        if let Err(e) = result {
            log::error!("Failed to save setting: {:#}", e);
        }
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.settings.theme = theme;
        let result = save_theme(self.store.storage_mut(), theme);
        self.save_setting(result);
        self.notify(format!("Theme changed to {}", theme.to_tag()), NoticeLevel::Success);
    }

    pub fn adjust_font_size(&mut self, delta: i8) {
        let size = clamp_font_size(self.settings.font_size.saturating_add_signed(delta));
        if size != self.settings.font_size {
            self.settings.font_size = size;
            let result = save_font_size(self.store.storage_mut(), size);
            self.save_setting(result);
        }
    }

    pub fn toggle_notifications(&mut self) {
        self.settings.notifications = !self.settings.notifications;
        let result = save_notifications(self.store.storage_mut(), self.settings.notifications);
        self.save_setting(result);
    }

    pub fn toggle_sound(&mut self) {
        self.settings.sound = !self.settings.sound;
        let result = save_sound(self.store.storage_mut(), self.settings.sound);
        self.save_setting(result);
    }

    /// Write a backup of the stored data into the export directory
    pub fn export(&mut self) -> Result<PathBuf> {
        match write_export(self.store.storage(), &self.export_dir, Utc::now()) {
            Ok(path) => {
                log::info!("Exported data to {}", path.display());
                self.notify("Data exported successfully!", NoticeLevel::Success);
                Ok(path)
            }
            Err(e) => {
                log::error!("Export failed: {:#}", e);
                self.notify("Export failed", NoticeLevel::Error);
                Err(e)
            }
        }
    }

    /// Wipe every stored key and reset to a fresh state
    pub fn clear_all_data(&mut self) {
        log::warn!("Clearing all data");
        self.store.clear_all();
        self.scheduler.clear();
        self.settings = Settings::default();
        self.apply_search("");
        self.refresh();
        self.notify("All data cleared", NoticeLevel::Info);
    }

    // ----- input forms -----

    pub fn start_form(&mut self, kind: FormKind) {
        let (text, time) = match kind {
            FormKind::EditTask(id) => (
                self.store.task(id).map(|t| t.text.clone()).unwrap_or_default(),
                String::new(),
            ),
            FormKind::Reminder => (
                String::new(),
                (Local::now() + chrono::Duration::hours(1))
                    .format("%Y-%m-%d %H:%M")
                    .to_string(),
            ),
            _ => (String::new(), String::new()),
        };

        self.input_form = Some(InputFormState {
            kind,
            text,
            time,
            editing_field: 0,
        });
        self.ui_mode = match kind {
            FormKind::EditTask(_) => UiMode::EditingTask,
            _ => UiMode::Adding,
        };
    }

    pub fn input_form_toggle_field(&mut self) {
        if let Some(form) = &mut self.input_form {
            form.editing_field = (form.editing_field + 1) % form.field_count();
        }
    }

    pub fn input_form_add_char(&mut self, c: char) {
        if let Some(form) = &mut self.input_form {
            match form.editing_field {
                0 => form.text.push(c),
                _ => form.time.push(c),
            }
        }
    }

    pub fn input_form_backspace(&mut self) {
        if let Some(form) = &mut self.input_form {
            match form.editing_field {
                0 => {
                    form.text.pop();
                }
                _ => {
                    form.time.pop();
                }
            }
        }
    }

    /// Submit the form. Invalid input keeps the form open so it can be fixed.
    pub fn submit_input_form(&mut self) {
        let Some(form) = self.input_form.clone() else {
            return;
        };

        let accepted = match form.kind {
            FormKind::Task => self.add_task(&form.text).is_ok(),
            FormKind::Note => self.add_note(&form.text).is_ok(),
            FormKind::Reminder => self.add_reminder(&form.text, &form.time).is_ok(),
            FormKind::EditTask(id) => {
                self.edit_task(id, &form.text);
                true
            }
        };

        if accepted {
            self.cancel_input_form();
        }
    }

    pub fn cancel_input_form(&mut self) {
        self.input_form = None;
        self.ui_mode = UiMode::Normal;
    }

    // ----- selection -----

    pub fn move_selection_up(&mut self) {
        match self.page {
            Page::Tasks => self.selected_task = self.selected_task.saturating_sub(1),
            Page::Notes => self.selected_note = self.selected_note.saturating_sub(1),
            Page::Reminders => self.selected_reminder = self.selected_reminder.saturating_sub(1),
            Page::Settings => self.settings_cursor = self.settings_cursor.saturating_sub(1),
            _ => {}
        }
    }

    pub fn move_selection_down(&mut self) {
        let (cursor, len) = match self.page {
            Page::Tasks => (&mut self.selected_task, self.filter.display_order(self.store.tasks()).len()),
            Page::Notes => (&mut self.selected_note, self.store.notes().len()),
            Page::Reminders => (&mut self.selected_reminder, self.store.reminders().len()),
            Page::Settings => (&mut self.settings_cursor, SettingsRow::all().len()),
            _ => return,
        };
        if *cursor + 1 < len {
            *cursor += 1;
        }
    }

    pub fn selected_settings_row(&self) -> SettingsRow {
        let rows = SettingsRow::all();
        rows[self.settings_cursor.min(rows.len() - 1)]
    }
}
