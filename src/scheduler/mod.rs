pub mod debounce;
pub mod reminders;

pub use debounce::Debouncer;
pub use reminders::{DueReminder, ReminderScheduler};
