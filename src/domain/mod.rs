pub mod enums;
pub mod item;
pub mod views;

pub use enums::{ItemKind, Page, Priority, SortMode, Theme, UiMode};
pub use item::{parse_local_datetime, Note, Reminder, Task, REMINDER_TIME_FORMAT};
pub use views::{date_facts, month_grid, DashboardStats};
