pub mod collections;
pub mod export;
pub mod files;
pub mod settings;
pub mod storage;

pub use collections::{format_legacy_reminder, load_notes, load_reminders, load_tasks, save_collection};
pub use export::write_export;
pub use files::{ensure_data_dir, init_local_data_dir, log_file};
pub use settings::{load_settings, Settings};
#[cfg(test)]
pub use storage::MemoryStore;
pub use storage::{FileStore, KeyValueStore};
