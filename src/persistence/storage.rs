//! Key-value storage backing the dashboard.
//!
//! Values are JSON strings. `FileStore` keeps one `<key>.json` file per key so
//! that a write for one collection never rewrites another.

use super::files::{atomic_write, read_file};
use anyhow::{Context, Result};
#[cfg(test)]
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Every key the dashboard writes
pub const ALL_KEYS: &[&str] = &[
    "tasks",
    "notes",
    "reminders",
    "theme",
    "fontSize",
    "notifications",
    "sound",
];

/// String-valued key-value store
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;

    /// Remove every key the dashboard knows about
    fn clear(&mut self) -> Result<()> {
        for key in ALL_KEYS {
            self.remove(key)?;
        }
        Ok(())
    }
}

/// Directory-backed store
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        read_file(self.path_for(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir)
                .with_context(|| format!("Failed to create directory: {}", self.dir.display()))?;
        }
        atomic_write(self.path_for(key), value)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.path_for(key);
        if path.exists() {
            fs::remove_file(&path)
                .with_context(|| format!("Failed to remove file: {}", path.display()))?;
        }
        Ok(())
    }
}

/// In-memory store for tests
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: BTreeMap<String, String>,
}

#[cfg(test)]
impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.values.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_store_set_get_remove() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(temp_dir.path());

        assert!(store.get("tasks").unwrap().is_none());
        store.set("tasks", "[]").unwrap();
        assert_eq!(store.get("tasks").unwrap().as_deref(), Some("[]"));
        assert!(temp_dir.path().join("tasks.json").exists());

        store.remove("tasks").unwrap();
        assert!(store.get("tasks").unwrap().is_none());
    }

    #[test]
    fn test_file_store_creates_missing_dir() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(temp_dir.path().join("nested"));
        store.set("theme", "\"dark\"").unwrap();
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("\"dark\""));
    }

    #[test]
    fn test_clear_removes_known_keys_only() {
        let mut store = MemoryStore::new();
        store.set("tasks", "[]").unwrap();
        store.set("sound", "true").unwrap();
        store.set("unrelated", "1").unwrap();

        store.clear().unwrap();
        assert_eq!(store.len(), 1);
        assert!(store.get("unrelated").unwrap().is_some());
    }
}
