use super::files::{atomic_write, export_file_name};
use super::settings::{read_scalar, FONT_SIZE_KEY, THEME_KEY};
use super::storage::KeyValueStore;
use crate::domain::ItemKind;
use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Backup document written by the export command
#[derive(Debug, Serialize)]
pub struct ExportDocument {
    pub tasks: Value,
    pub notes: Value,
    pub reminders: Value,
    pub theme: Option<String>,
    #[serde(rename = "fontSize")]
    pub font_size: Option<String>,
    pub timestamp: String,
}

/// Snapshot the stored data as it is on disk (not the in-memory state)
pub fn build_export(store: &dyn KeyValueStore, now: DateTime<Utc>) -> ExportDocument {
    ExportDocument {
        tasks: stored_array(store, ItemKind::Tasks),
        notes: stored_array(store, ItemKind::Notes),
        reminders: stored_array(store, ItemKind::Reminders),
        theme: read_scalar(store, THEME_KEY),
        font_size: read_scalar(store, FONT_SIZE_KEY),
        timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
    }
}

fn stored_array(store: &dyn KeyValueStore, kind: ItemKind) -> Value {
    store
        .get(kind.key())
        .ok()
        .flatten()
        .and_then(|raw| serde_json::from_str::<Value>(&raw).ok())
        .filter(|v| !v.is_null())
        .unwrap_or_else(|| Value::Array(Vec::new()))
}

/// Write the export into `output` (a directory or a file path). Returns the file written.
pub fn write_export(store: &dyn KeyValueStore, output: &Path, now: DateTime<Utc>) -> Result<PathBuf> {
    let path = if output.is_dir() {
        output.join(export_file_name(now.date_naive()))
    } else {
        output.to_path_buf()
    };

    let document = build_export(store, now);
    let json = serde_json::to_string_pretty(&document).context("Failed to serialize export")?;
    atomic_write(&path, &json)?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;
    use chrono::TimeZone;

    #[test]
    fn test_build_export_fields() {
        let mut store = MemoryStore::new();
        store
            .set("tasks", r#"[{"text":"a","completed":false,"priority":"low"}]"#)
            .unwrap();
        store.set("theme", "\"neon\"").unwrap();
        store.set("notes", "{broken").unwrap();

        let now = Utc.with_ymd_and_hms(2024, 5, 9, 12, 0, 0).unwrap();
        let doc = build_export(&store, now);
        let json = serde_json::to_value(&doc).unwrap();

        assert_eq!(json["tasks"][0]["priority"], "low");
        assert_eq!(json["notes"], serde_json::json!([]));
        assert_eq!(json["reminders"], serde_json::json!([]));
        assert_eq!(json["theme"], "neon");
        assert_eq!(json["fontSize"], Value::Null);
        assert_eq!(json["timestamp"], "2024-05-09T12:00:00.000Z");
    }

    #[test]
    fn test_export_name_uses_utc_date() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = MemoryStore::new();
        let now = Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 30).unwrap();

        let path = write_export(&store, temp_dir.path(), now).unwrap();
        assert_eq!(
            path.file_name().unwrap().to_string_lossy(),
            "dashboard-backup-2024-12-31.json"
        );

        let content = std::fs::read_to_string(path).unwrap();
        let json: Value = serde_json::from_str(&content).unwrap();
        assert_eq!(json["timestamp"], "2024-12-31T23:59:30.000Z");
    }

    #[test]
    fn test_write_export_into_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = MemoryStore::new();
        let now = Utc.with_ymd_and_hms(2024, 5, 9, 12, 0, 0).unwrap();

        let path = write_export(&store, temp_dir.path(), now).unwrap();
        assert!(path.exists());
        let name = path.file_name().unwrap().to_string_lossy().to_string();
        assert_eq!(name, "dashboard-backup-2024-05-09.json");

        let content = std::fs::read_to_string(path).unwrap();
        let json: Value = serde_json::from_str(&content).unwrap();
        assert_eq!(json["tasks"], serde_json::json!([]));
    }
}
