use super::storage::KeyValueStore;
use crate::domain::Theme;
use anyhow::Result;

pub const THEME_KEY: &str = "theme";
pub const FONT_SIZE_KEY: &str = "fontSize";
pub const NOTIFICATIONS_KEY: &str = "notifications";
pub const SOUND_KEY: &str = "sound";

pub const DEFAULT_FONT_SIZE: u8 = 16;
pub const MIN_FONT_SIZE: u8 = 12;
pub const MAX_FONT_SIZE: u8 = 24;

/// User preferences, each stored under its own key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub theme: Theme,
    pub font_size: u8,
    /// Whether reminders may raise system notifications
    pub notifications: bool,
    /// Whether system notifications play a sound
    pub sound: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::Default,
            font_size: DEFAULT_FONT_SIZE,
            notifications: true,
            sound: false,
        }
    }
}

/// Read a scalar setting. Values written by us are JSON; older values may be
/// bare strings, so anything that isn't JSON is taken verbatim.
pub fn read_scalar(store: &dyn KeyValueStore, key: &str) -> Option<String> {
    let raw = match store.get(key) {
        Ok(raw) => raw?,
        Err(e) => {
            log::warn!("Failed to read setting {}: {:#}", key, e);
            return None;
        }
    };

    match serde_json::from_str::<serde_json::Value>(&raw) {
        Ok(serde_json::Value::String(s)) => Some(s),
        Ok(serde_json::Value::Null) => None,
        Ok(other) => Some(other.to_string()),
        Err(_) => Some(raw.trim().to_string()),
    }
}

fn write_scalar(store: &mut dyn KeyValueStore, key: &str, value: serde_json::Value) -> Result<()> {
    store.set(key, &value.to_string())
}

/// Load settings, falling back to defaults for missing or unreadable values
pub fn load_settings(store: &dyn KeyValueStore) -> Settings {
    let defaults = Settings::default();

    let theme = read_scalar(store, THEME_KEY)
        .and_then(|t| Theme::from_tag(&t))
        .unwrap_or(defaults.theme);

    let font_size = read_scalar(store, FONT_SIZE_KEY)
        .and_then(|s| s.parse::<u8>().ok())
        .map(clamp_font_size)
        .unwrap_or(defaults.font_size);

    // Notifications are on unless explicitly "false"; sound is off unless explicitly "true"
    let notifications = read_scalar(store, NOTIFICATIONS_KEY).as_deref() != Some("false");
    let sound = read_scalar(store, SOUND_KEY).as_deref() == Some("true");

    Settings {
        theme,
        font_size,
        notifications,
        sound,
    }
}

pub fn save_theme(store: &mut dyn KeyValueStore, theme: Theme) -> Result<()> {
    write_scalar(store, THEME_KEY, theme.to_tag().into())
}

pub fn save_font_size(store: &mut dyn KeyValueStore, size: u8) -> Result<()> {
    write_scalar(store, FONT_SIZE_KEY, clamp_font_size(size).to_string().into())
}

pub fn save_notifications(store: &mut dyn KeyValueStore, enabled: bool) -> Result<()> {
    write_scalar(store, NOTIFICATIONS_KEY, enabled.into())
}

pub fn save_sound(store: &mut dyn KeyValueStore, enabled: bool) -> Result<()> {
    write_scalar(store, SOUND_KEY, enabled.into())
}

pub fn clamp_font_size(size: u8) -> u8 {
    size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;

    #[test]
    fn test_defaults_when_empty() {
        let store = MemoryStore::new();
        assert_eq!(load_settings(&store), Settings::default());
    }

    #[test]
    fn test_save_and_load_settings() {
        let mut store = MemoryStore::new();
        save_theme(&mut store, Theme::Neon).unwrap();
        save_font_size(&mut store, 20).unwrap();
        save_notifications(&mut store, false).unwrap();
        save_sound(&mut store, true).unwrap();

        let settings = load_settings(&store);
        assert_eq!(settings.theme, Theme::Neon);
        assert_eq!(settings.font_size, 20);
        assert!(!settings.notifications);
        assert!(settings.sound);
    }

    #[test]
    fn test_legacy_bare_values() {
        let mut store = MemoryStore::new();
        store.set(THEME_KEY, "dark").unwrap();
        store.set(FONT_SIZE_KEY, "18").unwrap();
        store.set(NOTIFICATIONS_KEY, "garbage").unwrap();

        let settings = load_settings(&store);
        assert_eq!(settings.theme, Theme::Dark);
        assert_eq!(settings.font_size, 18);
        assert!(settings.notifications);
        assert!(!settings.sound);
    }

    #[test]
    fn test_font_size_is_clamped() {
        let mut store = MemoryStore::new();
        save_font_size(&mut store, 99).unwrap();
        assert_eq!(load_settings(&store).font_size, MAX_FONT_SIZE);
    }

    #[test]
    fn test_unknown_theme_falls_back() {
        let mut store = MemoryStore::new();
        store.set(THEME_KEY, "\"sepia\"").unwrap();
        assert_eq!(load_settings(&store).theme, Theme::Default);
    }
}
