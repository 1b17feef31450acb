use serde::{Deserialize, Deserializer, Serialize};

/// Task priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// Parse priority from its stored tag ("low", "medium", "high")
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.to_lowercase().as_str() {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }

    pub fn to_tag(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Sort rank: high first, low last
    pub fn rank(&self) -> u8 {
        match self {
            Self::High => 0,
            Self::Medium => 1,
            Self::Low => 2,
        }
    }

    /// Next priority when cycling with a single key
    pub fn next(&self) -> Self {
        match self {
            Self::Low => Self::Medium,
            Self::Medium => Self::High,
            Self::High => Self::Low,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

// Unknown or missing priorities fall back to medium instead of failing the whole load.
impl<'de> Deserialize<'de> for Priority {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let tag = Option::<String>::deserialize(deserializer)?;
        Ok(tag
            .as_deref()
            .and_then(Priority::from_tag)
            .unwrap_or_default())
    }
}

/// Display order applied by the filter/sort engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    #[default]
    Default,
    Priority,
    Alphabetical,
}

impl SortMode {
    /// default -> priority -> alphabetical -> default
    pub fn next(&self) -> Self {
        match self {
            Self::Default => Self::Priority,
            Self::Priority => Self::Alphabetical,
            Self::Alphabetical => Self::Default,
        }
    }

    /// Label shown on the sort control
    pub fn label(&self) -> &'static str {
        match self {
            Self::Default => "Sort: Default",
            Self::Priority => "Sort: Priority",
            Self::Alphabetical => "Sort: A-Z",
        }
    }
}

/// Colour theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Default,
    Neon,
    Dark,
}

impl Theme {
    /// Parse a stored theme name. Legacy "pastel" and "" mean the default theme.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_lowercase().as_str() {
            "" | "default" | "pastel" => Some(Self::Default),
            "neon" => Some(Self::Neon),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn to_tag(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Neon => "neon",
            Self::Dark => "dark",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Self::Default => Self::Neon,
            Self::Neon => Self::Dark,
            Self::Dark => Self::Default,
        }
    }
}

/// Storage collections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Tasks,
    Notes,
    Reminders,
}

impl ItemKind {
    /// Storage key for the collection
    pub fn key(&self) -> &'static str {
        match self {
            Self::Tasks => "tasks",
            Self::Notes => "notes",
            Self::Reminders => "reminders",
        }
    }
}

/// Pages of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    Tasks,
    Notes,
    Reminders,
    Calendar,
    Settings,
}

impl Page {
    pub fn all() -> &'static [Page] {
        &[
            Page::Home,
            Page::Tasks,
            Page::Notes,
            Page::Reminders,
            Page::Calendar,
            Page::Settings,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Tasks => "Tasks",
            Page::Notes => "Notes",
            Page::Reminders => "Reminders",
            Page::Calendar => "Calendar",
            Page::Settings => "Settings",
        }
    }

    pub fn index(&self) -> usize {
        Page::all().iter().position(|p| p == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        let pages = Page::all();
        pages[(self.index() + 1) % pages.len()]
    }

    pub fn previous(&self) -> Self {
        let pages = Page::all();
        pages[(self.index() + pages.len() - 1) % pages.len()]
    }
}

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    /// Typing into the task search box
    Searching,
    /// Input form for a new task, note or reminder
    Adding,
    /// Input form editing an existing task's text
    EditingTask,
    /// Waiting for confirmation before wiping all data
    ConfirmClear,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_from_tag() {
        assert_eq!(Priority::from_tag("low"), Some(Priority::Low));
        assert_eq!(Priority::from_tag("HIGH"), Some(Priority::High));
        assert_eq!(Priority::from_tag("urgent"), None);
    }

    #[test]
    fn test_priority_rank_order() {
        assert!(Priority::High.rank() < Priority::Medium.rank());
        assert!(Priority::Medium.rank() < Priority::Low.rank());
    }

    #[test]
    fn test_priority_deserialize_falls_back_to_medium() {
        let p: Priority = serde_json::from_str("\"bogus\"").unwrap();
        assert_eq!(p, Priority::Medium);
        let p: Priority = serde_json::from_str("null").unwrap();
        assert_eq!(p, Priority::Medium);
        let p: Priority = serde_json::from_str("\"high\"").unwrap();
        assert_eq!(p, Priority::High);
    }

    #[test]
    fn test_sort_mode_cycle() {
        let mode = SortMode::Default;
        assert_eq!(mode.next(), SortMode::Priority);
        assert_eq!(mode.next().next(), SortMode::Alphabetical);
        assert_eq!(mode.next().next().next(), SortMode::Default);
    }

    #[test]
    fn test_theme_from_legacy_tag() {
        assert_eq!(Theme::from_tag("pastel"), Some(Theme::Default));
        assert_eq!(Theme::from_tag(""), Some(Theme::Default));
        assert_eq!(Theme::from_tag("neon"), Some(Theme::Neon));
        assert_eq!(Theme::from_tag("sepia"), None);
    }

    #[test]
    fn test_page_navigation_wraps() {
        assert_eq!(Page::Home.previous(), Page::Settings);
        assert_eq!(Page::Settings.next(), Page::Home);
    }
}
