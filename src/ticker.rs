use std::time::Duration;

/// Event loop tick interval in milliseconds
pub const DEFAULT_TICK_MS: u64 = 250;

/// Quiet period before a search term is applied
pub const SEARCH_DEBOUNCE_MS: u64 = 300;

/// How long a fired reminder's in-app notice stays up
pub const REMINDER_NOTICE_MS: u64 = 5000;

pub fn tick_duration() -> Duration {
    Duration::from_millis(DEFAULT_TICK_MS)
}

pub fn search_debounce() -> Duration {
    Duration::from_millis(SEARCH_DEBOUNCE_MS)
}

pub fn reminder_notice_duration() -> Duration {
    Duration::from_millis(REMINDER_NOTICE_MS)
}
