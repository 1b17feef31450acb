use chrono::{DateTime, Local};
use std::time::{Duration, Instant};

/// Number of entries kept in the recent-activity log
pub const MAX_ACTIVITY: usize = 5;

/// How long a notice stays on screen unless told otherwise
pub const DEFAULT_NOTICE_DURATION: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

/// Transient banner message
#[derive(Debug, Clone)]
pub struct Notice {
    pub message: String,
    pub level: NoticeLevel,
    pub expires_at: Instant,
}

/// Entry in the recent-activity log
#[derive(Debug, Clone)]
pub struct Activity {
    pub text: String,
    pub at: DateTime<Local>,
}

impl Activity {
    /// "Just now", "3m ago", "2h ago", or the date for older entries
    pub fn age_label(&self, now: DateTime<Local>) -> String {
        let age = now - self.at;
        if age.num_minutes() < 1 {
            "Just now".to_string()
        } else if age.num_hours() < 1 {
            format!("{}m ago", age.num_minutes())
        } else if age.num_days() < 1 {
            format!("{}h ago", age.num_hours())
        } else {
            self.at.format("%b %-d").to_string()
        }
    }
}

/// Notices and the bounded activity log
#[derive(Debug, Default)]
pub struct Feed {
    notices: Vec<Notice>,
    activity: Vec<Activity>,
}

impl Feed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notify(&mut self, message: impl Into<String>, level: NoticeLevel, duration: Duration, now: Instant) {
        self.notices.push(Notice {
            message: message.into(),
            level,
            expires_at: now + duration,
        });
    }

    /// Drop notices whose time is up
    pub fn expire(&mut self, now: Instant) {
        self.notices.retain(|n| n.expires_at > now);
    }

    /// Newest live notice
    pub fn current_notice(&self) -> Option<&Notice> {
        self.notices.last()
    }

    /// Most recent first, at most MAX_ACTIVITY entries
    pub fn record_activity(&mut self, text: impl Into<String>, at: DateTime<Local>) {
        self.activity.insert(
            0,
            Activity {
                text: text.into(),
                at,
            },
        );
        self.activity.truncate(MAX_ACTIVITY);
    }

    pub fn activity(&self) -> &[Activity] {
        &self.activity
    }
}
