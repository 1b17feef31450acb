//! System notifications for reminders.
//! Only macOS has a system notifier; elsewhere delivery reports failure and
//! the caller falls back to an in-app notice.

#[cfg(target_os = "macos")]
use std::process::Command;

/// Title used for reminder notifications
#[cfg(target_os = "macos")]
pub const REMINDER_TITLE: &str = "Task Reminder";

/// Raise a system notification. Returns true if it was delivered.
pub fn notify_reminder(text: &str, with_sound: bool) -> bool {
    #[cfg(target_os = "macos")]
    {
        let mut script = format!(
            r#"display notification "{}" with title "{}""#,
            escape(text),
            REMINDER_TITLE
        );
        if with_sound {
            script.push_str(r#" sound name "default""#);
        }

        match Command::new("osascript").arg("-e").arg(&script).output() {
            Ok(output) if output.status.success() => true,
            Ok(output) => {
                log::warn!("osascript exited with {}", output.status);
                false
            }
            Err(e) => {
                log::warn!("Failed to run osascript: {}", e);
                false
            }
        }
    }

    #[cfg(not(target_os = "macos"))]
    {
        let _ = (text, with_sound);
        false
    }
}

#[cfg(target_os = "macos")]
fn escape(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Whether this platform can raise system notifications at all
pub fn system_notifications_supported() -> bool {
    cfg!(target_os = "macos")
}
