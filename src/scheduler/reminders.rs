use crate::domain::Reminder;
use chrono::{DateTime, Local};
use uuid::Uuid;

/// A reminder whose time has come
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DueReminder {
    pub id: Uuid,
    pub text: String,
    pub fire_at: DateTime<Local>,
}

/// One-shot timers for reminders, polled from the tick loop
#[derive(Debug, Default)]
pub struct ReminderScheduler {
    /// Kept sorted by fire time
    pending: Vec<DueReminder>,
}

impl ReminderScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm a timer. Returns false (and arms nothing) when `fire_at` is not in the future.
    pub fn schedule(&mut self, id: Uuid, text: &str, fire_at: DateTime<Local>, now: DateTime<Local>) -> bool {
        if fire_at <= now {
            return false;
        }

        self.cancel(id);
        let pos = self.pending.partition_point(|p| p.fire_at <= fire_at);
        self.pending.insert(
            pos,
            DueReminder {
                id,
                text: text.to_string(),
                fire_at,
            },
        );
        true
    }

    /// Arm timers for every stored reminder still in the future. Returns how many were armed.
    pub fn rearm(&mut self, reminders: &[Reminder], now: DateTime<Local>) -> usize {
        let mut armed = 0;
        for reminder in reminders {
            if let Some(at) = reminder.fire_at() {
                if self.schedule(reminder.id, &reminder.text, at, now) {
                    armed += 1;
                }
            }
        }
        armed
    }

    pub fn cancel(&mut self, id: Uuid) -> bool {
        let before = self.pending.len();
        self.pending.retain(|p| p.id != id);
        self.pending.len() != before
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Remove and return due timers in fire order
    pub fn poll(&mut self, now: DateTime<Local>) -> Vec<DueReminder> {
        let split = self.pending.partition_point(|p| p.fire_at <= now);
        self.pending.drain(..split).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_past_times_are_not_armed() {
        let mut scheduler = ReminderScheduler::new();
        let now = Local::now();

        assert!(!scheduler.schedule(Uuid::new_v4(), "late", now - Duration::minutes(1), now));
        assert!(!scheduler.schedule(Uuid::new_v4(), "now", now, now));
        assert_eq!(scheduler.pending_count(), 0);
    }

    #[test]
    fn test_poll_returns_due_in_order() {
        let mut scheduler = ReminderScheduler::new();
        let now = Local::now();

        scheduler.schedule(Uuid::new_v4(), "second", now + Duration::minutes(10), now);
        scheduler.schedule(Uuid::new_v4(), "first", now + Duration::minutes(5), now);
        scheduler.schedule(Uuid::new_v4(), "later", now + Duration::hours(1), now);

        assert!(scheduler.poll(now + Duration::minutes(1)).is_empty());

        let due = scheduler.poll(now + Duration::minutes(10));
        let texts: Vec<&str> = due.iter().map(|d| d.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second"]);
        assert_eq!(scheduler.pending_count(), 1);

        // One-shot: already fired timers don't fire again
        assert!(scheduler.poll(now + Duration::minutes(30)).is_empty());
    }

    #[test]
    fn test_cancel() {
        let mut scheduler = ReminderScheduler::new();
        let now = Local::now();
        let id = Uuid::new_v4();

        scheduler.schedule(id, "gym", now + Duration::minutes(5), now);
        assert!(scheduler.cancel(id));
        assert!(!scheduler.cancel(id));
        assert!(scheduler.poll(now + Duration::hours(1)).is_empty());
    }

    #[test]
    fn test_rearm_skips_past_and_unparseable() {
        let mut scheduler = ReminderScheduler::new();
        let now = Local::now();
        let fmt = crate::domain::REMINDER_TIME_FORMAT;

        let reminders = vec![
            Reminder::new("future".to_string(), (now + Duration::days(1)).format(fmt).to_string()),
            Reminder::new("past".to_string(), (now - Duration::days(1)).format(fmt).to_string()),
            Reminder::new("legacy".to_string(), "Jan 2, 09:30 AM".to_string()),
        ];

        assert_eq!(scheduler.rearm(&reminders, now), 1);
        let due = scheduler.poll(now + Duration::days(2));
        assert_eq!(due[0].text, "future");
    }
}
