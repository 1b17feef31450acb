use super::item::{Note, Reminder, Task};
use chrono::{Datelike, NaiveDate, Weekday};

/// Counts shown on the home page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashboardStats {
    pub total_tasks: usize,
    pub completed_tasks: usize,
    pub total_notes: usize,
    pub total_reminders: usize,
}

impl DashboardStats {
    pub fn compute(tasks: &[Task], notes: &[Note], reminders: &[Reminder]) -> Self {
        Self {
            total_tasks: tasks.len(),
            completed_tasks: tasks.iter().filter(|t| t.completed).count(),
            total_notes: notes.len(),
            total_reminders: reminders.len(),
        }
    }

    /// "<completed> / <total> completed"
    pub fn task_summary(&self) -> String {
        format!("{} / {} completed", self.completed_tasks, self.total_tasks)
    }
}

/// One cell in the calendar grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarCell {
    /// Day of month, None for padding before the first day
    pub day: Option<u32>,
    pub is_today: bool,
    pub is_weekend: bool,
}

/// Build the calendar grid for the month containing `today`.
/// Weeks start on Sunday; each row has 7 cells, the last row is padded.
pub fn month_grid(today: NaiveDate) -> Vec<Vec<CalendarCell>> {
    let first = today.with_day(1).unwrap_or(today);
    let leading = first.weekday().num_days_from_sunday() as usize;
    let days = days_in_month(today.year(), today.month());

    let mut cells = vec![
        CalendarCell {
            day: None,
            is_today: false,
            is_weekend: false,
        };
        leading
    ];

    for day in 1..=days {
        let weekday = first
            .with_day(day)
            .map(|d| d.weekday())
            .unwrap_or(Weekday::Mon);
        cells.push(CalendarCell {
            day: Some(day),
            is_today: day == today.day(),
            is_weekend: matches!(weekday, Weekday::Sat | Weekday::Sun),
        });
    }

    while cells.len() % 7 != 0 {
        cells.push(CalendarCell {
            day: None,
            is_today: false,
            is_weekend: false,
        });
    }

    cells.chunks(7).map(|week| week.to_vec()).collect()
}

/// Number of days in a month
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(30)
}

/// "Day N of YYYY • Week W"
pub fn date_facts(today: NaiveDate) -> String {
    let day_of_year = today.ordinal();
    let week_of_year = day_of_year.div_ceil(7);
    format!("Day {} of {} • Week {}", day_of_year, today.year(), week_of_year)
}
