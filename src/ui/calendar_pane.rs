use crate::domain::month_grid;
use crate::ui::styles::{weekend_style, Palette};
use chrono::{Local, NaiveDate};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Build the calendar lines for the month containing `today`
pub fn calendar_lines(today: NaiveDate, palette: &Palette) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::styled(today.format("%B %Y").to_string(), palette.title()),
        Line::raw(""),
        Line::styled(
            WEEKDAYS.iter().map(|d| format!("{:>4}", d)).collect::<String>(),
            palette.hint(),
        ),
    ];

    for week in month_grid(today) {
        let spans: Vec<Span> = week
            .iter()
            .map(|cell| {
                let label = cell.day.map(|d| format!("{:>4}", d)).unwrap_or_else(|| "    ".to_string());
                let style = if cell.is_today {
                    palette.selected()
                } else if cell.is_weekend {
                    weekend_style()
                } else {
                    palette.base()
                };
                Span::styled(label, style)
            })
            .collect();
        lines.push(Line::from(spans));
    }

    lines
}

pub fn render_calendar_pane(f: &mut Frame, area: Rect, palette: &Palette) {
    let today = Local::now().date_naive();
    let paragraph = Paragraph::new(calendar_lines(today, palette)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Calendar ")
            .style(palette.border()),
    );
    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Theme;

    #[test]
    fn test_calendar_lines() {
        let palette = Palette::for_theme(Theme::Default);
        let today = NaiveDate::from_ymd_opt(2024, 9, 14).unwrap();
        let lines = calendar_lines(today, &palette);

        // title, blank, weekday header, then 5 weeks for September 2024
        assert_eq!(lines.len(), 3 + 5);
        assert_eq!(lines[0].spans[0].content, "September 2024");
        assert_eq!(lines[3].spans.len(), 7);
    }
}
