use crate::app::AppState;
use crate::domain::date_facts;
use crate::ui::layout::split_home;
use crate::ui::styles::Palette;
use chrono::Local;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Render the home page: clock, counters and recent activity
pub fn render_home_pane(f: &mut Frame, app: &AppState, area: Rect, palette: &Palette) {
    let (clock_area, stats_area, activity_area) = split_home(area);
    let now = Local::now();

    let clock = Paragraph::new(vec![
        Line::styled(now.format("%A, %B %-d, %Y").to_string(), palette.title()),
        Line::raw(now.format("%I:%M:%S %p").to_string()),
        Line::styled(date_facts(now.date_naive()), palette.hint()),
    ])
    .style(palette.base())
    .block(Block::default().borders(Borders::ALL).title(" Today ").style(palette.border()));
    f.render_widget(clock, clock_area);

    let stats = app.stats;
    let rows = [
        ("Total tasks", stats.total_tasks),
        ("Completed", stats.completed_tasks),
        ("Notes", stats.total_notes),
        ("Active reminders", stats.total_reminders),
    ];
    let lines: Vec<Line> = rows
        .iter()
        .map(|(label, count)| {
            Line::from(vec![
                Span::styled(format!("{:>18}  ", label), palette.hint()),
                Span::styled(count.to_string(), palette.title()),
            ])
        })
        .collect();
    let stats_widget = Paragraph::new(lines)
        .style(palette.base())
        .block(Block::default().borders(Borders::ALL).title(" Overview ").style(palette.border()));
    f.render_widget(stats_widget, stats_area);

    let items: Vec<ListItem> = if app.feed.activity().is_empty() {
        vec![ListItem::new(Line::styled("No activity yet", palette.hint()))]
    } else {
        app.feed
            .activity()
            .iter()
            .map(|a| {
                ListItem::new(Line::from(vec![
                    Span::styled("• ", palette.title()),
                    Span::styled(a.text.clone(), palette.base()),
                    Span::styled(format!("  {}", a.age_label(now)), palette.hint()),
                ]))
            })
            .collect()
    };
    let activity = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Recent Activity ")
            .style(palette.border()),
    );
    f.render_widget(activity, activity_area);
}
