use crate::app::AppState;
use crate::ui::styles::Palette;
use chrono::Local;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

/// Render reminders with their time; past ones are dimmed
pub fn render_reminders_pane(f: &mut Frame, app: &AppState, area: Rect, palette: &Palette) {
    let now = Local::now();
    let items: Vec<ListItem> = app
        .store
        .reminders()
        .iter()
        .map(|reminder| {
            let past = reminder.fire_at().map(|at| at <= now).unwrap_or(true);
            let text_style = if past { palette.hint() } else { palette.base() };
            ListItem::new(Line::from(vec![
                Span::styled(reminder.text.as_str(), text_style),
                Span::styled(" 🕐 ", palette.title()),
                Span::styled(reminder.time_display(), palette.hint()),
            ]))
        })
        .collect();

    let mut state = ListState::default();
    if !items.is_empty() {
        state.select(Some(app.selected_reminder));
    }

    let title = format!(
        " Reminders ({} armed) ",
        app.scheduler.pending_count()
    );
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title).style(palette.border()))
        .highlight_style(palette.selected());
    f.render_stateful_widget(list, area, &mut state);
}
