use crate::app::AppState;
use crate::ui::styles::Palette;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

/// Render the notes list, newest last
pub fn render_notes_pane(f: &mut Frame, app: &AppState, area: Rect, palette: &Palette) {
    let items: Vec<ListItem> = app
        .store
        .notes()
        .iter()
        .map(|note| {
            ListItem::new(vec![
                Line::styled(note.text.as_str(), palette.base()),
                Line::from(Span::styled(format!("  {}", note.timestamp), palette.hint())),
            ])
        })
        .collect();

    let mut state = ListState::default();
    if !items.is_empty() {
        state.select(Some(app.selected_note));
    }

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Notes ({}) ", app.stats.total_notes))
                .style(palette.border()),
        )
        .highlight_style(palette.selected());
    f.render_stateful_widget(list, area, &mut state);
}
