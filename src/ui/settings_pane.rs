use crate::app::{AppState, SettingsRow};
use crate::ui::styles::Palette;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

fn on_off(value: bool) -> &'static str {
    if value {
        "on"
    } else {
        "off"
    }
}

fn row_text(app: &AppState, row: SettingsRow) -> (String, String) {
    let settings = &app.settings;
    match row {
        SettingsRow::Theme => ("Theme".into(), settings.theme.to_tag().into()),
        SettingsRow::FontSize => ("Font size".into(), format!("◀ {}px ▶", settings.font_size)),
        SettingsRow::Notifications => {
            let value = if settings.notifications && !app.system_notifications {
                "on (in-app only)".to_string()
            } else {
                on_off(settings.notifications).to_string()
            };
            ("Notifications".into(), value)
        }
        SettingsRow::Sound => ("Sound".into(), on_off(settings.sound).into()),
        SettingsRow::Export => (
            "Export data".into(),
            format!("→ {}", app.export_dir.display()),
        ),
        SettingsRow::ClearData => ("Clear all data".into(), String::new()),
    }
}

pub fn render_settings_pane(f: &mut Frame, app: &AppState, area: Rect, palette: &Palette) {
    let items: Vec<ListItem> = SettingsRow::all()
        .iter()
        .map(|row| {
            let (label, value) = row_text(app, *row);
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:<16}", label), palette.base()),
                Span::styled(value, palette.title()),
            ]))
        })
        .collect();

    let mut state = ListState::default();
    state.select(Some(app.settings_cursor));

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Settings ")
                .style(palette.border()),
        )
        .highlight_style(palette.selected());
    f.render_stateful_widget(list, area, &mut state);
}
