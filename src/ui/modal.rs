use crate::app::AppState;
use crate::ui::{
    layout::create_modal_area,
    styles::{modal_bg_style, modal_title_style, notice_style},
};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render the newest transient notice in the banner row
pub fn render_notice(f: &mut Frame, app: &AppState, area: Rect) {
    if let Some(notice) = app.feed.current_notice() {
        let paragraph = Paragraph::new(Line::raw(notice.message.as_str()))
            .alignment(Alignment::Center)
            .style(notice_style(notice.level));
        f.render_widget(paragraph, area);
    }
}

/// Confirmation prompt before wiping all data
pub fn render_confirm_clear(f: &mut Frame, area: Rect) {
    let modal_area = create_modal_area(area, 7);
    f.render_widget(Clear, modal_area);

    let lines = vec![
        Line::raw(""),
        Line::raw("Are you sure you want to clear all data?"),
        Line::raw("This action cannot be undone."),
        Line::raw(""),
        Line::from(vec![
            Span::styled("y", modal_title_style()),
            Span::raw(" confirm   any other key cancels"),
        ]),
    ];

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(" Clear Data ", modal_title_style()))
            .style(modal_bg_style()),
    );
    f.render_widget(paragraph, modal_area);
}
