use crate::app::{AppState, FormKind};
use crate::ui::{
    layout::create_modal_area,
    styles::{modal_bg_style, modal_title_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

fn field_lines<'a>(label: &'a str, value: &'a str, editing: bool) -> Vec<Line<'a>> {
    let label = if editing {
        format!("{} (editing)", label)
    } else {
        label.to_string()
    };

    vec![
        Line::raw(label),
        Line::from(vec![
            Span::raw("> "),
            Span::styled(value, modal_title_style()),
            if editing {
                Span::styled("█", modal_title_style()) // Cursor
            } else {
                Span::raw("")
            },
        ]),
        Line::raw(""),
    ]
}

/// Render the input form for adding or editing an item
pub fn render_input_form(f: &mut Frame, app: &AppState, area: Rect) {
    if let Some(form) = &app.input_form {
        let modal_area = create_modal_area(area, 12);
        f.render_widget(Clear, modal_area);

        let title_text = match form.kind {
            FormKind::Task => " Add Task ",
            FormKind::Note => " Add Note ",
            FormKind::Reminder => " Set Reminder ",
            FormKind::EditTask(_) => " Edit Task ",
        };

        let mut lines = vec![Line::raw("")];
        lines.extend(field_lines("Text:", &form.text, form.editing_field == 0));
        if form.kind == FormKind::Reminder {
            lines.extend(field_lines(
                "When (YYYY-MM-DD HH:MM):",
                &form.time,
                form.editing_field == 1,
            ));
            lines.push(Line::raw("Tab to switch fields  ·  Enter to save  ·  Esc to cancel"));
        } else {
            lines.push(Line::raw("Enter to save  ·  Esc to cancel"));
        }

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Span::styled(title_text, modal_title_style()))
                    .style(modal_bg_style()),
            )
            .wrap(Wrap { trim: false });

        f.render_widget(paragraph, modal_area);
    }
}
