use crate::app::AppState;
use crate::domain::{Task, UiMode};
use crate::ui::layout::split_tasks;
use crate::ui::styles::{done_style, priority_style, Palette};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

fn task_line<'a>(task: &'a Task, palette: &Palette) -> Line<'a> {
    let checkbox = if task.completed { "[x] " } else { "[ ] " };
    let text_style = if task.completed {
        done_style()
    } else {
        palette.base()
    };

    Line::from(vec![
        Span::styled(checkbox, palette.hint()),
        Span::styled(task.text.as_str(), text_style),
        Span::raw("  "),
        Span::styled(
            format!("({})", task.priority.label()),
            priority_style(task.priority),
        ),
    ])
}

/// Render the task list with its search box and sort label
pub fn render_tasks_pane(f: &mut Frame, app: &AppState, area: Rect, palette: &Palette) {
    let (header_area, list_area) = split_tasks(area);
    let searching = app.ui_mode == UiMode::Searching;

    let search_text = if searching {
        format!("🔍 {}█", app.search_input)
    } else if app.search_input.is_empty() {
        "🔍 press / to search".to_string()
    } else {
        format!("🔍 {}", app.search_input)
    };
    let header = Paragraph::new(Line::from(vec![
        Span::styled(search_text, palette.base()),
        Span::raw("    "),
        Span::styled(app.filter.sort_mode().label(), palette.title()),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .style(if searching { palette.selected() } else { palette.border() }),
    );
    f.render_widget(header, header_area);

    let tasks = app.store.tasks();
    let items: Vec<ListItem> = app
        .visible_tasks()
        .into_iter()
        .map(|i| ListItem::new(task_line(&tasks[i], palette)))
        .collect();

    let title = format!(" Tasks · {} ", app.stats.task_summary());
    let empty = items.is_empty();
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title).style(palette.border()))
        .highlight_style(palette.selected());

    let mut state = ListState::default();
    if !empty {
        state.select(Some(app.selected_task));
    }
    f.render_stateful_widget(list, list_area, &mut state);
}
