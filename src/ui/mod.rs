pub mod calendar_pane;
pub mod home_pane;
pub mod input_form;
pub mod keybindings;
pub mod layout;
pub mod modal;
pub mod notes_pane;
pub mod reminders_pane;
pub mod settings_pane;
pub mod styles;
pub mod tasks_pane;

use crate::app::AppState;
use crate::domain::{Page, UiMode};
use calendar_pane::render_calendar_pane;
use home_pane::render_home_pane;
use input_form::render_input_form;
use keybindings::render_keybindings;
use layout::create_layout;
use modal::{render_confirm_clear, render_notice};
use notes_pane::render_notes_pane;
use ratatui::{
    text::Line,
    widgets::{Block, Borders, Tabs},
    Frame,
};
use reminders_pane::render_reminders_pane;
use settings_pane::render_settings_pane;
use styles::Palette;
use tasks_pane::render_tasks_pane;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &AppState) {
    let size = f.size();
    let palette = Palette::for_theme(app.settings.theme);
    let layout = create_layout(size);

    f.render_widget(Block::default().style(palette.base()), size);

    let titles: Vec<Line> = Page::all()
        .iter()
        .enumerate()
        .map(|(i, p)| Line::raw(format!("{} {}", i + 1, p.name())))
        .collect();
    let tabs = Tabs::new(titles)
        .select(app.page.index())
        .style(palette.hint())
        .highlight_style(palette.selected())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" daydesk ")
                .style(palette.border()),
        );
    f.render_widget(tabs, layout.tabs_area);

    render_notice(f, app, layout.notice_area);

    match app.page {
        Page::Home => render_home_pane(f, app, layout.page_area, &palette),
        Page::Tasks => render_tasks_pane(f, app, layout.page_area, &palette),
        Page::Notes => render_notes_pane(f, app, layout.page_area, &palette),
        Page::Reminders => render_reminders_pane(f, app, layout.page_area, &palette),
        Page::Calendar => render_calendar_pane(f, layout.page_area, &palette),
        Page::Settings => render_settings_pane(f, app, layout.page_area, &palette),
    }

    render_keybindings(f, app.page, layout.keybindings_area, &palette);

    if app.input_form.is_some() {
        render_input_form(f, app, size);
    }

    if app.ui_mode == UiMode::ConfirmClear {
        render_confirm_clear(f, size);
    }
}
