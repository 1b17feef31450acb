use crate::app::{AppState, FormKind, SettingsRow};
use crate::domain::{Page, UiMode};
use crate::store::MoveDirection;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Instant;

/// Handle keyboard input events. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Ok(true);
    }

    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::Searching => handle_search_mode(app, key),
        UiMode::Adding | UiMode::EditingTask => handle_input_form_mode(app, key),
        UiMode::ConfirmClear => handle_confirm_clear_mode(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Char('q') => return Ok(true),

        // Page navigation
        KeyCode::Tab => app.navigate(app.page.next()),
        KeyCode::BackTab => app.navigate(app.page.previous()),
        KeyCode::Char(c @ '1'..='6') => {
            let idx = c as usize - '1' as usize;
            if let Some(page) = Page::all().get(idx) {
                app.navigate(*page);
            }
        }

        // Selection (with Shift modifier for reordering tasks)
        KeyCode::Up => {
            if app.page == Page::Tasks && key.modifiers.contains(KeyModifiers::SHIFT) {
                app.move_selected_task(MoveDirection::Up);
            } else {
                app.move_selection_up();
            }
        }
        KeyCode::Down => {
            if app.page == Page::Tasks && key.modifiers.contains(KeyModifiers::SHIFT) {
                app.move_selected_task(MoveDirection::Down);
            } else {
                app.move_selection_down();
            }
        }

        // Global shortcuts
        KeyCode::Char('t') => app.set_theme(app.settings.theme.next()),
        KeyCode::Char('x') => {
            // Failures already surface as a notice
            let _ = app.export();
        }

        _ => match app.page {
            Page::Tasks => handle_tasks_page(app, key),
            Page::Notes => handle_notes_page(app, key),
            Page::Reminders => handle_reminders_page(app, key),
            Page::Settings => handle_settings_page(app, key),
            Page::Home | Page::Calendar => {}
        },
    }

    Ok(false)
}

fn handle_tasks_page(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('a') => app.start_form(FormKind::Task),
        KeyCode::Char('e') => {
            if let Some(id) = app.selected_task_id() {
                app.start_form(FormKind::EditTask(id));
            }
        }
        KeyCode::Enter | KeyCode::Char(' ') => app.toggle_selected_completed(),
        KeyCode::Char('p') => app.cycle_selected_priority(),
        KeyCode::Char('d') | KeyCode::Delete => app.delete_selected_task(),
        KeyCode::Char('/') => app.ui_mode = UiMode::Searching,
        KeyCode::Char('s') => {
            app.cycle_sort_mode();
        }
        _ => {}
    }
}

fn handle_notes_page(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('a') => app.start_form(FormKind::Note),
        KeyCode::Char('d') | KeyCode::Delete => app.delete_selected_note(),
        _ => {}
    }
}

fn handle_reminders_page(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('a') => app.start_form(FormKind::Reminder),
        KeyCode::Char('d') | KeyCode::Delete => app.delete_selected_reminder(),
        _ => {}
    }
}

fn handle_settings_page(app: &mut AppState, key: KeyEvent) {
    let row = app.selected_settings_row();
    match (row, key.code) {
        (SettingsRow::Theme, KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Right) => {
            app.set_theme(app.settings.theme.next())
        }
        (SettingsRow::FontSize, KeyCode::Right | KeyCode::Char('+')) => app.adjust_font_size(1),
        (SettingsRow::FontSize, KeyCode::Left | KeyCode::Char('-')) => app.adjust_font_size(-1),
        (SettingsRow::Notifications, KeyCode::Enter | KeyCode::Char(' ')) => {
            app.toggle_notifications()
        }
        (SettingsRow::Sound, KeyCode::Enter | KeyCode::Char(' ')) => app.toggle_sound(),
        (SettingsRow::Export, KeyCode::Enter) => {
            let _ = app.export();
        }
        (SettingsRow::ClearData, KeyCode::Enter) => app.ui_mode = UiMode::ConfirmClear,
        _ => {}
    }
}

/// Handle keys while typing in the search box
fn handle_search_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Apply right away and leave the box
        KeyCode::Enter => {
            let term = app.search_input.clone();
            app.apply_search(&term);
            app.ui_mode = UiMode::Normal;
        }
        // Clear the search
        KeyCode::Esc => {
            app.apply_search("");
            app.ui_mode = UiMode::Normal;
        }
        KeyCode::Backspace => {
            let mut term = app.search_input.clone();
            term.pop();
            app.set_search_input(term, Instant::now());
        }
        KeyCode::Char(c) => {
            let mut term = app.search_input.clone();
            term.push(c);
            app.set_search_input(term, Instant::now());
        }
        _ => {}
    }
    Ok(false)
}

/// Handle keys in the add/edit form
fn handle_input_form_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Enter => app.submit_input_form(),
        KeyCode::Esc => app.cancel_input_form(),
        KeyCode::Tab => app.input_form_toggle_field(),
        KeyCode::Backspace => app.input_form_backspace(),
        KeyCode::Char(c) => app.input_form_add_char(c),
        _ => {}
    }
    Ok(false)
}

fn handle_confirm_clear_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    if matches!(key.code, KeyCode::Char('y') | KeyCode::Char('Y')) {
        app.clear_all_data();
    }
    app.ui_mode = UiMode::Normal;
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Priority, SortMode};
    use crate::store::ItemStore;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn create_test_app() -> AppState {
        let mut app = AppState::new(ItemStore::in_memory(), std::env::temp_dir());
        app.add_task("Test task").unwrap();
        app.add_task("Task 2").unwrap();
        app.navigate(Page::Tasks);
        app
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn type_text(app: &mut AppState, text: &str) {
        for c in text.chars() {
            handle_key(app, key(KeyCode::Char(c))).unwrap();
        }
    }

    #[test]
    fn test_handle_navigation() {
        let mut app = create_test_app();
        assert_eq!(app.selected_task, 0);

        handle_key(&mut app, key(KeyCode::Down)).unwrap();
        assert_eq!(app.selected_task, 1);

        handle_key(&mut app, key(KeyCode::Down)).unwrap();
        assert_eq!(app.selected_task, 1);

        handle_key(&mut app, key(KeyCode::Up)).unwrap();
        assert_eq!(app.selected_task, 0);
    }

    #[test]
    fn test_page_switching() {
        let mut app = create_test_app();
        handle_key(&mut app, key(KeyCode::Tab)).unwrap();
        assert_eq!(app.page, Page::Notes);
        handle_key(&mut app, key(KeyCode::Char('6'))).unwrap();
        assert_eq!(app.page, Page::Settings);
        handle_key(&mut app, key(KeyCode::BackTab)).unwrap();
        assert_eq!(app.page, Page::Calendar);
    }

    #[test]
    fn test_quit() {
        let mut app = create_test_app();
        assert!(handle_key(&mut app, key(KeyCode::Char('q'))).unwrap());
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(handle_key(&mut app, ctrl_c).unwrap());
    }

    #[test]
    fn test_add_task_via_form() {
        let mut app = create_test_app();
        handle_key(&mut app, key(KeyCode::Char('a'))).unwrap();
        assert_eq!(app.ui_mode, UiMode::Adding);

        // 'q' inside the form is text, not quit
        type_text(&mut app, "quick one");
        handle_key(&mut app, key(KeyCode::Enter)).unwrap();

        assert_eq!(app.ui_mode, UiMode::Normal);
        assert_eq!(app.store.tasks().len(), 3);
        assert_eq!(app.store.tasks()[2].text, "quick one");
    }

    #[test]
    fn test_toggle_and_priority_keys() {
        let mut app = create_test_app();
        handle_key(&mut app, key(KeyCode::Char(' '))).unwrap();
        assert!(app.store.tasks()[0].completed);

        handle_key(&mut app, key(KeyCode::Char('p'))).unwrap();
        assert_eq!(app.store.tasks()[0].priority, Priority::High);
    }

    #[test]
    fn test_sort_key() {
        let mut app = create_test_app();
        handle_key(&mut app, key(KeyCode::Char('s'))).unwrap();
        assert_eq!(app.filter.sort_mode(), SortMode::Priority);
    }

    #[test]
    fn test_search_enter_applies_immediately() {
        let mut app = create_test_app();
        handle_key(&mut app, key(KeyCode::Char('/'))).unwrap();
        assert_eq!(app.ui_mode, UiMode::Searching);

        type_text(&mut app, "2");
        handle_key(&mut app, key(KeyCode::Enter)).unwrap();

        assert_eq!(app.ui_mode, UiMode::Normal);
        assert_eq!(app.visible_tasks().len(), 1);

        handle_key(&mut app, key(KeyCode::Char('/'))).unwrap();
        handle_key(&mut app, key(KeyCode::Esc)).unwrap();
        assert_eq!(app.visible_tasks().len(), 2);
    }

    #[test]
    fn test_reorder_with_shift() {
        let mut app = create_test_app();
        let shift_down = KeyEvent::new(KeyCode::Down, KeyModifiers::SHIFT);
        handle_key(&mut app, shift_down).unwrap();

        assert_eq!(app.store.tasks()[1].text, "Test task");
        assert_eq!(app.selected_task, 1);
    }

    #[test]
    fn test_clear_requires_confirmation() {
        let mut app = create_test_app();
        app.navigate(Page::Settings);
        app.settings_cursor = SettingsRow::all().len() - 1;

        handle_key(&mut app, key(KeyCode::Enter)).unwrap();
        assert_eq!(app.ui_mode, UiMode::ConfirmClear);
        handle_key(&mut app, key(KeyCode::Char('n'))).unwrap();
        assert_eq!(app.store.tasks().len(), 2);

        handle_key(&mut app, key(KeyCode::Enter)).unwrap();
        handle_key(&mut app, key(KeyCode::Char('y'))).unwrap();
        assert!(app.store.tasks().is_empty());
    }
}
