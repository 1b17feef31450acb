use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main layout structure
pub struct MainLayout {
    pub tabs_area: Rect,
    pub notice_area: Rect,
    pub page_area: Rect,
    pub keybindings_area: Rect,
}

/// Create the main layout
/// - Top: page tabs (3 rows)
/// - Notice banner (1 row)
/// - Page content
/// - Bottom: keybindings (1 row)
pub fn create_layout(area: Rect) -> MainLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    MainLayout {
        tabs_area: chunks[0],
        notice_area: chunks[1],
        page_area: chunks[2],
        keybindings_area: chunks[3],
    }
}

/// Split the home page into a left column (clock + stats) and activity on the right
pub fn split_home(area: Rect) -> (Rect, Rect, Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(0)])
        .split(columns[0]);

    (left[0], left[1], columns[1])
}

/// Split the tasks page into a search/sort header and the list
pub fn split_tasks(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);
    (chunks[0], chunks[1])
}

/// Create centered modal area
pub fn create_modal_area(area: Rect, height: u16) -> Rect {
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Length(height),
            Constraint::Percentage(25),
        ])
        .split(area);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(60),
            Constraint::Percentage(20),
        ])
        .split(vertical_chunks[1]);

    horizontal_chunks[1]
}
