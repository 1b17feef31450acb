use crate::domain::Page;
use crate::ui::styles::Palette;
use ratatui::{layout::Rect, text::Line, widgets::Paragraph, Frame};

fn hints_for(page: Page) -> &'static str {
    match page {
        Page::Home | Page::Calendar => " Tab/1-6 pages   t theme   x export   q quit",
        Page::Tasks => {
            " a add   e edit   space done   p priority   d delete   / search   s sort   Shift+↑/↓ reorder   q quit"
        }
        Page::Notes => " a add   d delete   ↑/↓ select   Tab pages   q quit",
        Page::Reminders => " a add   d delete   ↑/↓ select   Tab pages   q quit",
        Page::Settings => " ↑/↓ select   Enter toggle   ←/→ adjust   Tab pages   q quit",
    }
}

/// Render the keybindings hint bar
pub fn render_keybindings(f: &mut Frame, page: Page, area: Rect, palette: &Palette) {
    let paragraph = Paragraph::new(Line::raw(hints_for(page))).style(palette.hint());
    f.render_widget(paragraph, area);
}
