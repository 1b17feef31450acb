use crate::domain::{Priority, Theme};
use crate::feed::NoticeLevel;
use ratatui::style::{Color, Modifier, Style};

/// Colours for one theme
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub fg: Color,
    pub bg: Color,
    pub accent: Color,
    pub muted: Color,
    pub highlight_fg: Color,
    pub highlight_bg: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Default => Self {
                fg: Color::White,
                bg: Color::Reset,
                accent: Color::LightMagenta,
                muted: Color::Gray,
                highlight_fg: Color::Black,
                highlight_bg: Color::LightCyan,
            },
            Theme::Neon => Self {
                fg: Color::LightGreen,
                bg: Color::Black,
                accent: Color::Magenta,
                muted: Color::Cyan,
                highlight_fg: Color::Black,
                highlight_bg: Color::LightMagenta,
            },
            Theme::Dark => Self {
                fg: Color::Gray,
                bg: Color::Black,
                accent: Color::Blue,
                muted: Color::DarkGray,
                highlight_fg: Color::White,
                highlight_bg: Color::DarkGray,
            },
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.muted).bg(self.bg)
    }

    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .bg(self.bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn selected(&self) -> Style {
        Style::default()
            .fg(self.highlight_fg)
            .bg(self.highlight_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn hint(&self) -> Style {
        Style::default().fg(self.muted).bg(self.bg)
    }
}

pub fn priority_style(priority: Priority) -> Style {
    match priority {
        Priority::High => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        Priority::Medium => Style::default().fg(Color::Yellow),
        Priority::Low => Style::default().fg(Color::Green),
    }
}

/// Completed task text
pub fn done_style() -> Style {
    Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::CROSSED_OUT)
}

pub fn notice_style(level: NoticeLevel) -> Style {
    let bg = match level {
        NoticeLevel::Info => Color::Blue,
        NoticeLevel::Success => Color::Green,
        NoticeLevel::Error => Color::Red,
    };
    Style::default()
        .fg(Color::White)
        .bg(bg)
        .add_modifier(Modifier::BOLD)
}

/// Modal background style
pub fn modal_bg_style() -> Style {
    Style::default().bg(Color::DarkGray).fg(Color::White)
}

/// Modal title style
pub fn modal_title_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

pub fn weekend_style() -> Style {
    Style::default().fg(Color::LightRed)
}
