//! TUI theme and styles

use ratatui::style::{Color, Modifier, Style};

/// Application color theme
pub struct Theme;

impl Theme {
    /// Primary accent color
    pub const PRIMARY: Color = Color::Green;

    /// Secondary accent color
    pub const SECONDARY: Color = Color::Yellow;

    /// Destructive action color
    pub const DANGER: Color = Color::Red;

    /// Muted text color
    pub const MUTED: Color = Color::DarkGray;

    /// Header style
    pub fn header() -> Style {
        Style::default().fg(Self::PRIMARY).add_modifier(Modifier::BOLD)
    }

    /// Status bar style
    pub fn status_bar() -> Style {
        Style::default().bg(Color::DarkGray)
    }

    /// Selected item style
    pub fn selected() -> Style {
        Style::default().bg(Self::PRIMARY).fg(Color::Black)
    }

    /// Focused input border
    pub fn focused() -> Style {
        Style::default().fg(Self::SECONDARY)
    }

    /// Normal text style
    pub fn normal() -> Style {
        Style::default()
    }

    /// Muted text style
    pub fn muted() -> Style {
        Style::default().fg(Self::MUTED)
    }

    /// Emphasised value (prices, names)
    pub fn strong() -> Style {
        Style::default().add_modifier(Modifier::BOLD)
    }

    /// Destructive action hint
    pub fn danger() -> Style {
        Style::default().fg(Self::DANGER)
    }
}
