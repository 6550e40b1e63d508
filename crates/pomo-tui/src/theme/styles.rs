//! Semantic style builders for the cyberpunk theme.

use pomo_core::SessionType;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

/// Bold accent style for the current interval (titles and digits).
pub fn session(session: SessionType) -> Style {
    Style::default()
        .fg(palette::session_color(session))
        .add_modifier(Modifier::BOLD)
}

pub fn progress_filled() -> Style {
    Style::default().fg(palette::MAGENTA)
}

pub fn progress_empty() -> Style {
    Style::default().fg(palette::DARK_GRAY)
}

pub fn progress_percent() -> Style {
    Style::default().fg(palette::CYAN)
}

pub fn session_info() -> Style {
    Style::default()
        .fg(palette::CYAN)
        .add_modifier(Modifier::BOLD)
}

pub fn paused() -> Style {
    Style::default()
        .fg(palette::YELLOW)
        .add_modifier(Modifier::BOLD | Modifier::SLOW_BLINK)
}

pub fn running() -> Style {
    Style::default()
        .fg(palette::NEON)
        .add_modifier(Modifier::BOLD)
}

pub fn help_text() -> Style {
    Style::default().fg(palette::LIGHT_GRAY)
}

pub fn completion() -> Style {
    Style::default()
        .fg(palette::NEON)
        .add_modifier(Modifier::BOLD)
}

pub fn splash_subtitle() -> Style {
    Style::default()
        .fg(palette::CYAN)
        .add_modifier(Modifier::ITALIC)
}

pub fn help_key() -> Style {
    Style::default()
        .fg(palette::HOT_PINK)
        .add_modifier(Modifier::BOLD)
}

pub fn flash() -> Style {
    Style::default()
        .bg(palette::CYAN)
        .fg(palette::DARK_BG)
        .add_modifier(Modifier::BOLD)
}

/// Rounded cyan border used by the help overlay and completion banner.
pub fn overlay_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette::CYAN))
}
