//! Cyberpunk color palette.

use pomo_core::SessionType;
use ratatui::style::Color;

// --- Primary colors ---
pub const CYAN: Color = Color::Rgb(0, 255, 255);
pub const MAGENTA: Color = Color::Rgb(255, 0, 255);
pub const HOT_PINK: Color = Color::Rgb(255, 20, 147);
pub const ELECTRIC_BLUE: Color = Color::Rgb(0, 191, 255);
pub const NEON: Color = Color::Rgb(57, 255, 20);
pub const PURPLE: Color = Color::Rgb(157, 0, 255);
pub const YELLOW: Color = Color::Rgb(255, 255, 0);

// --- Background and neutral ---
pub const DARK_BG: Color = Color::Rgb(13, 13, 13);
pub const DARK_GRAY: Color = Color::Rgb(26, 26, 46);
pub const LIGHT_GRAY: Color = Color::Rgb(102, 102, 153);

// --- Session accents ---
pub const WORK_COLOR: Color = HOT_PINK;
pub const SHORT_BREAK_COLOR: Color = CYAN;
pub const LONG_BREAK_COLOR: Color = PURPLE;

/// Colors the splash banner cycles through, one per animation frame.
pub const SPLASH_CYCLE: &[Color] = &[MAGENTA, HOT_PINK, CYAN, ELECTRIC_BLUE, PURPLE];

/// Accent color for an interval kind.
pub fn session_color(session: SessionType) -> Color {
    match session {
        SessionType::Work => WORK_COLOR,
        SessionType::ShortBreak => SHORT_BREAK_COLOR,
        SessionType::LongBreak => LONG_BREAK_COLOR,
    }
}
