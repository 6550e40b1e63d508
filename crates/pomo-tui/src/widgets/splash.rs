//! Animated startup banner.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Widget};

use crate::layout::centered_rect;
use crate::theme::{palette, styles};

/// 5-row block letters spelling the banner.
const BANNER_ROWS: usize = 5;

fn letter(c: char) -> [&'static str; BANNER_ROWS] {
    match c {
        'P' => [
            "████ ",
            "█   █",
            "████ ",
            "█    ",
            "█    ",
        ],
        'O' => [
            "█████",
            "█   █",
            "█   █",
            "█   █",
            "█████",
        ],
        'M' => [
            "█   █",
            "██ ██",
            "█ █ █",
            "█   █",
            "█   █",
        ],
        'D' => [
            "████ ",
            "█   █",
            "█   █",
            "█   █",
            "████ ",
        ],
        'R' => [
            "████ ",
            "█   █",
            "████ ",
            "█  █ ",
            "█   █",
        ],
        _ => ["     "; BANNER_ROWS],
    }
}

/// The banner text, one glyph per character.
fn banner_rows() -> Vec<String> {
    let mut rows = vec![String::new(); BANNER_ROWS];
    for c in "POMODORO".chars() {
        let glyph = letter(c);
        for (i, row) in rows.iter_mut().enumerate() {
            if !row.is_empty() {
                row.push(' ');
            }
            row.push_str(glyph[i]);
        }
    }
    rows
}

/// The splash screen, cycling banner colors by animation frame.
pub struct SplashScreen {
    frame: u8,
}

impl SplashScreen {
    pub fn new(frame: u8) -> Self {
        Self { frame }
    }
}

impl Widget for SplashScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = palette::SPLASH_CYCLE[usize::from(self.frame) % palette::SPLASH_CYCLE.len()];
        let title_style = Style::default().fg(color).add_modifier(Modifier::BOLD);

        let mut lines: Vec<Line> = banner_rows()
            .into_iter()
            .map(|row| Line::styled(row, title_style))
            .collect();
        lines.push(Line::default());
        lines.push(Line::styled(
            "Focus. Flow. Flourish.",
            styles::splash_subtitle(),
        ));
        lines.push(Line::default());
        lines.push(Line::styled(
            "Press any key to start...",
            styles::splash_subtitle(),
        ));

        let rect = centered_rect(area, area.width, lines.len() as u16);
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(rect, buf);
    }
}
