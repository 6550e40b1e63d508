//! The main countdown view.

use pomo_app::AppState;
use pomo_core::{SessionType, POMODOROS_PER_CYCLE};
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Widget};

use crate::layout::centered_rect;
use crate::theme::styles;

use super::{ascii, progress};

/// Session name, block-glyph countdown, progress, cycle position, status.
pub struct TimerView<'a> {
    state: &'a AppState,
}

impl<'a> TimerView<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }
}

impl Widget for TimerView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let clock = &self.state.clock;
        let accent = styles::session(clock.session_type());

        let mut lines: Vec<Line> = Vec::new();

        lines.push(Line::styled(clock.session_name(), accent));
        lines.push(Line::default());

        for row in ascii::big_time(clock.minutes_remaining(), clock.seconds_remaining()) {
            lines.push(Line::styled(row, accent));
        }
        lines.push(Line::default());

        let progress_width = if area.width < 60 {
            area.width.saturating_sub(10)
        } else {
            50
        };
        lines.push(progress::progress_line(clock.progress(), progress_width));
        lines.push(Line::default());

        lines.push(Line::styled(session_info(self.state), styles::session_info()));

        if clock.is_running() {
            lines.push(Line::styled("▶ RUNNING", styles::running()));
        } else {
            lines.push(Line::styled("⏸ PAUSED", styles::paused()));
        }
        lines.push(Line::default());

        lines.push(Line::styled(
            "Press ? for help • q to quit",
            styles::help_text(),
        ));

        let rect = centered_rect(area, area.width, lines.len() as u16);
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(rect, buf);
    }
}

/// Cycle position plus what follows the current interval.
fn session_info(state: &AppState) -> String {
    let clock = &state.clock;
    let mut info = format!(
        "Pomodoro {}/{}",
        clock.pomodoro_count(),
        POMODOROS_PER_CYCLE
    );
    if clock.session_type() == SessionType::Work {
        if clock.pomodoro_count() + 1 >= POMODOROS_PER_CYCLE {
            info.push_str(" • Long break next!");
        } else {
            info.push_str(" • Short break next");
        }
    } else {
        info.push_str(" • Work session next");
    }
    info
}
