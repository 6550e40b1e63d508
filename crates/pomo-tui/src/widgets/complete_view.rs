//! Interstitial shown after an interval completes or is skipped.

use pomo_app::AppState;
use pomo_core::SessionType;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Widget};

use crate::layout::centered_rect;
use crate::theme::styles;

pub struct CompleteView<'a> {
    state: &'a AppState,
}

impl<'a> CompleteView<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }
}

impl Widget for CompleteView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // The controller captures the finished interval before the clock
        // advances; default to Work only if the view is somehow reached
        // without one.
        let completed = self.state.last_completed.unwrap_or(SessionType::Work);
        let next = self.state.clock.session_type();

        let lines = vec![
            Line::styled(completion_message(completed), styles::completion()),
            Line::default(),
            Line::styled(next_message(next), styles::session_info()),
            Line::default(),
            Line::styled(
                "Press ENTER or SPACE to start • q to quit",
                styles::help_text(),
            ),
        ];

        let rect = centered_rect(area, area.width, lines.len() as u16);
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(rect, buf);
    }
}

fn completion_message(completed: SessionType) -> &'static str {
    match completed {
        SessionType::Work => "🎉 Work session complete!",
        SessionType::ShortBreak => "☕ Break's over!",
        SessionType::LongBreak => "🌟 Long break complete! Great work!",
    }
}

fn next_message(next: SessionType) -> &'static str {
    match next {
        SessionType::Work => "Ready to focus? Start your work session.",
        SessionType::ShortBreak => "Time for a short break. Rest your eyes!",
        SessionType::LongBreak => "You've earned a long break! Take 15 minutes.",
    }
}
