//! Full-screen completion flash.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Clear, Paragraph, Widget};

use crate::layout::centered_rect;
use crate::theme::styles;

pub struct FlashOverlay;

impl Widget for FlashOverlay {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        let line = Line::styled("  SESSION COMPLETE!  ", styles::flash());
        let rect = centered_rect(area, area.width, 1);
        Paragraph::new(line)
            .alignment(Alignment::Center)
            .render(rect, buf);
    }
}
