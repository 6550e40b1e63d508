//! Help overlay listing the key bindings.

use pomo_app::KEY_BINDINGS;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph, Widget};

use crate::layout::centered_rect;
use crate::theme::styles;

/// Column width of the key labels.
const KEY_COLUMN: usize = 12;

pub struct HelpOverlay;

impl Widget for HelpOverlay {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = vec![
            Line::styled("⌨ Keyboard Shortcuts", styles::session_info()),
            Line::default(),
        ];
        for binding in KEY_BINDINGS {
            lines.push(Line::from(vec![
                Span::styled(format!("{:<KEY_COLUMN$}", binding.keys), styles::help_key()),
                Span::styled(binding.action, styles::help_text()),
            ]));
        }

        let width = lines
            .iter()
            .map(|l| l.width() as u16)
            .max()
            .unwrap_or(0)
            .saturating_add(4);
        let height = lines.len() as u16 + 2;
        let rect = centered_rect(area, width, height);

        Clear.render(rect, buf);
        let block = styles::overlay_block();
        let inner = block.inner(rect);
        block.render(rect, buf);
        Paragraph::new(lines).render(inner, buf);
    }
}
