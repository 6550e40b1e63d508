//! Layout helpers

use ratatui::layout::Rect;

/// Center a `width` x `height` box inside `area`, clamping to fit.
///
/// Degenerate viewports shrink the box rather than panic.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}
