//! Countdown progress bar.

use ratatui::text::{Line, Span};

use crate::theme::styles;

/// Build a one-line progress bar with a trailing percentage.
///
/// `width` is the total budget including the percentage text; the bar never
/// shrinks below 10 cells.
pub fn progress_line(fraction: f64, width: u16) -> Line<'static> {
    let fraction = fraction.clamp(0.0, 1.0);

    // Account for the percentage text at the end (e.g. " 100%").
    let bar_width = usize::from(width).saturating_sub(6).max(10);
    let filled = (bar_width as f64 * fraction) as usize;
    let empty = bar_width - filled;

    Line::from(vec![
        Span::styled("█".repeat(filled), styles::progress_filled()),
        Span::styled("░".repeat(empty), styles::progress_empty()),
        Span::styled(
            format!(" {:3}%", (fraction * 100.0) as u16),
            styles::progress_percent(),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_empty_bar_at_zero() {
        let line = text(&progress_line(0.0, 56));
        assert!(!line.contains('█'));
        assert!(line.ends_with("   0%"));
    }

    #[test]
    fn test_full_bar_at_one() {
        let line = text(&progress_line(1.0, 56));
        assert!(!line.contains('░'));
        assert!(line.ends_with(" 100%"));
    }

    #[test]
    fn test_half_bar() {
        let line = text(&progress_line(0.5, 56));
        assert_eq!(line.matches('█').count(), 25);
        assert_eq!(line.matches('░').count(), 25);
        assert!(line.ends_with("  50%"));
    }

    #[test]
    fn test_out_of_range_fractions_are_clamped() {
        assert!(text(&progress_line(-0.5, 56)).ends_with("   0%"));
        assert!(text(&progress_line(7.0, 56)).ends_with(" 100%"));
    }

    #[test]
    fn test_narrow_width_keeps_minimum_bar() {
        let line = text(&progress_line(0.0, 4));
        assert_eq!(line.matches('░').count(), 10);
    }
}
