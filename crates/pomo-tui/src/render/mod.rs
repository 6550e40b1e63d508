//! Main render/view function (View in TEA pattern)


use pomo_app::{AppState, ViewState};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::theme::palette;
use crate::widgets::{CompleteView, FlashOverlay, HelpOverlay, SplashScreen, TimerView};

/// Render the complete UI (View function in TEA)
///
/// Pure: reads state, never mutates it. Overlay priority is flash, then
/// help, then the current view.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Fill the terminal with the theme background.
    let bg_block = Block::default().style(Style::default().bg(palette::DARK_BG));
    frame.render_widget(bg_block, area);

    if state.flash_active {
        frame.render_widget(FlashOverlay, area);
        return;
    }

    if state.show_help {
        frame.render_widget(HelpOverlay, area);
        return;
    }

    match state.view {
        ViewState::Splash => frame.render_widget(SplashScreen::new(state.splash_frame), area),
        ViewState::Timer => frame.render_widget(TimerView::new(state), area),
        ViewState::Complete => frame.render_widget(CompleteView::new(state), area),
    }
}
