//! Application state (Model in TEA pattern)

use pomo_core::{SessionClock, SessionType};

use crate::config::Settings;

/// Splash frames shown before the timer view takes over on its own.
pub const SPLASH_FRAME_COUNT: u8 = 8;

/// Which screen the renderer should produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewState {
    /// Animated startup banner
    #[default]
    Splash,
    /// The countdown itself
    Timer,
    /// Interstitial after an interval completes or is skipped
    Complete,
}

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// All mutable state owned by the controller.
///
/// Mutated exclusively by `handler::update()` on the event loop's single
/// logical thread.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The session state machine
    pub clock: SessionClock,
    /// Notification preferences (persisted on quit)
    pub settings: Settings,
    pub view: ViewState,
    pub phase: AppPhase,
    pub show_help: bool,
    pub flash_active: bool,
    pub splash_frame: u8,
    /// The interval that just ended, captured before the clock advanced.
    ///
    /// The complete view displays this; deriving it from post-transition
    /// clock state is ambiguous, so it is stored explicitly.
    pub last_completed: Option<SessionType>,
    pub width: u16,
    pub height: u16,
}

impl AppState {
    /// Default clock and settings; used heavily by tests.
    pub fn new() -> Self {
        Self::with_settings(SessionClock::new(), Settings::default())
    }

    /// Create initial state from a configured clock and loaded settings
    pub fn with_settings(clock: SessionClock, settings: Settings) -> Self {
        Self {
            clock,
            settings,
            view: ViewState::Splash,
            phase: AppPhase::Running,
            show_help: false,
            flash_active: false,
            splash_frame: 0,
            last_completed: None,
            width: 80,
            height: 24,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
