//! Widgets for the Pomo TUI

pub mod ascii;
pub mod complete_view;
pub mod flash;
pub mod help;
pub mod progress;
pub mod splash;
pub mod timer_view;

pub use complete_view::CompleteView;
pub use flash::FlashOverlay;
pub use help::HelpOverlay;
pub use splash::SplashScreen;
pub use timer_view::TimerView;
