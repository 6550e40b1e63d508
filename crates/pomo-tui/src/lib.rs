//! pomo-tui - Terminal UI for Pomo
//!
//! This crate provides the ratatui-based terminal interface: event polling,
//! the armed timer slots, theme, widgets, the pure view function, the
//! notification channels, and the run loop.

pub mod event;
pub mod layout;
pub mod notify;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod timers;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
