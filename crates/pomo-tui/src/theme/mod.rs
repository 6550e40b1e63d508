//! Centralized theme for the cyberpunk look.
//!
//! - `palette` — immutable color constants and the session accent mapping
//! - `styles` — semantic style builder functions

pub mod palette;
pub mod styles;
