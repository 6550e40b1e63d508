//! Configuration loading and persistence for Pomo

pub mod settings;
pub mod types;

pub use settings::{config_path, load_settings, load_settings_from, save_settings, save_settings_to};
pub use types::{NotificationSettings, Settings};
