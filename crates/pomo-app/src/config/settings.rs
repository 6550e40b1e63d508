//! Settings persistence for ~/.config/pomo/config.toml
//!
//! Load never fails from the caller's point of view: a missing, unreadable,
//! or corrupt file degrades to defaults. Saves are atomic (temp + rename)
//! and fatal only to the save itself.

use std::path::{Path, PathBuf};

use pomo_core::prelude::*;

use super::types::Settings;

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "pomo";

/// Path of the persisted settings file, if a config directory exists.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILENAME))
}

/// Load settings, creating a default file on first run.
pub fn load_settings() -> Settings {
    let Some(path) = config_path() else {
        warn!("No config directory on this platform, using defaults");
        return Settings::default();
    };

    if !path.exists() {
        let settings = Settings::default();
        if let Err(e) = save_settings_to(&path, &settings) {
            debug!("Could not write default config to {:?}: {}", path, e);
        }
        return settings;
    }

    load_settings_from(&path)
}

/// Read settings from a specific path, falling back to defaults.
pub fn load_settings_from(path: &Path) -> Settings {
    match std::fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", path, e);
            Settings::default()
        }
    }
}

/// Persist settings to the default location.
pub fn save_settings(settings: &Settings) -> Result<()> {
    let path = config_path()
        .ok_or_else(|| Error::config("No config directory on this platform"))?;
    save_settings_to(&path, settings)
}

/// Persist settings to a specific path.
pub fn save_settings_to(path: &Path, settings: &Settings) -> Result<()> {
    let dir = path
        .parent()
        .ok_or_else(|| Error::config(format!("Config path {:?} has no parent", path)))?;

    if !dir.exists() {
        std::fs::create_dir_all(dir)
            .map_err(|e| Error::config(format!("Failed to create config dir: {}", e)))?;
    }

    let content = toml::to_string_pretty(settings)
        .map_err(|e| Error::config(format!("Failed to serialize settings: {}", e)))?;

    // Atomic write: write to temp, then rename
    let temp_path = dir.join(".config.toml.tmp");
    std::fs::write(&temp_path, &content)
        .map_err(|e| Error::config(format!("Failed to write temp file: {}", e)))?;
    std::fs::rename(&temp_path, path)
        .map_err(|e| Error::config(format!("Failed to rename temp file: {}", e)))?;

    info!("Saved settings to {:?}", path);
    Ok(())
}
