//! Configuration types with serde defaults

use serde::{Deserialize, Serialize};

/// All persisted application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub notifications: NotificationSettings,
}

/// Notification channel preferences
///
/// Three independent booleans; each channel is gated on its own flag and
/// nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NotificationSettings {
    /// Full-screen flash when an interval completes
    #[serde(default = "default_true")]
    pub visual_flash: bool,

    /// BEL to the terminal
    #[serde(default = "default_true")]
    pub terminal_bell: bool,

    /// Desktop notification
    #[serde(default = "default_true")]
    pub system_notification: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            visual_flash: true,
            terminal_bell: true,
            system_notification: true,
        }
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_enable_everything() {
        let settings = Settings::default();
        assert!(settings.notifications.visual_flash);
        assert!(settings.notifications.terminal_bell);
        assert!(settings.notifications.system_notification);
    }

    #[test]
    fn test_missing_fields_default_to_true() {
        let settings: Settings = toml::from_str(
            r#"
            [notifications]
            terminal_bell = false
            "#,
        )
        .unwrap();
        assert!(settings.notifications.visual_flash);
        assert!(!settings.notifications.terminal_bell);
        assert!(settings.notifications.system_notification);
    }

    #[test]
    fn test_empty_file_parses_to_defaults() {
        let settings: Settings = toml::from_str("").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_roundtrip_through_toml() {
        let mut settings = Settings::default();
        settings.notifications.system_notification = false;

        let text = toml::to_string_pretty(&settings).unwrap();
        let parsed: Settings = toml::from_str(&text).unwrap();
        assert_eq!(parsed, settings);
    }
}
