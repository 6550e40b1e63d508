//! Notification delivery: terminal bell and desktop notification.
//!
//! Channels are gated independently and fail independently; a dead desktop
//! notification daemon never silences the bell, and no failure here is ever
//! fatal to the timer.

use std::io::Write;

use pomo_app::NotificationSettings;
use pomo_core::prelude::*;

/// Delivers notifications through the enabled channels.
#[derive(Debug, Default)]
pub struct Notifier;

impl Notifier {
    pub fn new() -> Self {
        Self
    }

    /// Deliver `title`/`message` through every enabled channel.
    ///
    /// Returns the last channel error, if any; callers log and move on.
    pub fn notify(
        &self,
        prefs: &NotificationSettings,
        title: &str,
        message: &str,
    ) -> Result<()> {
        let mut last_err = None;

        if prefs.terminal_bell {
            if let Err(e) = ring_bell() {
                warn!("Terminal bell failed: {}", e);
                last_err = Some(Error::notify(format!("terminal bell: {e}")));
            }
        }

        if prefs.system_notification {
            if let Err(e) = desktop_notify(title, message) {
                warn!("Desktop notification failed: {}", e);
                last_err = Some(Error::notify(format!("desktop notification: {e}")));
            }
        }

        match last_err {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// Write BEL to the terminal.
fn ring_bell() -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    stdout.write_all(b"\x07")?;
    stdout.flush()
}

/// Show a desktop notification via the platform notification service.
fn desktop_notify(title: &str, message: &str) -> std::result::Result<(), notify_rust::error::Error> {
    notify_rust::Notification::new()
        .summary(title)
        .body(message)
        .show()?;
    Ok(())
}
