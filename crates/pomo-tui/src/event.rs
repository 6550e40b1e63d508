//! Terminal event polling

use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use pomo_app::message::Message;
use pomo_app::InputKey;
use pomo_core::prelude::*;
use std::time::Duration;

/// Convert crossterm KeyEvent to InputKey
pub fn key_event_to_input(key: crossterm::event::KeyEvent) -> Option<InputKey> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputKey::CharCtrl(c))
        }
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        KeyCode::Enter => Some(InputKey::Enter),
        KeyCode::Esc => Some(InputKey::Esc),
        _ => None, // Unsupported keys ignored
    }
}

/// Poll for terminal events with a 50ms timeout.
///
/// Returns `None` on timeout; countdown ticks come from the armed timer
/// slots, never from here.
pub fn poll() -> Result<Option<Message>> {
    if !event::poll(Duration::from_millis(50))? {
        return Ok(None);
    }

    match event::read()? {
        Event::Key(key) if key.kind == event::KeyEventKind::Press => {
            Ok(key_event_to_input(key).map(Message::Key))
        }
        Event::Resize(width, height) => Ok(Some(Message::Resize { width, height })),
        _ => Ok(None),
    }
}
