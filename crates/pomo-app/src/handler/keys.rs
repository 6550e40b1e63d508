//! Key event handlers for the different views

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, ViewState};

/// One row of the help overlay's binding table.
#[derive(Debug, Clone, Copy)]
pub struct KeyBinding {
    pub keys: &'static str,
    pub action: &'static str,
}

/// The full binding table, in display order.
pub const KEY_BINDINGS: &[KeyBinding] = &[
    KeyBinding {
        keys: "space/enter",
        action: "start/pause timer",
    },
    KeyBinding {
        keys: "s",
        action: "skip session",
    },
    KeyBinding {
        keys: "r",
        action: "reset timer",
    },
    KeyBinding {
        keys: "n",
        action: "toggle notifications",
    },
    KeyBinding {
        keys: "?",
        action: "toggle help",
    },
    KeyBinding {
        keys: "q/ctrl+c",
        action: "quit",
    },
];

/// Convert key events to messages based on the current view.
///
/// Dispatch priority: the splash swallows everything, then the help toggle,
/// then help-dismiss, then quit, then view-specific bindings.
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    if state.view == ViewState::Splash {
        return Some(Message::DismissSplash);
    }

    if key == InputKey::Char('?') {
        return Some(Message::ToggleHelp);
    }

    // Any key hides an open help overlay without acting further.
    if state.show_help {
        return Some(Message::DismissHelp);
    }

    match key {
        InputKey::Char('q') | InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => match state.view {
            ViewState::Timer => handle_key_timer(key),
            ViewState::Complete => handle_key_complete(key),
            ViewState::Splash => None,
        },
    }
}

/// Handle key events in the timer view
fn handle_key_timer(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char(' ') | InputKey::Enter => Some(Message::ToggleTimer),
        InputKey::Char('s') => Some(Message::SkipSession),
        InputKey::Char('r') => Some(Message::ResetTimer),
        InputKey::Char('n') => Some(Message::ToggleNotifications),
        _ => None,
    }
}

/// Handle key events in the complete view
fn handle_key_complete(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char(' ') | InputKey::Enter => Some(Message::ShowTimer),
        _ => None,
    }
}
