//! Handler module - TEA update function and key dispatch
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers per view, plus the binding table

pub(crate) mod keys;
pub(crate) mod update;


use crate::message::Message;

// Re-export main entry points
pub use keys::{handle_key, KeyBinding, KEY_BINDINGS};
pub use update::update;

/// Side effects the event loop should perform after update
///
/// Timers are armed here and nowhere else: one outstanding deadline per
/// kind, re-armed only when the handler asks for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Arm the one-second countdown tick
    ScheduleTick,
    /// Arm the next splash animation frame
    ScheduleSplashTick,
    /// Arm the end of the visual flash
    ScheduleFlash,
    /// Deliver a notification through the enabled channels
    Notify { title: String, message: String },
    /// Persist the notification preferences
    SaveSettings,
}

/// Result of processing a message
#[derive(Debug, Default, PartialEq, Eq)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Actions for the event loop to perform, in order
    pub actions: Vec<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            actions: Vec::new(),
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            actions: vec![action],
        }
    }

    pub fn actions(actions: Vec<UpdateAction>) -> Self {
        Self {
            message: None,
            actions,
        }
    }
}
