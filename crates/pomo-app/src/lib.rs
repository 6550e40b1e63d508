//! pomo-app - Application state and orchestration for Pomo
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: a [`Message`] enum of everything that can happen, an
//! [`AppState`] model, and an [`update`] function that mutates the model and
//! returns the side effects ([`UpdateAction`]) the event loop should run.
//! It also owns settings persistence and signal handling.

pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod signals;
pub mod state;

// Re-export primary types
pub use config::{NotificationSettings, Settings};
pub use handler::{handle_key, update, KeyBinding, UpdateAction, UpdateResult, KEY_BINDINGS};
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AppPhase, AppState, ViewState, SPLASH_FRAME_COUNT};
