//! Main update function - handles state transitions (TEA pattern)

use pomo_core::SessionType;
use tracing::debug;

use crate::message::Message;
use crate::state::{AppPhase, AppState, ViewState, SPLASH_FRAME_COUNT};

use super::{keys::handle_key, UpdateAction, UpdateResult};

/// Process a message and update state
///
/// Returns an optional follow-up message and the side effects the event
/// loop should perform. Stale timer messages (a tick arriving after the
/// governing view or running-state changed) are ignored here rather than
/// cancelled at the source.
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Quit => {
            // Persist preferences before the loop observes Quitting.
            state.phase = AppPhase::Quitting;
            UpdateResult::action(UpdateAction::SaveSettings)
        }

        Message::Resize { width, height } => {
            state.width = width;
            state.height = height;
            UpdateResult::none()
        }

        Message::SplashTick => {
            if state.view != ViewState::Splash {
                return UpdateResult::none();
            }
            state.splash_frame += 1;
            if state.splash_frame >= SPLASH_FRAME_COUNT {
                state.view = ViewState::Timer;
                UpdateResult::none()
            } else {
                UpdateResult::action(UpdateAction::ScheduleSplashTick)
            }
        }

        Message::Tick => {
            if state.view != ViewState::Timer || !state.clock.is_running() {
                return UpdateResult::none();
            }
            state.clock.tick();
            if state.clock.is_complete() {
                handle_session_complete(state)
            } else {
                UpdateResult::action(UpdateAction::ScheduleTick)
            }
        }

        Message::FlashTimeout => {
            state.flash_active = false;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Command messages
        // ─────────────────────────────────────────────────────────
        Message::DismissSplash => {
            state.view = ViewState::Timer;
            UpdateResult::none()
        }

        Message::ToggleHelp => {
            state.show_help = !state.show_help;
            UpdateResult::none()
        }

        Message::DismissHelp => {
            state.show_help = false;
            UpdateResult::none()
        }

        Message::ToggleTimer => {
            state.clock.toggle_running();
            if state.clock.is_running() {
                UpdateResult::action(UpdateAction::ScheduleTick)
            } else {
                UpdateResult::none()
            }
        }

        Message::SkipSession => {
            let skipped = state.clock.session_type();
            state.clock.skip();
            state.last_completed = Some(skipped);
            state.view = ViewState::Complete;
            debug!("Skipped {:?}, next is {:?}", skipped, state.clock.session_type());
            UpdateResult::none()
        }

        Message::ResetTimer => {
            state.clock.reset_current();
            UpdateResult::none()
        }

        Message::ToggleNotifications => {
            let prefs = &mut state.settings.notifications;
            prefs.visual_flash = !prefs.visual_flash;
            prefs.terminal_bell = !prefs.terminal_bell;
            prefs.system_notification = !prefs.system_notification;
            UpdateResult::none()
        }

        // Shows the already-advanced session, still paused.
        Message::ShowTimer => {
            state.view = ViewState::Timer;
            UpdateResult::none()
        }
    }
}

/// A running countdown reached zero: notify, advance, show the interstitial.
fn handle_session_complete(state: &mut AppState) -> UpdateResult {
    // Capture the finished interval before the clock advances past it.
    let completed = state.clock.session_type();
    let (title, body) = completion_notification(completed);

    state.clock.complete_session();
    state.last_completed = Some(completed);
    state.view = ViewState::Complete;
    debug!(
        "Completed {:?}, next is {:?} ({} total)",
        completed,
        state.clock.session_type(),
        state.clock.total_pomodoros()
    );

    let mut actions = vec![UpdateAction::Notify {
        title: title.to_string(),
        message: body.to_string(),
    }];
    if state.settings.notifications.visual_flash {
        state.flash_active = true;
        actions.push(UpdateAction::ScheduleFlash);
    }
    UpdateResult::actions(actions)
}

/// Notification copy for a finished interval.
fn completion_notification(completed: SessionType) -> (&'static str, &'static str) {
    match completed {
        SessionType::Work => ("Work Session Complete!", "Time for a break."),
        SessionType::ShortBreak => ("Break Over!", "Ready to focus again?"),
        SessionType::LongBreak => ("Long Break Complete!", "Great work! Ready for more?"),
    }
}
