//! Main TUI runner - entry point and event loop

use std::time::Instant;

use tokio::sync::mpsc;

use pomo_app::message::Message;
use pomo_app::state::{AppState, ViewState};
use pomo_app::{config, handler, signals, Settings, UpdateAction};
use pomo_core::prelude::*;
use pomo_core::{Durations, SessionClock};

use crate::notify::Notifier;
use crate::timers::{TimerKind, TimerSlots};
use crate::{event, render, terminal};

/// Run the TUI application until the user quits.
pub async fn run(durations: Durations, skip_splash: bool) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    // Load configuration
    let settings = config::load_settings();
    info!(
        "Loaded settings: bell={} system={} flash={}",
        settings.notifications.terminal_bell,
        settings.notifications.system_notification,
        settings.notifications.visual_flash
    );

    // Initialize terminal
    let mut term = ratatui::init();

    // Create initial state
    let mut state = AppState::with_settings(SessionClock::with_durations(durations), settings);
    if skip_splash {
        state.view = ViewState::Timer;
    }

    // Unified message channel (fed by the signal handler)
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
    signals::spawn_signal_handler(msg_tx);

    // Arm the splash animation; everything else is armed by the handler.
    let mut timers = TimerSlots::new();
    if !skip_splash {
        timers.arm(TimerKind::SplashTick, Instant::now());
    }

    let result = run_loop(&mut term, &mut state, msg_rx, &mut timers);

    // Restore terminal
    ratatui::restore();

    result
}

/// Main event loop
///
/// One message at a time, to completion: drain the channel, fire due
/// timers, draw, then poll the terminal.
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    timers: &mut TimerSlots,
) -> Result<()> {
    let notifier = Notifier::new();

    while !state.should_quit() {
        // Process external messages (signal handler)
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, timers, &notifier);
        }

        // Fire armed timers whose deadline passed
        for kind in timers.take_due(Instant::now()) {
            process_message(state, kind.message(), timers, &notifier);
        }

        // Render
        terminal.draw(|frame| render::view(frame, state))?;

        // Handle terminal events (50ms poll keeps the loop responsive)
        if let Some(message) = event::poll()? {
            process_message(state, message, timers, &notifier);
        }
    }

    Ok(())
}

/// Feed a message through update(), chasing follow-ups and running actions.
fn process_message(
    state: &mut AppState,
    message: Message,
    timers: &mut TimerSlots,
    notifier: &Notifier,
) {
    let mut current = Some(message);
    while let Some(msg) = current.take() {
        let result = handler::update(state, msg);
        for action in result.actions {
            handle_action(state, action, timers, notifier);
        }
        current = result.message;
    }
}

/// Execute a side effect requested by the handler.
fn handle_action(
    state: &AppState,
    action: UpdateAction,
    timers: &mut TimerSlots,
    notifier: &Notifier,
) {
    match action {
        UpdateAction::ScheduleTick => timers.arm(TimerKind::Tick, Instant::now()),
        UpdateAction::ScheduleSplashTick => timers.arm(TimerKind::SplashTick, Instant::now()),
        UpdateAction::ScheduleFlash => timers.arm(TimerKind::Flash, Instant::now()),
        UpdateAction::Notify { title, message } => {
            if let Err(e) = notifier.notify(&state.settings.notifications, &title, &message) {
                warn!("Notification delivery incomplete: {}", e);
            }
        }
        UpdateAction::SaveSettings => {
            if let Err(e) = save_settings(&state.settings) {
                warn!("Failed to save settings: {}", e);
            }
        }
    }
}

fn save_settings(settings: &Settings) -> Result<()> {
    config::save_settings(settings).context("saving settings on quit")
}
