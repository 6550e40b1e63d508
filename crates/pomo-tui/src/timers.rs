//! Deferred one-shot timers driving ticks, splash frames, and the flash.
//!
//! The controller never owns a free-running clock; it emits `Schedule*`
//! actions and this module keeps at most one armed deadline per kind.
//! Re-arming overwrites, firing clears, and a deadline whose context went
//! stale simply fires into a handler that ignores it.

use std::time::{Duration, Instant};

use pomo_app::message::Message;

/// Countdown tick period.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Splash animation frame period.
pub const SPLASH_TICK_PERIOD: Duration = Duration::from_millis(200);

/// How long the completion flash stays on screen.
pub const FLASH_PERIOD: Duration = Duration::from_millis(500);

/// The three timer kinds the controller can arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    Tick,
    SplashTick,
    Flash,
}

impl TimerKind {
    /// Delay between arming and firing.
    pub fn period(&self) -> Duration {
        match self {
            TimerKind::Tick => TICK_PERIOD,
            TimerKind::SplashTick => SPLASH_TICK_PERIOD,
            TimerKind::Flash => FLASH_PERIOD,
        }
    }

    /// The message delivered when this timer fires.
    pub fn message(&self) -> Message {
        match self {
            TimerKind::Tick => Message::Tick,
            TimerKind::SplashTick => Message::SplashTick,
            TimerKind::Flash => Message::FlashTimeout,
        }
    }
}

/// One optional armed deadline per timer kind.
#[derive(Debug, Default)]
pub struct TimerSlots {
    tick: Option<Instant>,
    splash_tick: Option<Instant>,
    flash: Option<Instant>,
}

impl TimerSlots {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm `kind` to fire one period after `now`, replacing any armed
    /// deadline of the same kind.
    pub fn arm(&mut self, kind: TimerKind, now: Instant) {
        *self.slot(kind) = Some(now + kind.period());
    }

    /// Clear and return every timer whose deadline has passed.
    pub fn take_due(&mut self, now: Instant) -> Vec<TimerKind> {
        let mut due = Vec::new();
        for kind in [TimerKind::Tick, TimerKind::SplashTick, TimerKind::Flash] {
            let slot = self.slot(kind);
            if slot.is_some_and(|deadline| deadline <= now) {
                *slot = None;
                due.push(kind);
            }
        }
        due
    }

    fn slot(&mut self, kind: TimerKind) -> &mut Option<Instant> {
        match kind {
            TimerKind::Tick => &mut self.tick,
            TimerKind::SplashTick => &mut self.splash_tick,
            TimerKind::Flash => &mut self.flash,
        }
    }
}
