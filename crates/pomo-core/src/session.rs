//! The Pomodoro session state machine.
//!
//! [`SessionClock`] is a pure state machine: it holds the current interval
//! kind, the countdown, and the cycle counters, and exposes total transition
//! operations with no I/O. The controller in `pomo-app` is its only caller.

/// Default work interval length in seconds (25 minutes).
pub const WORK_SECS: u64 = 25 * 60;

/// Default short break length in seconds (5 minutes).
pub const SHORT_BREAK_SECS: u64 = 5 * 60;

/// Default long break length in seconds (15 minutes).
pub const LONG_BREAK_SECS: u64 = 15 * 60;

/// Work intervals per cycle; the final one is followed by a long break.
pub const POMODOROS_PER_CYCLE: u8 = 4;

/// Kind of a timed interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionType {
    Work,
    ShortBreak,
    LongBreak,
}

impl SessionType {
    /// Uppercase display name used by the timer view.
    pub fn name(&self) -> &'static str {
        match self {
            SessionType::Work => "WORK SESSION",
            SessionType::ShortBreak => "SHORT BREAK",
            SessionType::LongBreak => "LONG BREAK",
        }
    }
}

/// Interval lengths in seconds.
///
/// Defaults to the standard 25/5/15 Pomodoro split; the CLI may override
/// them at startup. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Durations {
    pub work: u64,
    pub short_break: u64,
    pub long_break: u64,
}

impl Default for Durations {
    fn default() -> Self {
        Self {
            work: WORK_SECS,
            short_break: SHORT_BREAK_SECS,
            long_break: LONG_BREAK_SECS,
        }
    }
}

impl Durations {
    /// Length of the given interval kind.
    pub fn for_session(&self, session: SessionType) -> u64 {
        match session {
            SessionType::Work => self.work,
            SessionType::ShortBreak => self.short_break,
            SessionType::LongBreak => self.long_break,
        }
    }
}

/// Countdown state for the current interval plus cycle counters.
///
/// Every operation is total; there is nothing to fail. Mutated exclusively
/// by the controller in response to events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionClock {
    session_type: SessionType,
    durations: Durations,
    duration: u64,
    remaining: u64,
    running: bool,
    pomodoro_count: u8,
    total_pomodoros: u64,
}

impl Default for SessionClock {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionClock {
    /// A paused work session at full duration, counters at zero.
    pub fn new() -> Self {
        Self::with_durations(Durations::default())
    }

    /// Like [`SessionClock::new`] but with custom interval lengths.
    pub fn with_durations(durations: Durations) -> Self {
        Self {
            session_type: SessionType::Work,
            durations,
            duration: durations.work,
            remaining: durations.work,
            running: false,
            pomodoro_count: 0,
            total_pomodoros: 0,
        }
    }

    pub fn session_type(&self) -> SessionType {
        self.session_type
    }

    pub fn duration(&self) -> u64 {
        self.duration
    }

    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Completed work intervals in the current cycle (0..=4).
    pub fn pomodoro_count(&self) -> u8 {
        self.pomodoro_count
    }

    /// All work intervals ever credited; never reset.
    pub fn total_pomodoros(&self) -> u64 {
        self.total_pomodoros
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    pub fn toggle_running(&mut self) {
        self.running = !self.running;
    }

    /// Restore the current interval to its full duration, paused.
    ///
    /// Does not touch the session type or the cycle counters.
    pub fn reset_current(&mut self) {
        self.remaining = self.duration;
        self.running = false;
    }

    /// Advance the countdown by one second.
    ///
    /// No-op while paused or already at zero; `remaining` never underflows.
    pub fn tick(&mut self) {
        if self.running && self.remaining > 0 {
            self.remaining -= 1;
        }
    }

    pub fn is_complete(&self) -> bool {
        self.remaining == 0
    }

    /// Fraction of the current interval elapsed, in `[0.0, 1.0]`.
    pub fn progress(&self) -> f64 {
        if self.duration == 0 {
            return 0.0;
        }
        (self.duration - self.remaining) as f64 / self.duration as f64
    }

    /// Move to the next interval without completing the current one.
    ///
    /// A skipped work interval still counts toward the cycle; skipping a
    /// break is indistinguishable from completing it.
    pub fn skip(&mut self) {
        self.advance(self.session_type == SessionType::Work);
    }

    /// Transition after a countdown naturally reached zero.
    pub fn complete_session(&mut self) {
        self.advance(true);
    }

    /// The single transition shared by skip and natural completion.
    ///
    /// `counts_toward_cycle` controls whether an outgoing work interval is
    /// credited to the counters; breaks never touch them either way. The
    /// new interval starts at full duration, paused.
    fn advance(&mut self, counts_toward_cycle: bool) {
        if self.session_type == SessionType::Work && counts_toward_cycle {
            self.total_pomodoros += 1;
            self.pomodoro_count += 1;
        }

        let next = match self.session_type {
            SessionType::Work => {
                if self.pomodoro_count >= POMODOROS_PER_CYCLE {
                    self.pomodoro_count = 0;
                    SessionType::LongBreak
                } else {
                    SessionType::ShortBreak
                }
            }
            // pomodoro_count survives a short break and is already 0
            // coming out of a long one.
            SessionType::ShortBreak | SessionType::LongBreak => SessionType::Work,
        };

        self.session_type = next;
        self.duration = self.durations.for_session(next);
        self.remaining = self.duration;
        self.running = false;
    }

    /// Remaining time formatted as `MM:SS`.
    pub fn format_remaining(&self) -> String {
        format!(
            "{:02}:{:02}",
            self.minutes_remaining(),
            self.seconds_remaining()
        )
    }

    /// Whole minutes left on the countdown.
    pub fn minutes_remaining(&self) -> u64 {
        self.remaining / 60
    }

    /// Seconds component of the countdown (0..60).
    pub fn seconds_remaining(&self) -> u64 {
        self.remaining % 60
    }

    /// Uppercase name of the current interval.
    pub fn session_name(&self) -> &'static str {
        self.session_type.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn short_durations() -> Durations {
        Durations {
            work: 4,
            short_break: 2,
            long_break: 3,
        }
    }

    #[test]
    fn test_new_clock_is_paused_work_at_full_duration() {
        let clock = SessionClock::new();
        assert_eq!(clock.session_type(), SessionType::Work);
        assert_eq!(clock.duration(), WORK_SECS);
        assert_eq!(clock.remaining(), WORK_SECS);
        assert!(!clock.is_running());
        assert_eq!(clock.pomodoro_count(), 0);
        assert_eq!(clock.total_pomodoros(), 0);
    }

    #[test]
    fn test_start_pause_toggle() {
        let mut clock = SessionClock::new();
        clock.start();
        assert!(clock.is_running());
        clock.pause();
        assert!(!clock.is_running());
        clock.toggle_running();
        assert!(clock.is_running());
        clock.toggle_running();
        assert!(!clock.is_running());
    }

    #[test]
    fn test_tick_decrements_only_while_running() {
        let mut clock = SessionClock::new();
        clock.tick();
        assert_eq!(clock.remaining(), WORK_SECS);

        clock.start();
        clock.tick();
        assert_eq!(clock.remaining(), WORK_SECS - 1);
    }

    #[test]
    fn test_tick_never_underflows() {
        let mut clock = SessionClock::with_durations(short_durations());
        clock.start();
        for _ in 0..100 {
            clock.tick();
        }
        assert_eq!(clock.remaining(), 0);
        assert!(clock.is_complete());
    }

    #[test]
    fn test_reset_restores_full_duration_and_pauses() {
        let mut clock = SessionClock::new();
        clock.start();
        clock.tick();
        clock.tick();
        clock.reset_current();
        assert_eq!(clock.remaining(), clock.duration());
        assert!(!clock.is_running());
        assert_eq!(clock.session_type(), SessionType::Work);
    }

    #[test]
    fn test_is_complete_only_at_zero() {
        let mut clock = SessionClock::with_durations(Durations {
            work: 1500,
            ..Durations::default()
        });
        clock.start();
        for i in 1..=1500u64 {
            assert!(!clock.is_complete(), "complete before tick {i}");
            clock.tick();
        }
        assert!(clock.is_complete());
    }

    #[test]
    fn test_progress_bounds_and_monotonicity() {
        let mut clock = SessionClock::with_durations(short_durations());
        assert_eq!(clock.progress(), 0.0);

        clock.start();
        let mut last = 0.0;
        while !clock.is_complete() {
            clock.tick();
            let p = clock.progress();
            assert!(p >= last, "progress went backwards: {last} -> {p}");
            last = p;
        }
        assert_eq!(clock.progress(), 1.0);
    }

    #[test]
    fn test_progress_zero_duration_guard() {
        let clock = SessionClock::with_durations(Durations {
            work: 0,
            ..Durations::default()
        });
        assert_eq!(clock.progress(), 0.0);
    }

    #[test]
    fn test_work_completion_moves_to_short_break() {
        let mut clock = SessionClock::new();
        clock.complete_session();
        assert_eq!(clock.session_type(), SessionType::ShortBreak);
        assert_eq!(clock.duration(), SHORT_BREAK_SECS);
        assert_eq!(clock.remaining(), SHORT_BREAK_SECS);
        assert!(!clock.is_running());
        assert_eq!(clock.pomodoro_count(), 1);
        assert_eq!(clock.total_pomodoros(), 1);
    }

    #[test]
    fn test_break_completion_returns_to_work() {
        let mut clock = SessionClock::new();
        clock.complete_session();
        clock.complete_session();
        assert_eq!(clock.session_type(), SessionType::Work);
        assert_eq!(clock.duration(), WORK_SECS);
        assert_eq!(clock.pomodoro_count(), 1);
        assert_eq!(clock.total_pomodoros(), 1);
    }

    #[test]
    fn test_fourth_work_earns_long_break() {
        let mut clock = SessionClock::new();
        // Three work/short-break pairs.
        for _ in 0..3 {
            clock.complete_session();
            assert_eq!(clock.session_type(), SessionType::ShortBreak);
            clock.complete_session();
        }
        assert_eq!(clock.pomodoro_count(), 3);

        // Fourth work interval completes the cycle.
        clock.complete_session();
        assert_eq!(clock.session_type(), SessionType::LongBreak);
        assert_eq!(clock.duration(), LONG_BREAK_SECS);
        assert_eq!(clock.pomodoro_count(), 0);
        assert_eq!(clock.total_pomodoros(), 4);

        // The long break resets the cycle but not the lifetime total.
        clock.complete_session();
        assert_eq!(clock.session_type(), SessionType::Work);
        assert_eq!(clock.pomodoro_count(), 0);
        assert_eq!(clock.total_pomodoros(), 4);
    }

    #[test]
    fn test_count_stays_below_cycle_length_before_work_exits() {
        let mut clock = SessionClock::new();
        for _ in 0..12 {
            if clock.session_type() == SessionType::Work {
                assert!(clock.pomodoro_count() < POMODOROS_PER_CYCLE);
            }
            clock.complete_session();
        }
    }

    #[test]
    fn test_skip_work_credits_the_cycle() {
        let mut clock = SessionClock::new();
        clock.skip();
        assert_eq!(clock.session_type(), SessionType::ShortBreak);
        assert_eq!(clock.pomodoro_count(), 1);
        assert_eq!(clock.total_pomodoros(), 1);
    }

    #[test]
    fn test_skip_work_with_three_completed_earns_long_break() {
        let mut clock = SessionClock::new();
        for _ in 0..3 {
            clock.complete_session(); // work -> short break
            clock.complete_session(); // short break -> work
        }
        assert_eq!(clock.pomodoro_count(), 3);

        clock.skip();
        assert_eq!(clock.session_type(), SessionType::LongBreak);
        assert_eq!(clock.pomodoro_count(), 0);
        assert_eq!(clock.total_pomodoros(), 4);
    }

    #[test]
    fn test_skip_break_leaves_counters_alone() {
        let mut clock = SessionClock::new();
        clock.complete_session();
        assert_eq!(clock.total_pomodoros(), 1);

        clock.skip();
        assert_eq!(clock.session_type(), SessionType::Work);
        assert_eq!(clock.pomodoro_count(), 1);
        assert_eq!(clock.total_pomodoros(), 1);
    }

    #[test]
    fn test_advance_pauses_the_new_interval() {
        let mut clock = SessionClock::new();
        clock.start();
        clock.complete_session();
        assert!(!clock.is_running());
        assert_eq!(clock.remaining(), clock.duration());
    }

    #[test]
    fn test_custom_durations_flow_through_transitions() {
        let durations = short_durations();
        let mut clock = SessionClock::with_durations(durations);
        assert_eq!(clock.duration(), durations.work);

        clock.complete_session();
        assert_eq!(clock.duration(), durations.short_break);

        clock.complete_session();
        assert_eq!(clock.duration(), durations.work);
    }

    #[test]
    fn test_format_remaining() {
        let mut clock = SessionClock::new();
        assert_eq!(clock.format_remaining(), "25:00");
        clock.start();
        clock.tick();
        assert_eq!(clock.format_remaining(), "24:59");
        assert_eq!(clock.minutes_remaining(), 24);
        assert_eq!(clock.seconds_remaining(), 59);
    }

    #[test]
    fn test_session_names() {
        assert_eq!(SessionType::Work.name(), "WORK SESSION");
        assert_eq!(SessionType::ShortBreak.name(), "SHORT BREAK");
        assert_eq!(SessionType::LongBreak.name(), "LONG BREAK");
    }
}
