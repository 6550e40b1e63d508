//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;

/// All possible messages/actions in the application
///
/// External events arrive from the terminal, the armed timers, and the
/// signal handler; command messages are produced by key dispatch and fed
/// back through `update()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// One-second countdown tick (armed, not free-running)
    Tick,

    /// Splash animation frame tick
    SplashTick,

    /// The visual flash delay elapsed
    FlashTimeout,

    /// Terminal was resized
    Resize { width: u16, height: u16 },

    /// Quit (quit key or signal handler); settings are persisted first
    Quit,

    // ─────────────────────────────────────────────────────────
    // Command messages (produced by key dispatch)
    // ─────────────────────────────────────────────────────────
    /// Start/pause the countdown
    ToggleTimer,
    /// Abandon the current interval and advance to the next
    SkipSession,
    /// Restore the current interval to full duration, paused
    ResetTimer,
    /// Flip all three notification channel preferences
    ToggleNotifications,
    /// Show/hide the help overlay
    ToggleHelp,
    /// Any key while help is showing consumes the key and hides it
    DismissHelp,
    /// Any key on the splash screen jumps straight to the timer
    DismissSplash,
    /// Leave the complete view for the timer view (paused)
    ShowTimer,
}
