//! # pomo-core - Core Domain Types
//!
//! Foundation crate for Pomo. Provides the Pomodoro session state machine,
//! error handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on
//! external crates (thiserror, tracing, dirs).
//!
//! ## Public API
//!
//! ### Session Machine (`session`)
//! - [`SessionClock`] - Countdown, run/pause flag, and cycle counters
//! - [`SessionType`] - Interval kind (Work, ShortBreak, LongBreak)
//! - [`Durations`] - Interval lengths, defaulting to 25/5/15 minutes
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with a `fatal` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use pomo_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod session;

/// Prelude for common imports used throughout all Pomo crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use session::{
    Durations, SessionClock, SessionType, LONG_BREAK_SECS, POMODOROS_PER_CYCLE, SHORT_BREAK_SECS,
    WORK_SECS,
};
