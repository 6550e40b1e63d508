//! Logging configuration using tracing
//!
//! The TUI owns stdout, so logs go to a rolling file only.

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/pomo/logs/`.
/// Log level is controlled by the `POMO_LOG` environment variable.
///
/// # Examples
/// ```bash
/// POMO_LOG=debug pomo
/// POMO_LOG=trace pomo
/// ```
pub fn init() -> Result<()> {
    let log_dir = log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "pomo.log");

    // Default to info, allow override via POMO_LOG
    let env_filter =
        EnvFilter::try_from_env("POMO_LOG").unwrap_or_else(|_| EnvFilter::new("pomo=info,warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("Pomo starting, log directory: {}", log_dir.display());

    Ok(())
}

/// Get the log directory path
fn log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("pomo").join("logs")
}
