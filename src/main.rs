//! Pomo - A cyberpunk Pomodoro timer for the terminal
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use clap::Parser;
use pomo_core::Durations;

/// Pomo - A cyberpunk Pomodoro timer for the terminal
#[derive(Parser, Debug)]
#[command(name = "pomo")]
#[command(about = "A cyberpunk Pomodoro timer for the terminal", long_about = None)]
struct Args {
    /// Work interval length in minutes
    #[arg(long, value_name = "MINUTES", default_value_t = 25, value_parser = clap::value_parser!(u64).range(1..))]
    work: u64,

    /// Short break length in minutes
    #[arg(long, value_name = "MINUTES", default_value_t = 5, value_parser = clap::value_parser!(u64).range(1..))]
    short_break: u64,

    /// Long break length in minutes
    #[arg(long, value_name = "MINUTES", default_value_t = 15, value_parser = clap::value_parser!(u64).range(1..))]
    long_break: u64,

    /// Skip the startup splash screen
    #[arg(long)]
    no_splash: bool,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    if let Err(e) = pomo_core::logging::init() {
        // The TUI still works without a log file.
        eprintln!("Warning: failed to initialize logging: {e}");
    }

    let durations = Durations {
        work: args.work * 60,
        short_break: args.short_break * 60,
        long_break: args.long_break * 60,
    };

    pomo_tui::run(durations, args.no_splash).await?;

    Ok(())
}
