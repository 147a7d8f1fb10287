//! CLI entry and dispatch.

use anyhow::Result;
use clap::Parser;
use countty_core::clock::ClockState;
use countty_core::config::{ClockConfig, DEFAULT_BLINK_CYCLES, DEFAULT_CRITICAL_SECS};
use countty_core::interrupt::{self, InterruptibleSleep};
use countty_core::runner::{self, Exit};
use countty_core::time::SystemClock;

use crate::{logging, terminal};

#[derive(Parser, Debug)]
#[command(name = "countty")]
#[command(version)]
#[command(about = "Big-digit terminal clock: counts up from start or down to a target time")]
struct Cli {
    /// Count down to this Unix time in seconds (0 counts up from start)
    #[arg(
        short = 't',
        long,
        env = "COUNTTY_TARGET",
        value_name = "EPOCH",
        default_value_t = 0,
        allow_negative_numbers = true
    )]
    target: i64,

    /// Highlight the countdown when this many seconds or fewer are left (0 or less disables)
    #[arg(
        short = 'c',
        long,
        env = "COUNTTY_CRITICAL",
        value_name = "SECONDS",
        default_value_t = DEFAULT_CRITICAL_SECS,
        allow_negative_numbers = true
    )]
    critical: i64,

    /// Flash the screen this many times when the countdown ends (0 exits right away)
    #[arg(
        short = 'b',
        long,
        env = "COUNTTY_BLINK",
        value_name = "COUNT",
        default_value_t = DEFAULT_BLINK_CYCLES
    )]
    blink: u32,
}

impl From<&Cli> for ClockConfig {
    fn from(cli: &Cli) -> Self {
        ClockConfig::from_flags(cli.target, cli.critical, cli.blink)
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let _log_guard = logging::init()?;

    let config = ClockConfig::from(&cli);
    if let Some(target) = config.target_time() {
        tracing::info!(
            %target,
            critical = config.critical,
            blink = config.blink_cycles,
            "starting countdown"
        );
    }

    interrupt::init()?;
    terminal::install_panic_hook();
    interrupt::set_restore_hook(terminal::restore_on_exit);

    let exit = {
        let mut surface = terminal::TerminalSurface::new()?;
        runner::run(
            ClockState::new(&config),
            &SystemClock,
            &mut surface,
            &mut InterruptibleSleep,
        )?
    };

    if exit == Exit::Interrupted {
        println!();
    }
    Ok(())
}
