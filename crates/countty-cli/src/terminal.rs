//! Terminal lifecycle management.
//!
//! The cursor is hidden while the clock runs. It is guaranteed to be shown
//! again on:
//! - Normal exit and error returns (via Drop)
//! - Ctrl+C / SIGTERM / SIGHUP (the loop unwinds through Drop; a second
//!   signal runs [`restore_on_exit`] before exiting)
//! - Panic

use std::io::{self, Stdout, Write};
use std::panic;

use anyhow::{Context, Result};
use countty_core::layout::Geometry;
use countty_core::runner::Surface;
use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::style::{Attribute, SetAttribute};
use crossterm::terminal;

/// Hides the cursor.
///
/// # Errors
/// Returns an error if the operation fails.
pub fn hide_cursor() -> Result<()> {
    execute!(io::stdout(), Hide).context("Failed to hide cursor")
}

/// Resets text attributes and shows the cursor.
///
/// This function is idempotent and safe to call multiple times.
///
/// # Errors
/// Returns an error if the operation fails.
pub fn restore_cursor() -> Result<()> {
    // a blink frame can be cut off before its trailing reset
    execute!(io::stdout(), SetAttribute(Attribute::Reset), Show)
        .context("Failed to restore cursor")
}

/// Restore hook for a forced exit: shows the cursor and ends the line.
pub fn restore_on_exit() {
    let _ = restore_cursor();
    println!();
}

/// Installs a panic hook that restores the cursor before printing the panic.
///
/// Call this BEFORE creating a [`TerminalSurface`] to ensure restore on panic.
pub fn install_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_cursor();
        original_hook(panic_info);
    }));
}

/// The live terminal on stdout.
///
/// Creating one hides the cursor; dropping it shows the cursor again.
pub struct TerminalSurface {
    stdout: Stdout,
}

impl TerminalSurface {
    /// # Errors
    /// Returns an error if the cursor cannot be hidden.
    pub fn new() -> Result<Self> {
        hide_cursor()?;
        Ok(Self {
            stdout: io::stdout(),
        })
    }
}

impl Surface for TerminalSurface {
    fn geometry(&mut self) -> Result<Geometry> {
        let (cols, rows) = terminal::size().context("Failed to read terminal size")?;
        Ok(Geometry::new(cols, rows))
    }

    fn present(&mut self, frame: &[u8]) -> Result<()> {
        let mut out = self.stdout.lock();
        out.write_all(frame).context("Failed to write frame")?;
        out.flush().context("Failed to flush frame")
    }
}

impl Drop for TerminalSurface {
    fn drop(&mut self) {
        let _ = restore_cursor();
    }
}
