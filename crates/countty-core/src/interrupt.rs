//! Signal handling for the tick loop.
//!
//! The handler only sets a flag and wakes the sleeping loop; the loop then
//! unwinds normally so the terminal is restored by its guard. If a second
//! signal arrives before that happens, the registered restore hook runs and the
//! process exits on the spot.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Condvar, Mutex, OnceLock, PoisonError};
use std::time::Duration;

use anyhow::{Context, Result};

use crate::scheduler::{Sleeper, Wake};

static INTERRUPTED: AtomicBool = AtomicBool::new(false);
static WAKE: OnceLock<(Mutex<()>, Condvar)> = OnceLock::new();
static RESTORE_HOOK: OnceLock<Box<dyn Fn() + Send + Sync>> = OnceLock::new();

fn wake_pair() -> &'static (Mutex<()>, Condvar) {
    WAKE.get_or_init(|| (Mutex::new(()), Condvar::new()))
}

/// Installs the handler for Ctrl+C, SIGTERM and SIGHUP.
///
/// # Errors
/// Returns an error if a handler is already installed or cannot be registered.
pub fn init() -> Result<()> {
    ctrlc::set_handler(trigger).context("Failed to install signal handler")
}

/// Records an interrupt and wakes any sleeper, force-exiting on a second one.
pub fn trigger() {
    if INTERRUPTED.swap(true, Ordering::SeqCst) {
        // process::exit() skips Drop handlers
        if let Some(hook) = RESTORE_HOOK.get() {
            hook();
        }
        std::process::exit(0);
    }

    let (lock, wake) = wake_pair();
    let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);
    wake.notify_all();
}

/// Checks if an interrupt has been requested.
pub fn is_interrupted() -> bool {
    INTERRUPTED.load(Ordering::SeqCst)
}

/// Resets the interrupt flag.
pub fn reset() {
    INTERRUPTED.store(false, Ordering::SeqCst);
}

/// Registers a hook that restores the terminal before a forced exit.
pub fn set_restore_hook<F>(hook: F)
where
    F: Fn() + Send + Sync + 'static,
{
    let _ = RESTORE_HOOK.set(Box::new(hook));
}

/// Sleeps on a condition variable that [`trigger`] wakes early.
#[derive(Debug, Default)]
pub struct InterruptibleSleep;

impl Sleeper for InterruptibleSleep {
    fn sleep(&mut self, duration: Duration) -> Wake {
        let (lock, wake) = wake_pair();
        let guard = lock.lock().unwrap_or_else(PoisonError::into_inner);
        let _ = wake
            .wait_timeout_while(guard, duration, |_| !is_interrupted())
            .unwrap_or_else(PoisonError::into_inner);

        if is_interrupted() {
            Wake::Interrupted
        } else {
            Wake::Elapsed
        }
    }
}

#[cfg(test)]
mod tests {
    use std::thread;
    use std::time::Instant;

    use super::*;

    // Single test: the flag is process-wide.
    #[test]
    fn test_sleep_elapses_then_wakes_on_interrupt() {
        reset();
        let mut sleeper = InterruptibleSleep;
        assert_eq!(sleeper.sleep(Duration::from_millis(20)), Wake::Elapsed);

        let started = Instant::now();
        let waker = thread::spawn(|| {
            thread::sleep(Duration::from_millis(50));
            trigger();
        });
        assert_eq!(sleeper.sleep(Duration::from_secs(30)), Wake::Interrupted);
        assert!(started.elapsed() < Duration::from_secs(10));
        waker.join().unwrap();

        assert!(is_interrupted());
        reset();
        assert!(!is_interrupted());
    }
}
