//! The tick loop.

use anyhow::Result;
use tracing::{debug, info};

use crate::clock::{ClockState, Phase, Transition};
use crate::layout::Geometry;
use crate::scheduler::{Sleeper, Wake, delay_until_next_tick};
use crate::time::WallClock;

/// Where frames are shown.
pub trait Surface {
    /// Current size of the screen. Called before every frame.
    ///
    /// # Errors
    /// Returns an error if the size cannot be determined.
    fn geometry(&mut self) -> Result<Geometry>;

    /// Writes one complete frame.
    ///
    /// # Errors
    /// Returns an error if the frame cannot be written.
    fn present(&mut self, frame: &[u8]) -> Result<()>;
}

/// Why the loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    /// The countdown ended and any blinking is done.
    Finished,
    /// A signal cut the wait between two ticks.
    Interrupted,
}

/// Runs the clock until it finishes or is interrupted.
///
/// Count-up runs, and countdowns that never run out of blink budget, only stop
/// on interrupt.
///
/// # Errors
/// Returns an error if the wall clock cannot be read or a frame cannot be shown.
pub fn run<C, S, P>(
    mut state: ClockState,
    clock: &C,
    surface: &mut S,
    sleeper: &mut P,
) -> Result<Exit>
where
    C: WallClock,
    S: Surface,
    P: Sleeper,
{
    match state.phase() {
        Phase::CountingUp => info!("counting up"),
        Phase::CountingDown { target } => info!(target, "counting down"),
        Phase::Blinking => info!("blinking"),
    }

    loop {
        let now = clock.now()?;
        state = match state.tick(now, surface)? {
            Transition::Continue(next) => next,
            Transition::Finished => return Ok(Exit::Finished),
        };

        let delay = delay_until_next_tick(clock.now()?.subsec_nanos, state.phase_offset_nanos());
        debug!(?delay, "waiting for next tick");
        if sleeper.sleep(delay) == Wake::Interrupted {
            info!("interrupted");
            return Ok(Exit::Interrupted);
        }
    }
}
