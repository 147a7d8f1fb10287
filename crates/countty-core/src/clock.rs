//! The clock state machine.
//!
//! A [`ClockState`] is moved through [`ClockState::tick`] once per second.
//! Each tick renders at most one frame and hands back either the next state or
//! [`Transition::Finished`].

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::config::ClockConfig;
use crate::duration::{FormatPolicy, Reading, format_duration};
use crate::layout;
use crate::runner::Surface;
use crate::time::Timestamp;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    CountingUp,
    CountingDown { target: i64 },
    /// The countdown has ended and the screen flashes until the budget is spent.
    Blinking,
}

/// Outcome of a tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Continue(ClockState),
    Finished,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockState {
    phase: Phase,
    start_epoch: Option<i64>,
    phase_offset_nanos: Option<u32>,
    critical: i64,
    blink_budget: u32,
    policy: FormatPolicy,
}

impl ClockState {
    pub fn new(config: &ClockConfig) -> Self {
        let phase = match config.target {
            Some(target) => Phase::CountingDown { target },
            None => Phase::CountingUp,
        };
        Self {
            phase,
            start_epoch: None,
            phase_offset_nanos: None,
            critical: config.critical,
            blink_budget: config.blink_frames(),
            policy: FormatPolicy::default(),
        }
    }

    #[must_use]
    pub fn with_policy(mut self, policy: FormatPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn blink_budget(&self) -> u32 {
        self.blink_budget
    }

    /// Unix second of the first count-up tick.
    pub fn start_epoch(&self) -> Option<i64> {
        self.start_epoch
    }

    /// Sub-second offset ticks are locked to. Zero until one is captured.
    pub fn phase_offset_nanos(&self) -> u32 {
        self.phase_offset_nanos.unwrap_or(0)
    }

    /// Advances the clock to `now`, drawing the resulting frame on `surface`.
    ///
    /// # Errors
    /// Returns an error if the surface cannot be measured or written.
    pub fn tick<S: Surface>(mut self, now: Timestamp, surface: &mut S) -> Result<Transition> {
        match self.phase {
            Phase::CountingUp => {
                let start = *self.start_epoch.get_or_insert(now.secs);
                self.phase_offset_nanos.get_or_insert(now.subsec_nanos);

                // no critical window when counting up
                let reading = format_duration(now.secs - start, 0, self.policy);
                draw_reading(surface, &reading)?;
                Ok(Transition::Continue(self))
            }
            Phase::CountingDown { target } => {
                let remaining = target - now.secs;
                if remaining > 0 {
                    let reading = format_duration(remaining, self.critical, self.policy);
                    debug!(remaining, highlighted = reading.highlighted, "countdown tick");
                    draw_reading(surface, &reading)?;
                    return Ok(Transition::Continue(self));
                }

                if self.blink_budget == 0 {
                    info!("countdown finished");
                    return Ok(Transition::Finished);
                }

                info!(frames = self.blink_budget, "countdown finished, blinking");
                self.phase = Phase::Blinking;
                self.blink(surface)
            }
            Phase::Blinking => {
                if self.blink_budget == 0 {
                    info!("blinking done");
                    return Ok(Transition::Finished);
                }
                self.blink(surface)
            }
        }
    }

    fn blink<S: Surface>(mut self, surface: &mut S) -> Result<Transition> {
        let painted = self.blink_budget % 2 == 0;
        let geometry = surface.geometry()?;

        let mut frame = Vec::new();
        layout::render_fill(&mut frame, geometry, painted)
            .context("Failed to render blink frame")?;
        surface.present(&frame)?;

        self.blink_budget -= 1;
        Ok(Transition::Continue(self))
    }
}

fn draw_reading<S: Surface>(surface: &mut S, reading: &Reading) -> Result<()> {
    let geometry = surface.geometry()?;

    let mut frame = Vec::new();
    layout::render_frame(&mut frame, reading.lines.as_slice(), reading.highlighted, geometry)
        .context("Failed to render frame")?;
    surface.present(&frame)
}
