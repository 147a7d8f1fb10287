//! Run parameters for the clock.

use chrono::{DateTime, Utc};

/// Seconds left at which a countdown starts being highlighted.
pub const DEFAULT_CRITICAL_SECS: i64 = 10;

/// Blink cycles shown after a countdown ends.
pub const DEFAULT_BLINK_CYCLES: u32 = 0;

/// The three knobs of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockConfig {
    /// Countdown target as Unix seconds; `None` counts up from start.
    pub target: Option<i64>,
    /// Highlight threshold in seconds; non-positive disables highlighting.
    pub critical: i64,
    /// Number of off/on flash cycles after the countdown reaches zero.
    pub blink_cycles: u32,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            target: None,
            critical: DEFAULT_CRITICAL_SECS,
            blink_cycles: DEFAULT_BLINK_CYCLES,
        }
    }
}

impl ClockConfig {
    /// Builds a config from raw flag values. A target of `0` means count up.
    pub fn from_flags(target: i64, critical: i64, blink_cycles: u32) -> Self {
        Self {
            target: (target != 0).then_some(target),
            critical,
            blink_cycles,
        }
    }

    pub fn countdown(target: i64) -> Self {
        Self {
            target: Some(target),
            ..Self::default()
        }
    }

    /// Number of blink frames: every cycle is one cleared and one painted frame.
    pub fn blink_frames(&self) -> u32 {
        self.blink_cycles.saturating_mul(2)
    }

    /// The countdown target as a UTC timestamp, when representable.
    pub fn target_time(&self) -> Option<DateTime<Utc>> {
        self.target
            .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0))
    }
}
