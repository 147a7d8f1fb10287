//! Phase-locked scheduling of clock ticks.
//!
//! Ticks are meant to land at the same sub-second offset every second: the
//! offset sampled on the first count-up tick, or the exact second boundary for
//! countdowns. The delay is computed in integer nanoseconds so it cannot drift.

use std::time::Duration;

pub const NANOS_PER_SEC: u32 = 1_000_000_000;

/// Why a [`Sleeper`] returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wake {
    Elapsed,
    Interrupted,
}

/// Blocking wait between ticks.
pub trait Sleeper {
    fn sleep(&mut self, duration: Duration) -> Wake;
}

/// Time to sleep from `now_subsec_nanos` until the next tick at
/// `phase_offset_nanos` past a whole second.
///
/// The nanosecond part of the result is always below one second; an adjusted
/// remainder of a full second or more is carried into the seconds part.
pub fn delay_until_next_tick(now_subsec_nanos: u32, phase_offset_nanos: u32) -> Duration {
    let second = u64::from(NANOS_PER_SEC);
    let now = u64::from(now_subsec_nanos) % second;
    let phase = u64::from(phase_offset_nanos) % second;

    let nanos = second - now + phase;
    if nanos >= second {
        Duration::new(1, (nanos - second) as u32)
    } else {
        Duration::new(0, nanos as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_on_boundary_without_phase_sleeps_one_second() {
        assert_eq!(delay_until_next_tick(0, 0), Duration::from_secs(1));
    }

    #[test]
    fn test_mid_second_without_phase_wakes_on_boundary() {
        assert_eq!(
            delay_until_next_tick(300_000_000, 0),
            Duration::from_millis(700)
        );
    }

    #[test]
    fn test_phase_keeps_offset_after_late_wake() {
        // woke 2ms after the 250ms phase point
        assert_eq!(
            delay_until_next_tick(252_000_000, 250_000_000),
            Duration::from_millis(998)
        );
    }

    #[test]
    fn test_sample_before_phase_carries_a_second() {
        assert_eq!(
            delay_until_next_tick(100_000_000, 600_000_000),
            Duration::new(1, 500_000_000)
        );
    }

    #[test]
    fn test_remainder_stays_below_one_second() {
        for phase in [0, 1, 250_000_000, 999_999_999] {
            let mut sample = 0;
            while sample < NANOS_PER_SEC {
                let delay = delay_until_next_tick(sample, phase);
                assert!(delay.subsec_nanos() < NANOS_PER_SEC);
                assert!(delay.as_secs() <= 1);
                assert!(delay > Duration::ZERO);
                sample += 7_919_999;
            }
        }
    }
}
