//! Wall clock access.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};

use crate::scheduler::NANOS_PER_SEC;

/// A point in wall-clock time split into Unix seconds and the sub-second part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp {
    pub secs: i64,
    pub subsec_nanos: u32,
}

impl Timestamp {
    pub fn new(secs: i64, subsec_nanos: u32) -> Self {
        debug_assert!(subsec_nanos < NANOS_PER_SEC);
        Self { secs, subsec_nanos }
    }

    /// Returns this timestamp moved forward by `by`.
    pub fn advanced(self, by: Duration) -> Self {
        let nanos = u64::from(self.subsec_nanos) + u64::from(by.subsec_nanos());
        let carry = nanos / u64::from(NANOS_PER_SEC);
        Self {
            secs: self.secs + by.as_secs() as i64 + carry as i64,
            subsec_nanos: (nanos % u64::from(NANOS_PER_SEC)) as u32,
        }
    }
}

/// Source of the current wall-clock time.
pub trait WallClock {
    /// # Errors
    /// Returns an error if the time cannot be read.
    fn now(&self) -> Result<Timestamp>;
}

/// The operating system's real-time clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl WallClock for SystemClock {
    fn now(&self) -> Result<Timestamp> {
        let since_epoch = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .context("System clock is set before the Unix epoch")?;
        let secs = i64::try_from(since_epoch.as_secs()).context("System time out of range")?;
        Ok(Timestamp::new(secs, since_epoch.subsec_nanos()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advanced_carries_nanoseconds() {
        let t = Timestamp::new(10, 900_000_000);
        assert_eq!(
            t.advanced(Duration::from_millis(250)),
            Timestamp::new(11, 150_000_000)
        );
        assert_eq!(
            t.advanced(Duration::new(2, 100_000_000)),
            Timestamp::new(13, 0)
        );
    }

    #[test]
    fn test_system_clock_is_after_epoch() {
        let now = SystemClock.now().unwrap();
        assert!(now.secs > 1_600_000_000);
        assert!(now.subsec_nanos < NANOS_PER_SEC);
    }
}
