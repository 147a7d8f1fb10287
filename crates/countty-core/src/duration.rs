//! Turns a number of seconds into the text shown on the big clock.

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
/// Julian year of 365.25 days.
const YEAR: i64 = 31_557_600;

/// How a duration is broken down into display units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormatPolicy {
    /// Days, hours, minutes and seconds on a single line (`1d 01:00:00`).
    Simple,
    /// Years and days on their own line above `HH:MM:SS`.
    #[default]
    Extended,
}

/// Formatted duration ready for the layout engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reading {
    pub lines: Vec<String>,
    pub highlighted: bool,
}

impl Reading {
    fn single(line: String, highlighted: bool) -> Self {
        Self {
            lines: vec![line],
            highlighted,
        }
    }

    fn double(first: String, second: String, highlighted: bool) -> Self {
        Self {
            lines: vec![first, second],
            highlighted,
        }
    }
}

/// Returns whether `total_seconds` falls inside the critical window.
///
/// A non-positive `critical` disables highlighting entirely.
pub fn is_critical(total_seconds: i64, critical: i64) -> bool {
    critical > 0 && total_seconds <= critical
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Parts {
    years: i64,
    days: i64,
    hours: i64,
    minutes: i64,
    seconds: i64,
}

impl Parts {
    fn split(total: i64, with_years: bool) -> Self {
        let (years, rest) = if with_years {
            (total / YEAR, total % YEAR)
        } else {
            (0, total)
        };
        Self {
            years,
            days: rest / DAY,
            hours: rest % DAY / HOUR,
            minutes: rest % HOUR / MINUTE,
            seconds: rest % MINUTE,
        }
    }

    fn clock(&self) -> String {
        format!("{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

/// Formats `total_seconds` starting from its coarsest non-zero unit.
///
/// Negative input is treated as zero; callers only format time that is still
/// left or already elapsed.
pub fn format_duration(total_seconds: i64, critical: i64, policy: FormatPolicy) -> Reading {
    let total = total_seconds.max(0);
    let highlighted = is_critical(total, critical);

    match policy {
        FormatPolicy::Simple => {
            let p = Parts::split(total, false);
            let line = if p.days > 0 {
                format!("{}d {}", p.days, p.clock())
            } else if p.hours > 0 {
                p.clock()
            } else if p.minutes > 0 {
                format!("{:02}:{:02}", p.minutes, p.seconds)
            } else {
                format!("{:02}", p.seconds)
            };
            Reading::single(line, highlighted)
        }
        FormatPolicy::Extended => {
            let p = Parts::split(total, true);
            if p.years > 0 {
                Reading::double(format!("{}y {}d", p.years, p.days), p.clock(), highlighted)
            } else if p.days > 0 {
                Reading::double(format!("{}d", p.days), p.clock(), highlighted)
            } else if p.hours > 0 {
                Reading::single(p.clock(), highlighted)
            } else if p.minutes > 0 {
                Reading::single(format!("{:02}:{:02}", p.minutes, p.seconds), highlighted)
            } else {
                Reading::single(format!("{:02}", p.seconds), highlighted)
            }
        }
    }
}
