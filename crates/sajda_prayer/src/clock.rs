//! Minute-resolution wall-clock time.

use std::str::FromStr;

use crate::error::ScheduleError;

/// Minutes in a day.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Wall-clock time of day, minute resolution.
///
/// This is the resolution prayer-time services publish (`HH:MM`), and it
/// is all the schedule classification needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClockTime {
    hour: u32,
    minute: u32,
}

impl ClockTime {
    /// Create a time, validating hour ∈ [0, 23] and minute ∈ [0, 59].
    pub fn new(hour: u32, minute: u32) -> Result<Self, ScheduleError> {
        if hour > 23 {
            return Err(ScheduleError::InvalidTime(format!(
                "hour {hour} out of range 0-23"
            )));
        }
        if minute > 59 {
            return Err(ScheduleError::InvalidTime(format!(
                "minute {minute} out of range 0-59"
            )));
        }
        Ok(Self { hour, minute })
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    /// Minutes elapsed since midnight, [0, 1439].
    pub fn minutes_of_day(&self) -> u32 {
        self.hour * 60 + self.minute
    }
}

impl FromStr for ClockTime {
    type Err = ScheduleError;

    /// Parse `HH:MM`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (h, m) = s
            .split_once(':')
            .ok_or_else(|| ScheduleError::InvalidTime(format!("expected HH:MM, got '{s}'")))?;
        let hour = h
            .parse::<u32>()
            .map_err(|_| ScheduleError::InvalidTime(format!("bad hour '{h}'")))?;
        let minute = m
            .parse::<u32>()
            .map_err(|_| ScheduleError::InvalidTime(format!("bad minute '{m}'")))?;
        Self::new(hour, minute)
    }
}

impl std::fmt::Display for ClockTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}
