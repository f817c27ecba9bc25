//! Error types for schedule construction.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from clock-time parsing or schedule validation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ScheduleError {
    /// Malformed or out-of-range wall-clock time.
    InvalidTime(String),
    /// Prayer times are not strictly increasing through the day.
    NotIncreasing(String),
}

impl Display for ScheduleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTime(msg) => write!(f, "invalid time: {msg}"),
            Self::NotIncreasing(msg) => {
                write!(f, "prayer times not increasing: {msg}")
            }
        }
    }
}

impl Error for ScheduleError {}
