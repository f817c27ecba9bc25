//! Daily prayer schedule classification.
//!
//! Given the five daily prayer times (obtained elsewhere, typically from
//! a prayer-time service), this crate answers the purely local questions:
//! which prayer period is current, which prayer is next, and how long
//! until it. All times are minute-resolution wall-clock values for a
//! single day; the midnight wrap-around (Isha → next day's Fajr) is
//! handled here.

pub mod clock;
pub mod error;
pub mod schedule;

pub use clock::ClockTime;
pub use error::ScheduleError;
pub use schedule::{ALL_PRAYERS, Prayer, PrayerSchedule, SchedulePosition};
