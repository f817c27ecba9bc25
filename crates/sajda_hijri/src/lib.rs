//! Tabular Hijri calendar conversion from Gregorian civil dates.
//!
//! This crate provides:
//! - Validated Gregorian civil dates with day-count arithmetic
//! - The deterministic tabular (arithmetic) Hijri approximation:
//!   30-year cycles of 10 631 days, 11 leap years per cycle, months
//!   alternating 30/29 days
//! - Hijri month names and the table of major observances
//!
//! The tabular calendar is an approximation. Converted dates can differ
//! from observation-based calendars by one to two days and must not be
//! treated as authoritative for religious timekeeping.

pub mod error;
pub mod gregorian;
pub mod hijri;
pub mod holiday;
pub mod month;

pub use error::HijriError;
pub use gregorian::{
    ALL_WEEKDAYS, GregorianDate, Weekday, gregorian_month_length, gregorian_year_is_leap,
};
pub use hijri::{
    CYCLE_DAYS, CYCLE_YEARS, HIJRI_EPOCH_TO_UNIX_DAYS, HijriDate, days_in_hijri_year,
    hijri_from_days, hijri_from_gregorian, hijri_month_lengths, hijri_year_is_leap,
};
pub use holiday::{ALL_HOLIDAYS, Holiday, holiday_on};
pub use month::{ALL_HIJRI_MONTHS, HijriMonth};
