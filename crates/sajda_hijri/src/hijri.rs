//! Tabular (arithmetic) Hijri calendar conversion.
//!
//! The tabular calendar repeats a fixed 30-year cycle of 10 631 days:
//! 19 common years of 354 days and 11 leap years of 355 days, leap years
//! falling at cycle positions 2, 5, 7, 10, 13, 16, 18, 21, 24, 26 and 29.
//! Months alternate 30/29 days; the twelfth month gains a day in leap
//! years.
//!
//! Conversion counts days from 1970-01-01 and adds the fixed day count
//! between the tabular epoch (1 Muharram 1 AH, JD 1948439.5) and the
//! Unix epoch (JD 2440587.5). Anchor: 1970-01-01 = 22 Shawwal 1389 AH.
//!
//! Accuracy is that of the arithmetic calendar: one to two days against
//! lunar observation. Results are approximate, never authoritative.

use crate::error::HijriError;
use crate::gregorian::GregorianDate;
use crate::month::{ALL_HIJRI_MONTHS, HijriMonth};

/// Years per tabular cycle.
pub const CYCLE_YEARS: i64 = 30;

/// Days per tabular cycle: 19 × 354 + 11 × 355.
pub const CYCLE_DAYS: i64 = 10_631;

/// Days from the tabular Hijri epoch (1 Muharram 1 AH) to 1970-01-01.
pub const HIJRI_EPOCH_TO_UNIX_DAYS: i64 = 492_148;

/// Leap-year positions within the 30-year cycle (1-based).
const LEAP_POSITIONS: [i32; 11] = [2, 5, 7, 10, 13, 16, 18, 21, 24, 26, 29];

/// Hijri calendar date produced by the tabular conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HijriDate {
    /// Hijri year (AH), 1-based.
    pub year: i32,
    /// Month of the year.
    pub month: HijriMonth,
    /// Day of the month, 1-30.
    pub day: u32,
}

impl std::fmt::Display for HijriDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} AH", self.day, self.month.name(), self.year)
    }
}

/// Whether a Hijri year is a leap year of the tabular cycle.
pub fn hijri_year_is_leap(year: i32) -> bool {
    let position = (year - 1).rem_euclid(30) + 1;
    LEAP_POSITIONS.contains(&position)
}

/// Month lengths for a Hijri year: alternating 30/29, with the twelfth
/// month extended to 30 in leap years.
pub fn hijri_month_lengths(year: i32) -> [u32; 12] {
    let mut lengths = [30, 29, 30, 29, 30, 29, 30, 29, 30, 29, 30, 29];
    if hijri_year_is_leap(year) {
        lengths[11] = 30;
    }
    lengths
}

/// Days in a Hijri year: 355 in leap years, 354 otherwise.
pub fn days_in_hijri_year(year: i32) -> u32 {
    if hijri_year_is_leap(year) { 355 } else { 354 }
}

/// Convert a day count since 1970-01-01 to a tabular Hijri date.
///
/// Negative counts (dates before the conversion epoch) are rejected.
pub fn hijri_from_days(days_since_epoch: i64) -> Result<HijriDate, HijriError> {
    if days_since_epoch < 0 {
        return Err(HijriError::BeforeUnixEpoch);
    }

    // 0-based day count since 1 Muharram 1 AH.
    let total = days_since_epoch + HIJRI_EPOCH_TO_UNIX_DAYS;
    let cycle = total / CYCLE_DAYS;
    let mut remaining = (total % CYCLE_DAYS) as u32;

    // Walk the years of the cycle; `remaining` < 10 631 guarantees the
    // walk ends within the 30 years.
    let mut year = (cycle * CYCLE_YEARS) as i32 + 1;
    loop {
        let year_len = days_in_hijri_year(year);
        if remaining < year_len {
            break;
        }
        remaining -= year_len;
        year += 1;
    }

    let lengths = hijri_month_lengths(year);
    let mut month_index = 0;
    for len in lengths {
        if remaining < len {
            break;
        }
        remaining -= len;
        month_index += 1;
    }

    Ok(HijriDate {
        year,
        month: ALL_HIJRI_MONTHS[month_index],
        day: remaining + 1,
    })
}

/// Convert a Gregorian date to its tabular Hijri equivalent.
pub fn hijri_from_gregorian(date: &GregorianDate) -> Result<HijriDate, HijriError> {
    hijri_from_days(date.days_since_epoch())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_anchor() {
        // 1970-01-01 = 22 Shawwal 1389 AH in the tabular calendar.
        let h = hijri_from_days(0).unwrap();
        assert_eq!(h.year, 1389);
        assert_eq!(h.month, HijriMonth::Shawwal);
        assert_eq!(h.day, 22);
    }

    #[test]
    fn deterministic() {
        let a = hijri_from_days(19_802).unwrap();
        let b = hijri_from_days(19_802).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn pre_epoch_rejected() {
        assert_eq!(hijri_from_days(-1), Err(HijriError::BeforeUnixEpoch));
    }

    #[test]
    fn leap_cycle_positions() {
        // Positions 2, 5, 7, ... within any 30-year window.
        assert!(hijri_year_is_leap(2));
        assert!(hijri_year_is_leap(5));
        assert!(!hijri_year_is_leap(1));
        assert!(!hijri_year_is_leap(30));
        assert!(hijri_year_is_leap(1442)); // 1442 = 48*30 + 2
        assert_eq!(
            (1..=30).filter(|y| hijri_year_is_leap(*y)).count(),
            11
        );
    }

    #[test]
    fn month_lengths_alternate() {
        let common = hijri_month_lengths(1);
        for (i, len) in common.iter().enumerate() {
            assert_eq!(*len, if i % 2 == 0 { 30 } else { 29 });
        }
        let leap = hijri_month_lengths(2);
        assert_eq!(leap[11], 30);
        assert_eq!(leap.iter().sum::<u32>(), 355);
        assert_eq!(common.iter().sum::<u32>(), 354);
    }

    #[test]
    fn cycle_day_total() {
        let total: u32 = (1..=30).map(days_in_hijri_year).sum();
        assert_eq!(total as i64, CYCLE_DAYS);
    }

    #[test]
    fn display_format() {
        let h = hijri_from_days(0).unwrap();
        assert_eq!(h.to_string(), "22 Shawwal 1389 AH");
    }
}
