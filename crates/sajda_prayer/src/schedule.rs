//! Prayer period classification for one day's schedule.
//!
//! The day is partitioned by the five prayer times. Before Fajr the
//! current period is the previous day's Isha; after Isha the next prayer
//! is the following day's Fajr.

use crate::clock::{ClockTime, MINUTES_PER_DAY};
use crate::error::ScheduleError;

/// The five daily prayers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Prayer {
    Fajr,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

/// All five prayers in daily order (index 0 = Fajr).
pub const ALL_PRAYERS: [Prayer; 5] = [
    Prayer::Fajr,
    Prayer::Dhuhr,
    Prayer::Asr,
    Prayer::Maghrib,
    Prayer::Isha,
];

impl Prayer {
    /// Transliterated name of the prayer.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fajr => "Fajr",
            Self::Dhuhr => "Dhuhr",
            Self::Asr => "Asr",
            Self::Maghrib => "Maghrib",
            Self::Isha => "Isha",
        }
    }

    /// Arabic name of the prayer.
    pub const fn arabic_name(self) -> &'static str {
        match self {
            Self::Fajr => "الفجر",
            Self::Dhuhr => "الظهر",
            Self::Asr => "العصر",
            Self::Maghrib => "المغرب",
            Self::Isha => "العشاء",
        }
    }

    /// Index within [`ALL_PRAYERS`] (0 = Fajr).
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// The five prayer times for a single day, strictly increasing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrayerSchedule {
    times: [ClockTime; 5],
}

/// Where a moment falls within the schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchedulePosition {
    /// Prayer period the moment belongs to.
    pub current: Prayer,
    /// Prayer that comes next.
    pub next: Prayer,
    /// Whole minutes until the next prayer (wraps past midnight after
    /// Isha).
    pub minutes_until_next: u32,
}

impl PrayerSchedule {
    /// Build a schedule from the five times in daily order
    /// (Fajr, Dhuhr, Asr, Maghrib, Isha).
    pub fn new(times: [ClockTime; 5]) -> Result<Self, ScheduleError> {
        for i in 1..times.len() {
            if times[i] <= times[i - 1] {
                return Err(ScheduleError::NotIncreasing(format!(
                    "{} ({}) not after {} ({})",
                    ALL_PRAYERS[i].name(),
                    times[i],
                    ALL_PRAYERS[i - 1].name(),
                    times[i - 1]
                )));
            }
        }
        Ok(Self { times })
    }

    /// Time of a given prayer.
    pub fn time_of(&self, prayer: Prayer) -> ClockTime {
        self.times[prayer.index()]
    }

    /// Classify a moment of the day.
    ///
    /// At an exact prayer minute that prayer becomes current. Before
    /// Fajr the current period is (the previous day's) Isha; after Isha
    /// the countdown wraps to the next day's Fajr.
    pub fn position_at(&self, now: ClockTime) -> SchedulePosition {
        let now_min = now.minutes_of_day();

        for (i, prayer) in ALL_PRAYERS.iter().enumerate() {
            let t = self.times[i].minutes_of_day();
            if now_min < t {
                let current = if i == 0 { Prayer::Isha } else { ALL_PRAYERS[i - 1] };
                return SchedulePosition {
                    current,
                    next: *prayer,
                    minutes_until_next: t - now_min,
                };
            }
        }

        // Past Isha: next is tomorrow's Fajr.
        let fajr = self.times[0].minutes_of_day();
        SchedulePosition {
            current: Prayer::Isha,
            next: Prayer::Fajr,
            minutes_until_next: MINUTES_PER_DAY - now_min + fajr,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schedule() -> PrayerSchedule {
        let times = ["05:12", "12:30", "16:05", "18:47", "20:15"]
            .map(|s| s.parse::<ClockTime>().unwrap());
        PrayerSchedule::new(times).unwrap()
    }

    fn at(s: &str) -> ClockTime {
        s.parse().unwrap()
    }

    #[test]
    fn before_fajr() {
        let p = schedule().position_at(at("04:00"));
        assert_eq!(p.current, Prayer::Isha);
        assert_eq!(p.next, Prayer::Fajr);
        assert_eq!(p.minutes_until_next, 72);
    }

    #[test]
    fn midday() {
        let p = schedule().position_at(at("13:00"));
        assert_eq!(p.current, Prayer::Dhuhr);
        assert_eq!(p.next, Prayer::Asr);
        assert_eq!(p.minutes_until_next, 185);
    }

    #[test]
    fn exact_prayer_minute_is_current() {
        let p = schedule().position_at(at("16:05"));
        assert_eq!(p.current, Prayer::Asr);
        assert_eq!(p.next, Prayer::Maghrib);
        assert_eq!(p.minutes_until_next, 162);
    }

    #[test]
    fn after_isha_wraps_to_fajr() {
        let p = schedule().position_at(at("22:00"));
        assert_eq!(p.current, Prayer::Isha);
        assert_eq!(p.next, Prayer::Fajr);
        // 120 minutes to midnight + 312 to Fajr.
        assert_eq!(p.minutes_until_next, 432);
    }

    #[test]
    fn not_increasing_rejected() {
        let times = ["05:12", "12:30", "12:30", "18:47", "20:15"]
            .map(|s| s.parse::<ClockTime>().unwrap());
        assert!(matches!(
            PrayerSchedule::new(times),
            Err(ScheduleError::NotIncreasing(_))
        ));
    }

    #[test]
    fn time_of_lookup() {
        let s = schedule();
        assert_eq!(s.time_of(Prayer::Maghrib).to_string(), "18:47");
    }
}
