//! Integration tests for schedule classification across a whole day.

use sajda_prayer::{ALL_PRAYERS, ClockTime, Prayer, PrayerSchedule};

fn schedule() -> PrayerSchedule {
    let times =
        ["04:58", "12:02", "15:31", "17:58", "19:21"].map(|s| s.parse::<ClockTime>().unwrap());
    PrayerSchedule::new(times).unwrap()
}

#[test]
fn every_minute_of_day_classifies() {
    let s = schedule();
    for minutes in 0..24 * 60 {
        let now = ClockTime::new(minutes / 60, minutes % 60).unwrap();
        let p = s.position_at(now);
        assert!(p.minutes_until_next >= 1, "zero countdown at {now}");
        assert!(
            p.minutes_until_next <= 24 * 60,
            "countdown {} too long at {now}",
            p.minutes_until_next
        );
        // The next prayer always follows the current one cyclically.
        let expected_next = ALL_PRAYERS[(p.current.index() + 1) % 5];
        assert_eq!(p.next, expected_next, "at {now}");
    }
}

#[test]
fn countdown_decreases_toward_each_prayer() {
    let s = schedule();
    let before = s.position_at("11:00".parse().unwrap());
    let closer = s.position_at("11:45".parse().unwrap());
    assert_eq!(before.next, Prayer::Dhuhr);
    assert_eq!(closer.next, Prayer::Dhuhr);
    assert_eq!(before.minutes_until_next - closer.minutes_until_next, 45);
}

#[test]
fn period_boundaries() {
    let s = schedule();
    assert_eq!(
        s.position_at("04:57".parse().unwrap()).current,
        Prayer::Isha
    );
    assert_eq!(
        s.position_at("04:58".parse().unwrap()).current,
        Prayer::Fajr
    );
    assert_eq!(
        s.position_at("19:20".parse().unwrap()).current,
        Prayer::Maghrib
    );
    assert_eq!(
        s.position_at("19:21".parse().unwrap()).current,
        Prayer::Isha
    );
    assert_eq!(
        s.position_at("23:59".parse().unwrap()).current,
        Prayer::Isha
    );
}

#[test]
fn midnight_countdown() {
    let s = schedule();
    let p = s.position_at("00:00".parse().unwrap());
    assert_eq!(p.next, Prayer::Fajr);
    assert_eq!(p.minutes_until_next, 4 * 60 + 58);
}
