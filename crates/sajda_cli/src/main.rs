use std::path::PathBuf;

use clap::{Parser, Subcommand};
use sajda_geo::{CompassPoint, GeoCoordinate, distance_to_kaaba_km, qibla_bearing};
use sajda_hijri::{
    ALL_HOLIDAYS, GregorianDate, HijriDate, gregorian_month_length, hijri_from_gregorian,
    hijri_year_is_leap, holiday_on,
};
use sajda_prayer::{ALL_PRAYERS, ClockTime, PrayerSchedule};
use sajda_zikr::{
    ALL_ZIKR_KINDS, JsonFileStore, ZikrCounter, ZikrKind, ZikrStore,
};

/// Printed under every Hijri conversion; the tabular calendar is not
/// an observation-based authority.
const HIJRI_DISCLAIMER: &str =
    "Note: tabular approximation; may differ from the observed calendar by 1-2 days.";

#[derive(Parser)]
#[command(name = "sajda", about = "Qibla, Hijri calendar, prayer and zikr utilities")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Qibla bearing and distance from a coordinate
    Qibla {
        /// Latitude in degrees, north positive
        #[arg(long)]
        lat: f64,
        /// Longitude in degrees, east positive
        #[arg(long)]
        lon: f64,
        /// Device compass heading for pointer rotation
        #[arg(long)]
        heading: Option<f64>,
    },
    /// Convert a Gregorian date to the tabular Hijri calendar
    Hijri {
        /// Gregorian date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
    },
    /// Month grid pairing Gregorian and Hijri days
    Calendar {
        /// Gregorian year
        #[arg(long)]
        year: i32,
        /// Gregorian month (1-12)
        #[arg(long)]
        month: u32,
    },
    /// Observances of a Hijri year
    Holidays {
        /// Hijri year (AH)
        #[arg(long)]
        year: i32,
    },
    /// Current and next prayer for a day's schedule
    NextPrayer {
        /// The five times Fajr,Dhuhr,Asr,Maghrib,Isha (HH:MM, comma-separated)
        #[arg(long)]
        times: String,
        /// Moment to classify (HH:MM)
        #[arg(long)]
        now: String,
    },
    /// Tally zikr recitations through a JSON store
    Zikr {
        /// Snapshot file
        #[arg(long)]
        file: PathBuf,
        /// Formula to recite (subhanallah, alhamdulillah, allahuakbar,
        /// lailahaillallah, istighfar, salawat)
        #[arg(long)]
        kind: Option<String>,
        /// Number of recitations to record
        #[arg(long, default_value = "1")]
        count: u32,
        /// Reset all in-cycle counts and cycle tallies instead
        #[arg(long)]
        reset: bool,
    },
    /// List the tracked zikr formulas
    ZikrKinds,
}

fn require_coordinate(lat: f64, lon: f64) -> GeoCoordinate {
    GeoCoordinate::new(lat, lon).unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    })
}

fn require_date(s: &str) -> GregorianDate {
    s.parse().unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    })
}

fn require_hijri(date: &GregorianDate) -> HijriDate {
    hijri_from_gregorian(date).unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    })
}

fn require_time(s: &str) -> ClockTime {
    s.parse().unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    })
}

fn require_schedule(times: &str) -> PrayerSchedule {
    let parsed: Vec<ClockTime> = times.split(',').map(require_time).collect();
    let five: [ClockTime; 5] = parsed.try_into().unwrap_or_else(|v: Vec<ClockTime>| {
        eprintln!("Expected 5 comma-separated times, got {}", v.len());
        std::process::exit(1);
    });
    PrayerSchedule::new(five).unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    })
}

fn require_kind(s: &str) -> ZikrKind {
    ZikrKind::from_key(s).unwrap_or_else(|| {
        eprintln!("Invalid zikr kind: {s}");
        eprintln!(
            "Valid: subhanallah, alhamdulillah, allahuakbar, lailahaillallah, istighfar, salawat"
        );
        std::process::exit(1);
    })
}

fn print_month_grid(year: i32, month: u32) {
    let first = GregorianDate::new(year, month, 1).unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    });
    let last_day = gregorian_month_length(year, month);
    let last = GregorianDate::new(year, month, last_day).unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    });
    let first_hijri = require_hijri(&first);
    let last_hijri = require_hijri(&last);

    println!("{year}-{month:02}");
    if first_hijri.month == last_hijri.month {
        println!("{} {} AH", first_hijri.month.name(), first_hijri.year);
    } else {
        println!(
            "{} - {} {} AH",
            first_hijri.month.name(),
            last_hijri.month.name(),
            last_hijri.year
        );
    }

    let header: String = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]
        .iter()
        .map(|d| format!("{d:<9}"))
        .collect();
    println!("{}", header.trim_end());

    // Cells are "dd(hh)*" padded to 9 columns; leading blanks align the
    // first day under its weekday.
    let mut cells: Vec<String> = vec![String::new(); first.weekday().index()];
    let mut holidays_seen = Vec::new();
    for day in 1..=last_day {
        let date = GregorianDate::new(year, month, day).unwrap_or_else(|e| {
            eprintln!("{e}");
            std::process::exit(1);
        });
        let hijri = require_hijri(&date);
        let marker = match holiday_on(&hijri) {
            Some(holiday) => {
                holidays_seen.push((day, holiday));
                '*'
            }
            None => ' ',
        };
        cells.push(format!("{day:2}({:2}){marker}", hijri.day));
    }
    for week in cells.chunks(7) {
        let row: String = week.iter().map(|c| format!("{c:<9}")).collect();
        println!("{}", row.trim_end());
    }

    for (day, holiday) in holidays_seen {
        println!("  * {year}-{month:02}-{day:02}: {}", holiday.name());
    }
    println!("{HIJRI_DISCLAIMER}");
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Qibla { lat, lon, heading } => {
            let observer = require_coordinate(lat, lon);
            let bearing = qibla_bearing(&observer);
            let point = CompassPoint::from_bearing(bearing);
            println!("Observer: {observer}");
            println!(
                "Qibla bearing: {bearing:.2} deg ({} / {})",
                point.abbreviation(),
                point.name()
            );
            println!("Distance to the Kaaba: {:.1} km", distance_to_kaaba_km(&observer));
            if let Some(heading) = heading {
                let rotation = sajda_geo::pointer_rotation_deg(bearing, heading);
                println!("Pointer rotation from heading {heading:.1}: {rotation:.2} deg");
            }
        }

        Commands::Hijri { date } => {
            let gregorian = require_date(&date);
            let hijri = require_hijri(&gregorian);
            println!("{gregorian} ({})", gregorian.weekday().name());
            println!("{hijri} ({})", hijri.month.arabic_name());
            if let Some(holiday) = holiday_on(&hijri) {
                println!("Observance: {}", holiday.name());
            }
            println!("{HIJRI_DISCLAIMER}");
        }

        Commands::Calendar { year, month } => {
            print_month_grid(year, month);
        }

        Commands::Holidays { year } => {
            println!(
                "Observances of {year} AH ({} year)",
                if hijri_year_is_leap(year) { "leap" } else { "common" }
            );
            for holiday in ALL_HOLIDAYS {
                let date = holiday.date_in_year(year);
                println!(
                    "{:2} {:18} {}",
                    date.day,
                    date.month.name(),
                    holiday.name()
                );
            }
        }

        Commands::NextPrayer { times, now } => {
            let schedule = require_schedule(&times);
            let moment = require_time(&now);
            let position = schedule.position_at(moment);
            println!("At {moment}:");
            for prayer in ALL_PRAYERS {
                let mark = if prayer == position.current { '>' } else { ' ' };
                println!(
                    "{mark} {:8} {}  ({})",
                    prayer.name(),
                    schedule.time_of(prayer),
                    prayer.arabic_name()
                );
            }
            println!(
                "Current: {}. Next: {} in {:02}:{:02}.",
                position.current.name(),
                position.next.name(),
                position.minutes_until_next / 60,
                position.minutes_until_next % 60
            );
        }

        Commands::Zikr {
            file,
            kind,
            count,
            reset,
        } => {
            let store = JsonFileStore::new(file);
            let snapshot = store.load().unwrap_or_else(|e| {
                eprintln!("Failed to load store: {e}");
                std::process::exit(1);
            });
            let mut counter = match snapshot {
                Some(s) => ZikrCounter::restore(s).unwrap_or_else(|e| {
                    eprintln!("Corrupt snapshot: {e}");
                    std::process::exit(1);
                }),
                None => ZikrCounter::new(),
            };

            if let Some(kind) = kind.as_deref() {
                counter.set_active(require_kind(kind));
            }

            if reset {
                counter.reset_all();
                println!("All counts reset.");
            } else {
                let mut completed = 0;
                for _ in 0..count {
                    if counter.increment() {
                        completed += 1;
                    }
                }
                if completed > 0 {
                    println!("Completed {completed} cycle(s) of {}.", counter.cycle_target());
                }
            }

            let active = counter.active();
            println!(
                "{}: {}/{} in cycle, {} cycles, {} total",
                active.name(),
                counter.count(active),
                counter.cycle_target(),
                counter.completed_cycles(active),
                counter.total_of(active)
            );
            println!("Today: {}  All time: {}", counter.stats().today, counter.stats().total);

            store.save(&counter.snapshot()).unwrap_or_else(|e| {
                eprintln!("Failed to save store: {e}");
                std::process::exit(1);
            });
        }

        Commands::ZikrKinds => {
            for kind in ALL_ZIKR_KINDS {
                println!("{:20} {:28} {}", kind.name(), kind.arabic(), kind.meaning());
            }
        }
    }
}
