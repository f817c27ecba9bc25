//! Major Islamic observances on the Hijri calendar.
//!
//! Fixed month/day positions; whether a given community observes an
//! occasion (and on which sighted day) varies, so this table carries the
//! same approximation caveat as the tabular conversion itself.

use crate::hijri::HijriDate;
use crate::month::HijriMonth;

/// Major observances of the Hijri year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Holiday {
    /// 1 Muharram.
    IslamicNewYear,
    /// 10 Muharram.
    Ashura,
    /// 12 Rabi al-Awwal.
    MawlidAnNabi,
    /// 27 Rajab.
    LaylatAlMiraj,
    /// 15 Shaban.
    LaylatAlBaraat,
    /// 1 Ramadan.
    FirstOfRamadan,
    /// 27 Ramadan.
    LaylatAlQadr,
    /// 1 Shawwal.
    EidAlFitr,
    /// 10 Dhu al-Hijjah.
    EidAlAdha,
}

/// All observances in calendar order.
pub const ALL_HOLIDAYS: [Holiday; 9] = [
    Holiday::IslamicNewYear,
    Holiday::Ashura,
    Holiday::MawlidAnNabi,
    Holiday::LaylatAlMiraj,
    Holiday::LaylatAlBaraat,
    Holiday::FirstOfRamadan,
    Holiday::LaylatAlQadr,
    Holiday::EidAlFitr,
    Holiday::EidAlAdha,
];

impl Holiday {
    /// English name of the observance.
    pub const fn name(self) -> &'static str {
        match self {
            Self::IslamicNewYear => "Islamic New Year",
            Self::Ashura => "Day of Ashura",
            Self::MawlidAnNabi => "Mawlid an-Nabi",
            Self::LaylatAlMiraj => "Laylat al-Miraj",
            Self::LaylatAlBaraat => "Laylat al-Baraat",
            Self::FirstOfRamadan => "First day of Ramadan",
            Self::LaylatAlQadr => "Laylat al-Qadr",
            Self::EidAlFitr => "Eid al-Fitr",
            Self::EidAlAdha => "Eid al-Adha",
        }
    }

    /// Month of the observance.
    pub const fn month(self) -> HijriMonth {
        match self {
            Self::IslamicNewYear | Self::Ashura => HijriMonth::Muharram,
            Self::MawlidAnNabi => HijriMonth::RabiAlAwwal,
            Self::LaylatAlMiraj => HijriMonth::Rajab,
            Self::LaylatAlBaraat => HijriMonth::Shaban,
            Self::FirstOfRamadan | Self::LaylatAlQadr => HijriMonth::Ramadan,
            Self::EidAlFitr => HijriMonth::Shawwal,
            Self::EidAlAdha => HijriMonth::DhuAlHijjah,
        }
    }

    /// Day of the month of the observance.
    pub const fn day(self) -> u32 {
        match self {
            Self::IslamicNewYear | Self::FirstOfRamadan | Self::EidAlFitr => 1,
            Self::Ashura | Self::EidAlAdha => 10,
            Self::MawlidAnNabi => 12,
            Self::LaylatAlBaraat => 15,
            Self::LaylatAlMiraj | Self::LaylatAlQadr => 27,
        }
    }

    /// The observance's date in a given Hijri year.
    pub fn date_in_year(self, year: i32) -> HijriDate {
        HijriDate {
            year,
            month: self.month(),
            day: self.day(),
        }
    }
}

/// Observance falling on the given Hijri date, if any.
pub fn holiday_on(date: &HijriDate) -> Option<Holiday> {
    ALL_HOLIDAYS
        .into_iter()
        .find(|h| h.month() == date.month && h.day() == date.day)
}
