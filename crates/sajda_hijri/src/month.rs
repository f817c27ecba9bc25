//! Hijri month enumeration.

/// The twelve months of the Hijri calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HijriMonth {
    Muharram,
    Safar,
    RabiAlAwwal,
    RabiAlThani,
    JumadaAlUla,
    JumadaAlAkhirah,
    Rajab,
    Shaban,
    Ramadan,
    Shawwal,
    DhuAlQadah,
    DhuAlHijjah,
}

/// All twelve months in order (index 0 = Muharram).
pub const ALL_HIJRI_MONTHS: [HijriMonth; 12] = [
    HijriMonth::Muharram,
    HijriMonth::Safar,
    HijriMonth::RabiAlAwwal,
    HijriMonth::RabiAlThani,
    HijriMonth::JumadaAlUla,
    HijriMonth::JumadaAlAkhirah,
    HijriMonth::Rajab,
    HijriMonth::Shaban,
    HijriMonth::Ramadan,
    HijriMonth::Shawwal,
    HijriMonth::DhuAlQadah,
    HijriMonth::DhuAlHijjah,
];

impl HijriMonth {
    /// Transliterated name of the month.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Muharram => "Muharram",
            Self::Safar => "Safar",
            Self::RabiAlAwwal => "Rabi al-Awwal",
            Self::RabiAlThani => "Rabi al-Thani",
            Self::JumadaAlUla => "Jumada al-Ula",
            Self::JumadaAlAkhirah => "Jumada al-Akhirah",
            Self::Rajab => "Rajab",
            Self::Shaban => "Shaban",
            Self::Ramadan => "Ramadan",
            Self::Shawwal => "Shawwal",
            Self::DhuAlQadah => "Dhu al-Qadah",
            Self::DhuAlHijjah => "Dhu al-Hijjah",
        }
    }

    /// Arabic name of the month.
    pub const fn arabic_name(self) -> &'static str {
        match self {
            Self::Muharram => "محرم",
            Self::Safar => "صفر",
            Self::RabiAlAwwal => "ربيع الأول",
            Self::RabiAlThani => "ربيع الثاني",
            Self::JumadaAlUla => "جمادى الأولى",
            Self::JumadaAlAkhirah => "جمادى الآخرة",
            Self::Rajab => "رجب",
            Self::Shaban => "شعبان",
            Self::Ramadan => "رمضان",
            Self::Shawwal => "شوال",
            Self::DhuAlQadah => "ذو القعدة",
            Self::DhuAlHijjah => "ذو الحجة",
        }
    }

    /// Index within [`ALL_HIJRI_MONTHS`] (0 = Muharram, 11 = Dhu al-Hijjah).
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Month at a given index, if in range.
    pub fn from_index(index: usize) -> Option<Self> {
        ALL_HIJRI_MONTHS.get(index).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trip() {
        for (i, m) in ALL_HIJRI_MONTHS.iter().enumerate() {
            assert_eq!(m.index(), i);
            assert_eq!(HijriMonth::from_index(i), Some(*m));
        }
    }

    #[test]
    fn out_of_range_index() {
        assert_eq!(HijriMonth::from_index(12), None);
    }

    #[test]
    fn names() {
        assert_eq!(HijriMonth::Muharram.name(), "Muharram");
        assert_eq!(HijriMonth::Ramadan.name(), "Ramadan");
        assert_eq!(HijriMonth::Ramadan.arabic_name(), "رمضان");
        assert_eq!(HijriMonth::DhuAlHijjah.index(), 11);
    }
}
