//! Zikr formula enumeration.

use serde::{Deserialize, Serialize};

/// The recited formulas tracked by the counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZikrKind {
    SubhanAllah,
    Alhamdulillah,
    AllahuAkbar,
    LaIlahaIllaLlah,
    Istighfar,
    Salawat,
}

/// All tracked formulas in display order.
pub const ALL_ZIKR_KINDS: [ZikrKind; 6] = [
    ZikrKind::SubhanAllah,
    ZikrKind::Alhamdulillah,
    ZikrKind::AllahuAkbar,
    ZikrKind::LaIlahaIllaLlah,
    ZikrKind::Istighfar,
    ZikrKind::Salawat,
];

impl ZikrKind {
    /// Transliterated name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::SubhanAllah => "Subhan Allah",
            Self::Alhamdulillah => "Alhamdulillah",
            Self::AllahuAkbar => "Allahu Akbar",
            Self::LaIlahaIllaLlah => "La ilaha illa Llah",
            Self::Istighfar => "Astaghfirullah",
            Self::Salawat => "Salawat",
        }
    }

    /// Arabic text of the formula.
    pub const fn arabic(self) -> &'static str {
        match self {
            Self::SubhanAllah => "سُبْحَانَ ٱللَّٰهِ",
            Self::Alhamdulillah => "ٱلْحَمْدُ لِلَّٰهِ",
            Self::AllahuAkbar => "ٱللَّٰهُ أَكْبَرُ",
            Self::LaIlahaIllaLlah => "لَا إِلَٰهَ إِلَّا ٱللَّٰهُ",
            Self::Istighfar => "أَسْتَغْفِرُ ٱللَّٰهَ",
            Self::Salawat => "اللَّهُمَّ صَلِّ عَلَى مُحَمَّدٍ",
        }
    }

    /// English meaning.
    pub const fn meaning(self) -> &'static str {
        match self {
            Self::SubhanAllah => "Glory be to Allah",
            Self::Alhamdulillah => "Praise be to Allah",
            Self::AllahuAkbar => "Allah is the greatest",
            Self::LaIlahaIllaLlah => "There is no deity but Allah",
            Self::Istighfar => "I seek forgiveness from Allah",
            Self::Salawat => "O Allah, bless Muhammad",
        }
    }

    /// Index within [`ALL_ZIKR_KINDS`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Kind at a given index, if in range.
    pub fn from_index(index: usize) -> Option<Self> {
        ALL_ZIKR_KINDS.get(index).copied()
    }

    /// Parse a kind from its key name (case-insensitive, CLI input).
    pub fn from_key(key: &str) -> Option<Self> {
        match key.to_ascii_lowercase().as_str() {
            "subhanallah" => Some(Self::SubhanAllah),
            "alhamdulillah" => Some(Self::Alhamdulillah),
            "allahuakbar" => Some(Self::AllahuAkbar),
            "lailahaillallah" => Some(Self::LaIlahaIllaLlah),
            "istighfar" => Some(Self::Istighfar),
            "salawat" => Some(Self::Salawat),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trip() {
        for (i, k) in ALL_ZIKR_KINDS.iter().enumerate() {
            assert_eq!(k.index(), i);
            assert_eq!(ZikrKind::from_index(i), Some(*k));
        }
        assert_eq!(ZikrKind::from_index(6), None);
    }

    #[test]
    fn key_parsing() {
        assert_eq!(ZikrKind::from_key("istighfar"), Some(ZikrKind::Istighfar));
        assert_eq!(
            ZikrKind::from_key("SubhanAllah"),
            Some(ZikrKind::SubhanAllah)
        );
        assert_eq!(ZikrKind::from_key("unknown"), None);
    }

    #[test]
    fn names_nonempty() {
        for k in ALL_ZIKR_KINDS {
            assert!(!k.name().is_empty());
            assert!(!k.arabic().is_empty());
            assert!(!k.meaning().is_empty());
        }
    }
}
