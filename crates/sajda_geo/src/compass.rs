//! 16-wind compass rose classification.
//!
//! Each point spans 22.5°, centered on its nominal bearing (North covers
//! [348.75, 360) ∪ [0, 11.25)).

use crate::util::normalize_360;

/// Span of one compass point: 360/16 = 22.5 degrees.
pub const COMPASS_POINT_SPAN: f64 = 360.0 / 16.0;

/// The 16 points of the compass rose, clockwise from north.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompassPoint {
    North,
    NorthNortheast,
    Northeast,
    EastNortheast,
    East,
    EastSoutheast,
    Southeast,
    SouthSoutheast,
    South,
    SouthSouthwest,
    Southwest,
    WestSouthwest,
    West,
    WestNorthwest,
    Northwest,
    NorthNorthwest,
}

/// All 16 compass points in order (index 0 = North).
pub const ALL_COMPASS_POINTS: [CompassPoint; 16] = [
    CompassPoint::North,
    CompassPoint::NorthNortheast,
    CompassPoint::Northeast,
    CompassPoint::EastNortheast,
    CompassPoint::East,
    CompassPoint::EastSoutheast,
    CompassPoint::Southeast,
    CompassPoint::SouthSoutheast,
    CompassPoint::South,
    CompassPoint::SouthSouthwest,
    CompassPoint::Southwest,
    CompassPoint::WestSouthwest,
    CompassPoint::West,
    CompassPoint::WestNorthwest,
    CompassPoint::Northwest,
    CompassPoint::NorthNorthwest,
];

impl CompassPoint {
    /// English name of the point.
    pub const fn name(self) -> &'static str {
        match self {
            Self::North => "North",
            Self::NorthNortheast => "North-northeast",
            Self::Northeast => "Northeast",
            Self::EastNortheast => "East-northeast",
            Self::East => "East",
            Self::EastSoutheast => "East-southeast",
            Self::Southeast => "Southeast",
            Self::SouthSoutheast => "South-southeast",
            Self::South => "South",
            Self::SouthSouthwest => "South-southwest",
            Self::Southwest => "Southwest",
            Self::WestSouthwest => "West-southwest",
            Self::West => "West",
            Self::WestNorthwest => "West-northwest",
            Self::Northwest => "Northwest",
            Self::NorthNorthwest => "North-northwest",
        }
    }

    /// Conventional abbreviation (N, NNE, NE, ...).
    pub const fn abbreviation(self) -> &'static str {
        match self {
            Self::North => "N",
            Self::NorthNortheast => "NNE",
            Self::Northeast => "NE",
            Self::EastNortheast => "ENE",
            Self::East => "E",
            Self::EastSoutheast => "ESE",
            Self::Southeast => "SE",
            Self::SouthSoutheast => "SSE",
            Self::South => "S",
            Self::SouthSouthwest => "SSW",
            Self::Southwest => "SW",
            Self::WestSouthwest => "WSW",
            Self::West => "W",
            Self::WestNorthwest => "WNW",
            Self::Northwest => "NW",
            Self::NorthNorthwest => "NNW",
        }
    }

    /// Index within [`ALL_COMPASS_POINTS`] (0 = North, clockwise).
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Compass point whose 22.5° sector contains the given bearing.
    pub fn from_bearing(bearing_deg: f64) -> Self {
        let sector =
            ((normalize_360(bearing_deg) + COMPASS_POINT_SPAN / 2.0) / COMPASS_POINT_SPAN) as usize;
        ALL_COMPASS_POINTS[sector % 16]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nominal_bearings() {
        for (i, p) in ALL_COMPASS_POINTS.iter().enumerate() {
            let bearing = i as f64 * COMPASS_POINT_SPAN;
            assert_eq!(CompassPoint::from_bearing(bearing), *p, "at {bearing} deg");
        }
    }

    #[test]
    fn north_wraps_around_zero() {
        assert_eq!(CompassPoint::from_bearing(359.0), CompassPoint::North);
        assert_eq!(CompassPoint::from_bearing(11.24), CompassPoint::North);
        assert_eq!(
            CompassPoint::from_bearing(11.26),
            CompassPoint::NorthNortheast
        );
    }

    #[test]
    fn sector_boundaries() {
        // 33.75 is the NNE/NE boundary; the upper sector wins.
        assert_eq!(CompassPoint::from_bearing(33.75), CompassPoint::Northeast);
        assert_eq!(
            CompassPoint::from_bearing(33.74),
            CompassPoint::NorthNortheast
        );
    }

    #[test]
    fn qibla_from_origin_is_ene() {
        assert_eq!(
            CompassPoint::from_bearing(58.5082),
            CompassPoint::EastNortheast
        );
    }

    #[test]
    fn index_round_trip() {
        for p in ALL_COMPASS_POINTS {
            assert_eq!(ALL_COMPASS_POINTS[p.index()], p);
        }
    }

    #[test]
    fn negative_bearing_normalized() {
        assert_eq!(CompassPoint::from_bearing(-90.0), CompassPoint::West);
    }
}
