//! Validated geographic coordinates.

use crate::error::GeoError;

/// Geographic position on Earth's surface.
///
/// Constructed through [`GeoCoordinate::new`], which enforces the valid
/// ranges, so downstream spherical trigonometry never sees out-of-range
/// or non-finite input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoCoordinate {
    latitude_deg: f64,
    longitude_deg: f64,
}

/// The Kaaba in Mecca: 21.4225°N, 39.8262°E.
pub const KAABA: GeoCoordinate = GeoCoordinate {
    latitude_deg: 21.4225,
    longitude_deg: 39.8262,
};

impl GeoCoordinate {
    /// Create a coordinate, validating latitude ∈ [-90, 90] and
    /// longitude ∈ [-180, 180] (degrees, north and east positive).
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Result<Self, GeoError> {
        if !latitude_deg.is_finite() || !(-90.0..=90.0).contains(&latitude_deg) {
            return Err(GeoError::InvalidLatitude(latitude_deg));
        }
        if !longitude_deg.is_finite() || !(-180.0..=180.0).contains(&longitude_deg) {
            return Err(GeoError::InvalidLongitude(longitude_deg));
        }
        Ok(Self {
            latitude_deg,
            longitude_deg,
        })
    }

    /// Latitude in degrees, north positive.
    pub fn latitude_deg(&self) -> f64 {
        self.latitude_deg
    }

    /// Longitude in degrees, east positive.
    pub fn longitude_deg(&self) -> f64 {
        self.longitude_deg
    }

    /// Latitude in radians.
    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }

    /// Longitude in radians (east positive).
    pub fn longitude_rad(&self) -> f64 {
        self.longitude_deg.to_radians()
    }
}

impl std::fmt::Display for GeoCoordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let ns = if self.latitude_deg < 0.0 { 'S' } else { 'N' };
        let ew = if self.longitude_deg < 0.0 { 'W' } else { 'E' };
        write!(
            f,
            "{:.4}°{} {:.4}°{}",
            self.latitude_deg.abs(),
            ns,
            self.longitude_deg.abs(),
            ew
        )
    }
}
