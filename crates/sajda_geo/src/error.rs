//! Error types for geographic computations.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from coordinate validation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum GeoError {
    /// Latitude outside [-90, 90] degrees, or not finite.
    InvalidLatitude(f64),
    /// Longitude outside [-180, 180] degrees, or not finite.
    InvalidLongitude(f64),
}

impl Display for GeoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLatitude(v) => {
                write!(f, "invalid latitude: {v} (expected [-90, 90])")
            }
            Self::InvalidLongitude(v) => {
                write!(f, "invalid longitude: {v} (expected [-180, 180])")
            }
        }
    }
}

impl Error for GeoError {}
