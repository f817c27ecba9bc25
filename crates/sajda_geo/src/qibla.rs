//! Qibla bearing: great-circle initial bearing toward the Kaaba.
//!
//! Standard spherical trigonometry. For an observer at latitude φ1,
//! longitude λ1 and the Kaaba at φ2, λ2 with Δλ = λ2 − λ1:
//!
//! ```text
//! y = sin Δλ
//! x = cos φ1 · tan φ2 − sin φ1 · cos Δλ
//! θ = atan2(y, x)
//! ```
//!
//! θ is normalized to [0, 360) degrees, 0 = true north, clockwise.

use crate::error::GeoError;
use crate::location::{GeoCoordinate, KAABA};
use crate::util::normalize_360;

/// IAU nominal mean Earth radius in km.
const EARTH_RADIUS_KM: f64 = 6_371.0;

/// Threshold below which both atan2 operands are treated as zero.
///
/// This only triggers when the observer stands at the Kaaba itself or at
/// its antipode, where the initial bearing is undefined.
const DEGENERATE_EPS: f64 = 1e-12;

/// Initial great-circle bearing from `observer` toward the Kaaba,
/// in degrees [0, 360), 0 = true north, increasing clockwise.
///
/// Degenerate inputs (observer at the Kaaba or at its antipode) have no
/// defined bearing; the fixed sentinel `0.0` is returned for those.
pub fn qibla_bearing(observer: &GeoCoordinate) -> f64 {
    let phi1 = observer.latitude_rad();
    let phi2 = KAABA.latitude_rad();
    let delta_lon = KAABA.longitude_rad() - observer.longitude_rad();

    let y = delta_lon.sin();
    let x = phi1.cos() * phi2.tan() - phi1.sin() * delta_lon.cos();

    if y.abs() < DEGENERATE_EPS && x.abs() < DEGENERATE_EPS {
        return 0.0;
    }

    normalize_360(y.atan2(x).to_degrees())
}

/// Validating convenience wrapper: bearing toward the Kaaba from raw
/// latitude/longitude in degrees.
pub fn qibla_bearing_deg(latitude_deg: f64, longitude_deg: f64) -> Result<f64, GeoError> {
    let observer = GeoCoordinate::new(latitude_deg, longitude_deg)?;
    Ok(qibla_bearing(&observer))
}

/// Rotation of the Qibla pointer relative to the device heading,
/// in degrees [0, 360).
///
/// `heading_deg` is the compass heading the device currently faces
/// (0 = north, clockwise). When the result is 0 the device faces the
/// Qibla.
pub fn pointer_rotation_deg(bearing_deg: f64, heading_deg: f64) -> f64 {
    normalize_360(bearing_deg - heading_deg)
}

/// Great-circle (haversine) distance between two coordinates in km,
/// on the mean spherical Earth.
pub fn great_circle_distance_km(a: &GeoCoordinate, b: &GeoCoordinate) -> f64 {
    let phi1 = a.latitude_rad();
    let phi2 = b.latitude_rad();
    let dphi = (b.latitude_deg() - a.latitude_deg()).to_radians();
    let dlon = (b.longitude_deg() - a.longitude_deg()).to_radians();

    let h = (dphi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}

/// Distance from `observer` to the Kaaba in km.
pub fn distance_to_kaaba_km(observer: &GeoCoordinate) -> f64 {
    great_circle_distance_km(observer, &KAABA)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-4;

    fn coord(lat: f64, lon: f64) -> GeoCoordinate {
        GeoCoordinate::new(lat, lon).unwrap()
    }

    #[test]
    fn from_equator_prime_meridian() {
        // Analytic: atan2(sin 39.8262°, tan 21.4225°) = 58.508207°
        let b = qibla_bearing(&coord(0.0, 0.0));
        assert!((b - 58.508207).abs() < EPS, "got {b}");
    }

    #[test]
    fn from_north_pole() {
        // From the pole every direction is south; the formula yields
        // 180° − |λ2| measured through the Kaaba meridian.
        let b = qibla_bearing(&coord(90.0, 0.0));
        assert!((b - 140.1738).abs() < EPS, "got {b}");
    }

    #[test]
    fn due_south_from_same_meridian_north() {
        let b = qibla_bearing(&coord(41.4225, 39.8262));
        assert!((b - 180.0).abs() < EPS, "got {b}");
    }

    #[test]
    fn due_north_from_same_meridian_south() {
        let b = qibla_bearing(&coord(1.4225, 39.8262));
        assert!(b < EPS || (360.0 - b) < EPS, "got {b}");
    }

    #[test]
    fn at_kaaba_sentinel() {
        assert_eq!(qibla_bearing(&KAABA), 0.0);
    }

    #[test]
    fn at_antipode_sentinel() {
        let b = qibla_bearing(&coord(-21.4225, -140.1738));
        assert_eq!(b, 0.0);
    }

    #[test]
    fn wrapper_validates() {
        assert!(qibla_bearing_deg(43.222, 76.8512).is_ok());
        assert!(qibla_bearing_deg(91.0, 0.0).is_err());
        assert!(qibla_bearing_deg(0.0, -181.0).is_err());
    }

    #[test]
    fn pointer_rotation_wraps() {
        assert!((pointer_rotation_deg(120.0, 30.0) - 90.0).abs() < 1e-12);
        assert!((pointer_rotation_deg(30.0, 120.0) - 270.0).abs() < 1e-12);
        assert!((pointer_rotation_deg(58.5, 58.5) - 0.0).abs() < 1e-12);
    }

    #[test]
    fn distance_from_kaaba_is_zero() {
        assert!(distance_to_kaaba_km(&KAABA).abs() < 1e-9);
    }

    #[test]
    fn distance_london() {
        let d = distance_to_kaaba_km(&coord(51.5074, -0.1278));
        assert!((d - 4793.775).abs() < 0.01, "got {d}");
    }

    #[test]
    fn distance_symmetric() {
        let a = coord(-6.2088, 106.8456);
        let b = coord(55.7558, 37.6173);
        let ab = great_circle_distance_km(&a, &b);
        let ba = great_circle_distance_km(&b, &a);
        assert!((ab - ba).abs() < 1e-9);
    }
}
