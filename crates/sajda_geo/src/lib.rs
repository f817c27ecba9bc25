//! Geographic primitives and Qibla bearing computation.
//!
//! This crate provides:
//! - Validated geographic coordinates
//! - Great-circle initial bearing toward the Kaaba (Qibla)
//! - Haversine distance and 16-wind compass classification
//!
//! All implementations are closed-form spherical trigonometry; no
//! ephemeris data or I/O is involved.

pub mod compass;
pub mod error;
pub mod location;
pub mod qibla;
pub mod util;

pub use compass::{ALL_COMPASS_POINTS, CompassPoint};
pub use error::GeoError;
pub use location::{GeoCoordinate, KAABA};
pub use qibla::{
    distance_to_kaaba_km, great_circle_distance_km, pointer_rotation_deg, qibla_bearing,
    qibla_bearing_deg,
};
pub use util::normalize_360;
