//! Geographic primitives and the Qibla bearing calculator.
//!
//! This crate provides:
//! - `GeoCoordinate`, a latitude/longitude pair validated at construction
//! - Great-circle bearing and haversine distance
//! - Bearing and distance to the Kaaba, with eight-point compass bucketing
//!
//! Independent of date and time; no state and no I/O.

pub mod coordinate;
pub mod error;
pub mod qibla;
pub mod sphere;

pub use coordinate::GeoCoordinate;
pub use error::GeoError;
pub use qibla::{
    CardinalDirection, KAABA_LATITUDE_DEG, KAABA_LONGITUDE_DEG, QiblaBearing, bearing_to_kaaba,
    cardinal_direction_of, distance_to_kaaba_km, kaaba, qibla_bearing,
};
pub use sphere::{EARTH_MEAN_RADIUS_KM, haversine_km, initial_bearing_deg, normalize_360};
