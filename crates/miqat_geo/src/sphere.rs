//! Great-circle geometry on a spherical Earth.

use crate::coordinate::GeoCoordinate;

/// IUGG mean Earth radius in kilometres.
pub const EARTH_MEAN_RADIUS_KM: f64 = 6371.0088;

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    // rem_euclid can return exactly 360.0 for tiny negative inputs
    if r >= 360.0 { 0.0 } else { r }
}

/// Initial bearing of the great circle from `from` to `to`, in degrees
/// clockwise from true north, [0, 360).
///
/// `θ = atan2(sin Δλ·cos φ2, cos φ1·sin φ2 − sin φ1·cos φ2·cos Δλ)`
pub fn initial_bearing_deg(from: &GeoCoordinate, to: &GeoCoordinate) -> f64 {
    let phi1 = from.latitude_rad();
    let phi2 = to.latitude_rad();
    let dlon = to.longitude_rad() - from.longitude_rad();

    let y = dlon.sin() * phi2.cos();
    let x = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * dlon.cos();
    normalize_360(y.atan2(x).to_degrees())
}

/// Great-circle distance in kilometres (haversine).
pub fn haversine_km(from: &GeoCoordinate, to: &GeoCoordinate) -> f64 {
    let phi1 = from.latitude_rad();
    let phi2 = to.latitude_rad();
    let dphi = phi2 - phi1;
    let dlon = to.longitude_rad() - from.longitude_rad();

    let a = (dphi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlon / 2.0).sin().powi(2);
    2.0 * EARTH_MEAN_RADIUS_KM * a.sqrt().min(1.0).asin()
}
