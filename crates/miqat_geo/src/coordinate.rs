//! Geographic coordinates on Earth's surface.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::GeoError;

/// Geographic coordinate in degrees.
///
/// Latitude is in [-90, 90] (north positive), longitude in [-180, 180]
/// (east positive). Out-of-range values are rejected at construction, never
/// clamped, so every `GeoCoordinate` in circulation is valid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoCoordinate {
    latitude_deg: f64,
    longitude_deg: f64,
}

impl GeoCoordinate {
    /// Create a validated coordinate.
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Result<Self, GeoError> {
        let lat_ok = latitude_deg.is_finite() && (-90.0..=90.0).contains(&latitude_deg);
        let lon_ok = longitude_deg.is_finite() && (-180.0..=180.0).contains(&longitude_deg);
        if !lat_ok || !lon_ok {
            return Err(GeoError::InvalidCoordinate {
                latitude: latitude_deg,
                longitude: longitude_deg,
            });
        }
        Ok(Self {
            latitude_deg,
            longitude_deg,
        })
    }

    /// Construct from constants already known to be in range.
    pub(crate) const fn from_trusted(latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
        }
    }

    pub fn latitude_deg(&self) -> f64 {
        self.latitude_deg
    }

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

impl Display for GeoCoordinate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let ns = if self.latitude_deg < 0.0 { 'S' } else { 'N' };
        let ew = if self.longitude_deg < 0.0 { 'W' } else { 'E' };
        write!(
            f,
            "{:.4}°{ns}, {:.4}°{ew}",
            self.latitude_deg.abs(),
            self.longitude_deg.abs()
        )
    }
}

#[derive(Deserialize)]
struct RawCoordinate {
    latitude_deg: f64,
    longitude_deg: f64,
}

impl<'de> Deserialize<'de> for GeoCoordinate {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let raw = RawCoordinate::deserialize(d)?;
        GeoCoordinate::new(raw.latitude_deg, raw.longitude_deg).map_err(serde::de::Error::custom)
    }
}
