//! Qibla direction: initial great-circle bearing to the Kaaba.
//!
//! The bearing is independent of date and time. At the Kaaba itself the
//! direction is undefined; by convention the bearing there is `0.0`.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Deserializer, Serialize};

use crate::coordinate::GeoCoordinate;
use crate::error::GeoError;
use crate::sphere::{haversine_km, initial_bearing_deg, normalize_360};

/// Latitude of the Kaaba, degrees north.
pub const KAABA_LATITUDE_DEG: f64 = 21.4225;

/// Longitude of the Kaaba, degrees east.
pub const KAABA_LONGITUDE_DEG: f64 = 39.8262;

/// Observers closer than this to the Kaaba get the conventional bearing 0.
const KAABA_DEGENERATE_RADIUS_KM: f64 = 0.001;

/// The Kaaba as a coordinate.
pub const fn kaaba() -> GeoCoordinate {
    GeoCoordinate::from_trusted(KAABA_LATITUDE_DEG, KAABA_LONGITUDE_DEG)
}

/// Bearing toward the Kaaba in degrees clockwise from true north, [0, 360).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct QiblaBearing(f64);

impl<'de> Deserialize<'de> for QiblaBearing {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let deg = f64::deserialize(d)?;
        if !(0.0..360.0).contains(&deg) {
            return Err(serde::de::Error::custom(format!(
                "bearing {deg} outside [0, 360)"
            )));
        }
        Ok(Self(deg))
    }
}

impl QiblaBearing {
    /// Full-precision bearing in degrees.
    pub fn degrees(self) -> f64 {
        self.0
    }

    /// Bearing rounded to one decimal place, still within [0, 360).
    pub fn rounded_tenth(self) -> f64 {
        let r = (self.0 * 10.0).round() / 10.0;
        if r >= 360.0 { 0.0 } else { r }
    }

    /// Eight-point compass sector containing this bearing.
    pub fn cardinal(self) -> CardinalDirection {
        cardinal_direction_of(self.0)
    }
}

impl Display for QiblaBearing {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}°", self.rounded_tenth())
    }
}

/// Eight 45°-wide compass sectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CardinalDirection {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

const ALL_DIRECTIONS: [CardinalDirection; 8] = [
    CardinalDirection::N,
    CardinalDirection::NE,
    CardinalDirection::E,
    CardinalDirection::SE,
    CardinalDirection::S,
    CardinalDirection::SW,
    CardinalDirection::W,
    CardinalDirection::NW,
];

impl CardinalDirection {
    /// Abbreviation, e.g. `"NE"`.
    pub const fn abbrev(self) -> &'static str {
        match self {
            Self::N => "N",
            Self::NE => "NE",
            Self::E => "E",
            Self::SE => "SE",
            Self::S => "S",
            Self::SW => "SW",
            Self::W => "W",
            Self::NW => "NW",
        }
    }

    /// Full English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::N => "North",
            Self::NE => "Northeast",
            Self::E => "East",
            Self::SE => "Southeast",
            Self::S => "South",
            Self::SW => "Southwest",
            Self::W => "West",
            Self::NW => "Northwest",
        }
    }

    /// Bearing at the centre of the sector.
    pub const fn center_deg(self) -> f64 {
        match self {
            Self::N => 0.0,
            Self::NE => 45.0,
            Self::E => 90.0,
            Self::SE => 135.0,
            Self::S => 180.0,
            Self::SW => 225.0,
            Self::W => 270.0,
            Self::NW => 315.0,
        }
    }

    /// All eight sectors, clockwise from north.
    pub const fn all() -> &'static [CardinalDirection] {
        &ALL_DIRECTIONS
    }
}

impl Display for CardinalDirection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.abbrev())
    }
}

/// Bucket a bearing into one of eight sectors.
///
/// Sectors are half-open, `[centre − 22.5, centre + 22.5)`: 22.5° is NE,
/// 337.5° is N. Any finite input is normalized into [0, 360) first.
pub fn cardinal_direction_of(bearing_deg: f64) -> CardinalDirection {
    let shifted = normalize_360(normalize_360(bearing_deg) + 22.5);
    let idx = ((shifted / 45.0).floor() as usize).min(7);
    ALL_DIRECTIONS[idx]
}

/// Qibla bearing for a validated coordinate.
pub fn bearing_to_kaaba(observer: &GeoCoordinate) -> QiblaBearing {
    let target = kaaba();
    if haversine_km(observer, &target) < KAABA_DEGENERATE_RADIUS_KM {
        return QiblaBearing(0.0);
    }
    QiblaBearing(initial_bearing_deg(observer, &target))
}

/// Qibla bearing from raw latitude/longitude in degrees.
///
/// Fails with [`GeoError::InvalidCoordinate`] for out-of-range input.
pub fn qibla_bearing(latitude_deg: f64, longitude_deg: f64) -> Result<QiblaBearing, GeoError> {
    let observer = GeoCoordinate::new(latitude_deg, longitude_deg)?;
    Ok(bearing_to_kaaba(&observer))
}

/// Great-circle distance from the observer to the Kaaba in kilometres.
pub fn distance_to_kaaba_km(observer: &GeoCoordinate) -> f64 {
    haversine_km(observer, &kaaba())
}
