//! Error types for prayer-time calculations.

use miqat_geo::GeoError;
use miqat_time::{CivilDate, TimeError};
use thiserror::Error;

use crate::prayer_types::Prayer;

/// Errors from the prayer-time calculator.
///
/// Every variant carries the offending input. None are recovered
/// internally; the calculator performs no retries and has no fallbacks.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum PrayerError {
    /// Date outside the supported era, or an invalid date/offset.
    #[error(transparent)]
    Time(#[from] TimeError),
    /// Coordinate outside valid ranges.
    #[error(transparent)]
    Geo(#[from] GeoError),
    /// The Sun never reaches the required angle within the local day, or
    /// the latitude lies beyond the supported ±65° band (`prayer` is `None`).
    #[error("polar degeneracy on {date} at latitude {latitude}: {}", polar_reason(.prayer))]
    PolarDegeneracy {
        prayer: Option<Prayer>,
        latitude: f64,
        date: CivilDate,
    },
    /// Unrecognized calculation method identifier.
    #[error("unknown calculation method: {0:?}")]
    UnknownMethod(String),
    /// Unrecognized Asr juristic method identifier.
    #[error("unknown Asr juristic method: {0:?}")]
    UnknownAsrMethod(String),
    /// Adjusted instants break Fajr < Sunrise < ... < Isha or leave the
    /// local day.
    #[error("schedule invariant violated on {date}: {detail}")]
    InvariantViolation { date: CivilDate, detail: String },
    /// End of a date window precedes its start.
    #[error("date range {start}..={end} is reversed")]
    InvalidDateRange { start: CivilDate, end: CivilDate },
}

fn polar_reason(prayer: &Option<Prayer>) -> String {
    match prayer {
        Some(p) => format!("{} is not reached within the local day", p.name()),
        None => "latitude beyond the supported ±65° band".to_string(),
    }
}
