use miqat_config::ConfigError;
use miqat_geo::GeoError;
use miqat_prayer::PrayerError;
use miqat_time::TimeError;
use thiserror::Error;

/// Any failure surfaced by the facade.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MiqatError {
    #[error(transparent)]
    Time(#[from] TimeError),
    #[error(transparent)]
    Geo(#[from] GeoError),
    #[error(transparent)]
    Prayer(#[from] PrayerError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}
