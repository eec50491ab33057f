//! Collapse defaults → config file → command-line overrides into concrete
//! engine inputs.

use miqat_geo::GeoCoordinate;
use miqat_prayer::{
    AsrJuristicMethod, CalculationMethod, PrayerAdjustments, PrayerConfig,
};
use miqat_time::UtcOffset;

use crate::error::ConfigError;
use crate::file::{MiqatConfig, TimezoneValue};

/// Values supplied on the command line. `None` means "not given".
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Overrides {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub method: Option<CalculationMethod>,
    pub asr: Option<AsrJuristicMethod>,
    pub offset: Option<UtcOffset>,
    pub ramadan: Option<bool>,
}

/// Fully resolved settings.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// `None` when neither the file nor the flags name a location.
    pub location: Option<GeoCoordinate>,
    pub location_name: Option<String>,
    pub prayer: PrayerConfig,
}

/// Resolve the final settings. Flags win over the file, the file wins over
/// `PrayerConfig::default()`.
pub fn resolve(config: &MiqatConfig, overrides: &Overrides) -> Result<ResolvedConfig, ConfigError> {
    let defaults = PrayerConfig::default();

    let method = match (overrides.method, config.calculation.method.as_deref()) {
        (Some(m), _) => m,
        (None, Some(id)) => id
            .parse()
            .map_err(|e| ConfigError::invalid("calculation.method", e))?,
        (None, None) => defaults.method,
    };
    let asr = match (overrides.asr, config.calculation.asr.as_deref()) {
        (Some(a), _) => a,
        (None, Some(id)) => id
            .parse()
            .map_err(|e| ConfigError::invalid("calculation.asr", e))?,
        (None, None) => defaults.asr,
    };
    let offset = match (overrides.offset, config.calculation.timezone.as_ref()) {
        (Some(o), _) => o,
        (None, Some(tz)) => timezone_offset(tz)?,
        (None, None) => defaults.offset,
    };
    let ramadan = overrides
        .ramadan
        .or(config.calculation.ramadan)
        .unwrap_or(defaults.ramadan);

    let adj = &config.adjustments;
    let adjustments = PrayerAdjustments {
        fajr: adj.fajr.unwrap_or(0),
        sunrise: adj.sunrise.unwrap_or(0),
        dhuhr: adj.dhuhr.unwrap_or(0),
        asr: adj.asr.unwrap_or(0),
        maghrib: adj.maghrib.unwrap_or(0),
        isha: adj.isha.unwrap_or(0),
    };

    let latitude = overrides.latitude.or(config.location.latitude);
    let longitude = overrides.longitude.or(config.location.longitude);
    let location = match (latitude, longitude) {
        (Some(lat), Some(lon)) => Some(
            GeoCoordinate::new(lat, lon).map_err(|e| ConfigError::invalid("location", e))?,
        ),
        (None, None) => None,
        _ => {
            return Err(ConfigError::invalid(
                "location",
                "latitude and longitude must be given together",
            ));
        }
    };

    Ok(ResolvedConfig {
        location,
        location_name: config.location.name.clone(),
        prayer: PrayerConfig::new(method, asr, offset)
            .with_ramadan(ramadan)
            .with_adjustments(adjustments),
    })
}

fn timezone_offset(tz: &TimezoneValue) -> Result<UtcOffset, ConfigError> {
    let parsed = match tz {
        TimezoneValue::Hours(h) => {
            let minutes = h * 60.0;
            if !minutes.is_finite() || minutes.fract() != 0.0 {
                return Err(ConfigError::invalid(
                    "calculation.timezone",
                    format!("{h} hours is not a whole number of minutes"),
                ));
            }
            UtcOffset::from_minutes(minutes as i32)
        }
        TimezoneValue::Text(s) => s.parse(),
    };
    parsed.map_err(|e| ConfigError::invalid("calculation.timezone", e))
}
