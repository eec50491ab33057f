//! On-disk configuration file.
//!
//! Lives at `<config_dir>/miqat/config.toml`. Every field is optional so a
//! file may set just one value. A missing file is not an error; the CLI
//! then relies on flags alone. The file is only ever read.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::ConfigError;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct MiqatConfig {
    #[serde(default)]
    pub location: LocationSection,
    #[serde(default)]
    pub calculation: CalculationSection,
    #[serde(default)]
    pub adjustments: AdjustmentsSection,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LocationSection {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Free-form label shown in text output.
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CalculationSection {
    /// Method id such as `"isna"` or `"umm_al_qura"`.
    pub method: Option<String>,
    /// `"standard"` or `"hanafi"`.
    pub asr: Option<String>,
    pub timezone: Option<TimezoneValue>,
    pub ramadan: Option<bool>,
}

/// `timezone = -4`, `timezone = 5.5` or `timezone = "+05:30"`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum TimezoneValue {
    Hours(f64),
    Text(String),
}

/// Per-prayer minute offsets; unset entries are zero.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AdjustmentsSection {
    pub fajr: Option<i32>,
    pub sunrise: Option<i32>,
    pub dhuhr: Option<i32>,
    pub asr: Option<i32>,
    pub maghrib: Option<i32>,
    pub isha: Option<i32>,
}

/// Default config location, `<config_dir>/miqat/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("miqat").join("config.toml"))
}

/// Load and parse a config file at an explicit path.
pub fn load_from(path: &Path) -> Result<MiqatConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config: MiqatConfig = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "loaded config");
    debug!(?config, "config contents");
    Ok(config)
}

/// Load the config at `explicit` if given, otherwise the default location.
///
/// An explicit path must exist. A missing default file yields
/// `MiqatConfig::default()`.
pub fn load(explicit: Option<&Path>) -> Result<MiqatConfig, ConfigError> {
    if let Some(path) = explicit {
        return load_from(path);
    }
    match config_path() {
        Some(path) if path.exists() => load_from(&path),
        Some(path) => {
            debug!(path = %path.display(), "no config file, using defaults");
            Ok(MiqatConfig::default())
        }
        None => {
            debug!("no config directory on this platform, using defaults");
            Ok(MiqatConfig::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_default() {
        let config: MiqatConfig = toml::from_str("").unwrap();
        assert_eq!(config, MiqatConfig::default());
    }

    #[test]
    fn full_file_parses() {
        let config: MiqatConfig = toml::from_str(
            r#"
[location]
latitude = 40.7128
longitude = -74.006
name = "New York"

[calculation]
method = "isna"
asr = "hanafi"
timezone = "-04:00"
ramadan = true

[adjustments]
fajr = 2
isha = -1
"#,
        )
        .unwrap();
        assert_eq!(config.location.latitude, Some(40.7128));
        assert_eq!(config.location.name.as_deref(), Some("New York"));
        assert_eq!(config.calculation.method.as_deref(), Some("isna"));
        assert_eq!(
            config.calculation.timezone,
            Some(TimezoneValue::Text("-04:00".to_string()))
        );
        assert_eq!(config.calculation.ramadan, Some(true));
        assert_eq!(config.adjustments.fajr, Some(2));
        assert_eq!(config.adjustments.dhuhr, None);
    }

    #[test]
    fn numeric_timezones() {
        let config: MiqatConfig = toml::from_str("[calculation]\ntimezone = -4\n").unwrap();
        assert_eq!(config.calculation.timezone, Some(TimezoneValue::Hours(-4.0)));
        let config: MiqatConfig = toml::from_str("[calculation]\ntimezone = 5.5\n").unwrap();
        assert_eq!(config.calculation.timezone, Some(TimezoneValue::Hours(5.5)));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(toml::from_str::<MiqatConfig>("[calculation]\nmethd = \"isna\"\n").is_err());
    }

    #[test]
    fn default_path_ends_in_miqat_config() {
        if let Some(p) = config_path() {
            assert!(p.ends_with("miqat/config.toml"));
        }
    }

    #[test]
    fn missing_explicit_path_is_io_error() {
        let p = std::env::temp_dir().join("miqat-config-does-not-exist.toml");
        assert!(matches!(load(Some(&p)), Err(ConfigError::Io { .. })));
    }
}
