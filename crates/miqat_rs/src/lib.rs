//! Convenience facade for the miqat prayer-time and Qibla engine.
//!
//! String-in, record-out functions for callers that hold raw user input
//! (dates as `YYYY-MM-DD`, method ids, offsets in hours), plus serde
//! records for JSON output.
//!
//! # Quick start
//!
//! ```rust
//! use miqat_rs::*;
//!
//! let day = times(40.7128, -74.0060, "2024-06-21", "isna", "standard", -4.0).unwrap();
//! assert_eq!(day.fajr.to_string(), "03:45");
//!
//! let q = qibla(40.7128, -74.0060).unwrap();
//! assert_eq!(q.qibla_direction, 58.5);
//! ```

pub mod convenience;
pub mod error;
pub mod records;

pub use convenience::{fasting, methods, month, next, prayer_config, qibla, times, to_json};
pub use error::MiqatError;
pub use records::{
    FastingDayRecord, FastingRecord, MethodRecord, NextPrayerRecord, QiblaRecord, ScheduleRecord,
};

// Re-export engine types so callers need only this crate.
pub use miqat_config::{ConfigError, MiqatConfig, Overrides, ResolvedConfig};
pub use miqat_geo::{CardinalDirection, GeoCoordinate, GeoError, QiblaBearing, bearing_to_kaaba};
pub use miqat_prayer::{
    AsrJuristicMethod, CalculationMethod, DailySchedule, NextPrayer, Prayer, PrayerAdjustments,
    PrayerConfig, PrayerError, PrayerInstant, current_prayer, daily_schedule, fasting_window,
    monthly_schedule, next_prayer,
};
pub use miqat_solar::{SolarPosition, solar_position};
pub use miqat_time::{CivilDate, ClockTime, LocalDateTime, TimeError, UtcOffset};
