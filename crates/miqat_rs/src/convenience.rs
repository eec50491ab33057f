use miqat_geo::GeoCoordinate;
use miqat_prayer::{
    AsrJuristicMethod, CalculationMethod, PrayerConfig, daily_schedule, fasting_window,
    monthly_schedule, next_prayer,
};
use miqat_time::{CivilDate, LocalDateTime, TimeError, UtcOffset};
use serde::Serialize;
use tracing::debug;

use crate::error::MiqatError;
use crate::records::{
    FastingRecord, MethodRecord, NextPrayerRecord, QiblaRecord, ScheduleRecord,
};

/// Build a `PrayerConfig` from method/Asr ids and an offset in hours.
///
/// Fractional hours are accepted when they land on a whole minute
/// (`5.5`, `5.75`).
pub fn prayer_config(
    method_id: &str,
    asr_id: &str,
    tz_hours: f64,
) -> Result<PrayerConfig, MiqatError> {
    let method: CalculationMethod = method_id.parse()?;
    let asr: AsrJuristicMethod = asr_id.parse()?;
    Ok(PrayerConfig::new(method, asr, offset_from_hours(tz_hours)?))
}

fn offset_from_hours(hours: f64) -> Result<UtcOffset, TimeError> {
    let minutes = hours * 60.0;
    if !minutes.is_finite() || minutes.fract() != 0.0 {
        return Err(TimeError::Parse(format!(
            "UTC offset {hours} h is not a whole number of minutes"
        )));
    }
    UtcOffset::from_minutes(minutes as i32)
}

/// Prayer times for a `YYYY-MM-DD` date.
pub fn times(
    lat: f64,
    lon: f64,
    date: &str,
    method_id: &str,
    asr_id: &str,
    tz_hours: f64,
) -> Result<ScheduleRecord, MiqatError> {
    let coord = GeoCoordinate::new(lat, lon)?;
    let date: CivilDate = date.parse()?;
    let config = prayer_config(method_id, asr_id, tz_hours)?;
    debug!(%coord, %date, method = %config.method, "times");
    Ok(ScheduleRecord::from(&daily_schedule(&coord, date, &config)?))
}

/// Prayer times for every day of a calendar month.
pub fn month(
    lat: f64,
    lon: f64,
    year: i32,
    month: u32,
    method_id: &str,
    asr_id: &str,
    tz_hours: f64,
) -> Result<Vec<ScheduleRecord>, MiqatError> {
    let coord = GeoCoordinate::new(lat, lon)?;
    let config = prayer_config(method_id, asr_id, tz_hours)?;
    debug!(%coord, year, month, method = %config.method, "month");
    Ok(monthly_schedule(&coord, year, month, &config)?
        .iter()
        .map(ScheduleRecord::from)
        .collect())
}

/// Suhoor/iftar for an inclusive `YYYY-MM-DD` window.
pub fn fasting(
    lat: f64,
    lon: f64,
    start: &str,
    end: &str,
    method_id: &str,
    asr_id: &str,
    tz_hours: f64,
) -> Result<FastingRecord, MiqatError> {
    let coord = GeoCoordinate::new(lat, lon)?;
    let start: CivilDate = start.parse()?;
    let end: CivilDate = end.parse()?;
    let config = prayer_config(method_id, asr_id, tz_hours)?;
    debug!(%coord, %start, %end, method = %config.method, "fasting");
    Ok(FastingRecord::from(&fasting_window(
        &coord, start, end, &config,
    )?))
}

/// Next prayer after a `YYYY-MM-DDTHH:MM` local time.
pub fn next(
    lat: f64,
    lon: f64,
    now: &str,
    method_id: &str,
    asr_id: &str,
    tz_hours: f64,
) -> Result<NextPrayerRecord, MiqatError> {
    let coord = GeoCoordinate::new(lat, lon)?;
    let now: LocalDateTime = now.parse()?;
    let config = prayer_config(method_id, asr_id, tz_hours)?;
    debug!(%coord, %now, method = %config.method, "next");
    Ok(NextPrayerRecord::from(&next_prayer(&coord, now, &config)?))
}

/// Qibla bearing, compass sector and distance.
pub fn qibla(lat: f64, lon: f64) -> Result<QiblaRecord, MiqatError> {
    let coord = GeoCoordinate::new(lat, lon)?;
    Ok(QiblaRecord::for_observer(&coord))
}

/// All calculation methods with their parameters.
pub fn methods() -> Vec<MethodRecord> {
    CalculationMethod::all()
        .iter()
        .copied()
        .map(MethodRecord::from)
        .collect()
}

/// Pretty-printed JSON for any record.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, MiqatError> {
    Ok(serde_json::to_string_pretty(value)?)
}
