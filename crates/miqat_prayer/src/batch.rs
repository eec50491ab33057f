//! Multi-day schedules: calendar months and fasting windows.

use miqat_geo::GeoCoordinate;
use miqat_time::{CivilDate, days_in_month};

use crate::calculator::daily_schedule;
use crate::error::PrayerError;
use crate::prayer_types::{DailySchedule, FastingDay, FastingWindow, PrayerConfig};

/// Every date of a calendar month, in order.
pub fn month_days(year: i32, month: u32) -> Result<impl Iterator<Item = CivilDate>, PrayerError> {
    let first = CivilDate::new(year, month, 1)?;
    let len = days_in_month(year, month);
    Ok(std::iter::successors(Some(first), |d| Some(d.succ())).take(len as usize))
}

/// Inclusive run of dates from `start` to `end`.
fn date_range(start: CivilDate, end: CivilDate) -> impl Iterator<Item = CivilDate> {
    std::iter::successors(Some(start), move |d| (*d < end).then(|| d.succ()))
}

/// One schedule per day of a calendar month (28 to 31 entries).
///
/// The first failing day aborts the month; no partial result is returned.
pub fn monthly_schedule(
    coordinate: &GeoCoordinate,
    year: i32,
    month: u32,
    config: &PrayerConfig,
) -> Result<Vec<DailySchedule>, PrayerError> {
    month_days(year, month)?
        .map(|date| daily_schedule(coordinate, date, config))
        .collect()
}

/// Suhoor end and iftar start for every day of `start..=end`.
///
/// Computed with the Ramadan flag set regardless of `config.ramadan`.
pub fn fasting_window(
    coordinate: &GeoCoordinate,
    start: CivilDate,
    end: CivilDate,
    config: &PrayerConfig,
) -> Result<FastingWindow, PrayerError> {
    if end < start {
        return Err(PrayerError::InvalidDateRange { start, end });
    }
    let config = config.with_ramadan(true);
    let days = date_range(start, end)
        .map(|date| {
            let s = daily_schedule(coordinate, date, &config)?;
            Ok(FastingDay {
                date,
                suhoor_end: s.fajr(),
                iftar_start: s.maghrib(),
            })
        })
        .collect::<Result<Vec<_>, PrayerError>>()?;
    Ok(FastingWindow {
        start_date: start,
        end_date: end,
        days,
    })
}
