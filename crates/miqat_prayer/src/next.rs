//! Next and current prayer relative to a wall-clock instant.
//!
//! Pull-based: the caller supplies "now" in the same offset as
//! `config.offset`; nothing here reads the system clock.

use miqat_geo::GeoCoordinate;
use miqat_time::{LocalDateTime, MINUTES_PER_DAY};

use crate::calculator::daily_schedule;
use crate::error::PrayerError;
use crate::prayer_types::{NextPrayer, PrayerConfig, PrayerInstant};

/// First instant at or after `now`, rolling over to the next day's Fajr
/// once Isha has passed. Sunrise counts as an instant.
pub fn next_prayer(
    coordinate: &GeoCoordinate,
    now: LocalDateTime,
    config: &PrayerConfig,
) -> Result<NextPrayer, PrayerError> {
    let today = daily_schedule(coordinate, now.date, config)?;
    let upcoming = today
        .instants()
        .iter()
        .find_map(|i| now.time.minutes_until(i.time).map(|m| (*i, m)));
    if let Some((instant, minutes_until)) = upcoming {
        return Ok(NextPrayer {
            date: now.date,
            instant,
            minutes_until,
        });
    }

    let tomorrow_date = now.date.succ();
    let tomorrow = daily_schedule(coordinate, tomorrow_date, config)?;
    let fajr = tomorrow.instants()[0];
    Ok(NextPrayer {
        date: tomorrow_date,
        instant: fajr,
        minutes_until: MINUTES_PER_DAY - now.time.minutes() + fajr.time.minutes(),
    })
}

/// Latest instant at or before `now` on the same date, or `None` before
/// Fajr.
pub fn current_prayer(
    coordinate: &GeoCoordinate,
    now: LocalDateTime,
    config: &PrayerConfig,
) -> Result<Option<PrayerInstant>, PrayerError> {
    let today = daily_schedule(coordinate, now.date, config)?;
    Ok(today
        .instants()
        .iter()
        .rev()
        .find(|i| i.time <= now.time)
        .copied())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::method::{AsrJuristicMethod, CalculationMethod};
    use crate::prayer_types::Prayer;
    use miqat_time::{CivilDate, ClockTime, UtcOffset};

    fn ny() -> GeoCoordinate {
        GeoCoordinate::new(40.7128, -74.0060).unwrap()
    }

    fn cfg() -> PrayerConfig {
        PrayerConfig::new(
            CalculationMethod::Isna,
            AsrJuristicMethod::Standard,
            UtcOffset::from_hours(-4).unwrap(),
        )
    }

    fn at(h: u32, m: u32) -> LocalDateTime {
        LocalDateTime::new(
            CivilDate::new(2024, 6, 21).unwrap(),
            ClockTime::new(h, m).unwrap(),
        )
    }

    #[test]
    fn midday_next_is_asr() {
        let n = next_prayer(&ny(), at(13, 0), &cfg()).unwrap();
        assert_eq!(n.instant.prayer, Prayer::Asr);
        assert_eq!(n.date, at(0, 0).date);
        assert_eq!(n.minutes_until, 16 * 60 + 58 - 13 * 60);
    }

    #[test]
    fn exact_instant_counts_as_next() {
        let n = next_prayer(&ny(), at(12, 58), &cfg()).unwrap();
        assert_eq!(n.instant.prayer, Prayer::Dhuhr);
        assert_eq!(n.minutes_until, 0);
    }

    #[test]
    fn sunrise_is_an_instant() {
        let n = next_prayer(&ny(), at(4, 0), &cfg()).unwrap();
        assert_eq!(n.instant.prayer, Prayer::Sunrise);
    }

    #[test]
    fn after_isha_rolls_to_tomorrow_fajr() {
        let n = next_prayer(&ny(), at(23, 30), &cfg()).unwrap();
        assert_eq!(n.instant.prayer, Prayer::Fajr);
        assert_eq!(n.date, CivilDate::new(2024, 6, 22).unwrap());
        assert_eq!(n.minutes_until, 30 + n.instant.time.minutes());
    }

    #[test]
    fn current_prayer_windows() {
        assert_eq!(current_prayer(&ny(), at(2, 0), &cfg()).unwrap(), None);
        let c = current_prayer(&ny(), at(13, 0), &cfg()).unwrap().unwrap();
        assert_eq!(c.prayer, Prayer::Dhuhr);
        let c = current_prayer(&ny(), at(23, 59), &cfg()).unwrap().unwrap();
        assert_eq!(c.prayer, Prayer::Isha);
    }
}
