//! Serializable output records.
//!
//! Times are `HH:MM` strings and dates `YYYY-MM-DD`, so every record
//! deserializes back to an equal value.

use miqat_geo::{CardinalDirection, GeoCoordinate, bearing_to_kaaba, distance_to_kaaba_km};
use miqat_prayer::{
    CalculationMethod, DailySchedule, FastingDay, FastingWindow, IshaRule, MaghribRule, NextPrayer,
};
use miqat_time::{CivilDate, ClockTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRecord {
    pub date: CivilDate,
    pub fajr: ClockTime,
    pub sunrise: ClockTime,
    pub dhuhr: ClockTime,
    pub asr: ClockTime,
    pub maghrib: ClockTime,
    pub isha: ClockTime,
}

impl From<&DailySchedule> for ScheduleRecord {
    fn from(s: &DailySchedule) -> Self {
        Self {
            date: s.date(),
            fajr: s.fajr(),
            sunrise: s.sunrise(),
            dhuhr: s.dhuhr(),
            asr: s.asr(),
            maghrib: s.maghrib(),
            isha: s.isha(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QiblaRecord {
    /// Degrees clockwise from true north, one decimal, [0, 360).
    pub qibla_direction: f64,
    pub cardinal: CardinalDirection,
    /// Great-circle distance to the Kaaba, one decimal.
    pub distance_km: f64,
}

impl QiblaRecord {
    pub fn for_observer(observer: &GeoCoordinate) -> Self {
        let bearing = bearing_to_kaaba(observer);
        Self {
            qibla_direction: bearing.rounded_tenth(),
            cardinal: bearing.cardinal(),
            distance_km: (distance_to_kaaba_km(observer) * 10.0).round() / 10.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FastingDayRecord {
    pub date: CivilDate,
    pub suhoor_end: ClockTime,
    pub iftar_start: ClockTime,
    pub fasting_minutes: u32,
}

impl From<&FastingDay> for FastingDayRecord {
    fn from(d: &FastingDay) -> Self {
        Self {
            date: d.date,
            suhoor_end: d.suhoor_end,
            iftar_start: d.iftar_start,
            fasting_minutes: d.fasting_minutes(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FastingRecord {
    pub start_date: CivilDate,
    pub end_date: CivilDate,
    pub days: Vec<FastingDayRecord>,
}

impl From<&FastingWindow> for FastingRecord {
    fn from(w: &FastingWindow) -> Self {
        Self {
            start_date: w.start_date,
            end_date: w.end_date,
            days: w.days.iter().map(FastingDayRecord::from).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextPrayerRecord {
    pub date: CivilDate,
    pub prayer: String,
    pub time: ClockTime,
    pub minutes_until: u32,
}

impl From<&NextPrayer> for NextPrayerRecord {
    fn from(n: &NextPrayer) -> Self {
        Self {
            date: n.date,
            prayer: n.instant.prayer.name().to_string(),
            time: n.instant.time,
            minutes_until: n.minutes_until,
        }
    }
}

/// One row of the method listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodRecord {
    pub id: String,
    pub name: String,
    pub fajr_angle: f64,
    /// `"17°"` or `"90 min after Maghrib (120 in Ramadan)"`.
    pub isha: String,
    /// `"sunset"`, `"sunset + 3 min"` or `"4.5°"`.
    pub maghrib: String,
}

impl From<CalculationMethod> for MethodRecord {
    fn from(m: CalculationMethod) -> Self {
        let p = m.parameters();
        let isha = match p.isha {
            IshaRule::Angle(a) => format!("{a}°"),
            IshaRule::MinutesAfterMaghrib { regular, ramadan } => {
                format!("{regular} min after Maghrib ({ramadan} in Ramadan)")
            }
        };
        let maghrib = match p.maghrib {
            MaghribRule::MinutesAfterSunset(0) => "sunset".to_string(),
            MaghribRule::MinutesAfterSunset(n) => format!("sunset + {n} min"),
            MaghribRule::Angle(a) => format!("{a}°"),
        };
        Self {
            id: m.id().to_string(),
            name: m.name().to_string(),
            fajr_angle: p.fajr_angle_deg,
            isha,
            maghrib,
        }
    }
}
