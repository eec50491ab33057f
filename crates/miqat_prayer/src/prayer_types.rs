//! Value types for prayer-time schedules.

use std::fmt::{Display, Formatter};

use miqat_time::{CivilDate, ClockTime, UtcOffset};

use crate::method::{AsrJuristicMethod, CalculationMethod};

/// The six daily instants, in chronological order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Prayer {
    Fajr,
    Sunrise,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

const ALL_PRAYERS: [Prayer; 6] = [
    Prayer::Fajr,
    Prayer::Sunrise,
    Prayer::Dhuhr,
    Prayer::Asr,
    Prayer::Maghrib,
    Prayer::Isha,
];

impl Prayer {
    /// All six, Fajr first.
    pub const fn all() -> &'static [Prayer; 6] {
        &ALL_PRAYERS
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Fajr => "Fajr",
            Self::Sunrise => "Sunrise",
            Self::Dhuhr => "Dhuhr",
            Self::Asr => "Asr",
            Self::Maghrib => "Maghrib",
            Self::Isha => "Isha",
        }
    }

    /// 0-based position in the day.
    pub const fn index(self) -> usize {
        match self {
            Self::Fajr => 0,
            Self::Sunrise => 1,
            Self::Dhuhr => 2,
            Self::Asr => 3,
            Self::Maghrib => 4,
            Self::Isha => 5,
        }
    }
}

impl Display for Prayer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One prayer at its local time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PrayerInstant {
    pub prayer: Prayer,
    pub time: ClockTime,
}

/// Six instants for one date, strictly increasing.
///
/// Only the calculator constructs these, after checking the ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DailySchedule {
    date: CivilDate,
    instants: [PrayerInstant; 6],
}

impl DailySchedule {
    pub(crate) fn new(date: CivilDate, instants: [PrayerInstant; 6]) -> Self {
        Self { date, instants }
    }

    pub fn date(&self) -> CivilDate {
        self.date
    }

    /// Instants in chronological order.
    pub fn instants(&self) -> &[PrayerInstant; 6] {
        &self.instants
    }

    /// Local time of a given prayer.
    pub fn get(&self, prayer: Prayer) -> ClockTime {
        self.instants[prayer.index()].time
    }

    pub fn fajr(&self) -> ClockTime {
        self.get(Prayer::Fajr)
    }

    pub fn sunrise(&self) -> ClockTime {
        self.get(Prayer::Sunrise)
    }

    pub fn dhuhr(&self) -> ClockTime {
        self.get(Prayer::Dhuhr)
    }

    pub fn asr(&self) -> ClockTime {
        self.get(Prayer::Asr)
    }

    pub fn maghrib(&self) -> ClockTime {
        self.get(Prayer::Maghrib)
    }

    pub fn isha(&self) -> ClockTime {
        self.get(Prayer::Isha)
    }
}

/// Per-prayer signed minute offsets applied before rounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PrayerAdjustments {
    pub fajr: i32,
    pub sunrise: i32,
    pub dhuhr: i32,
    pub asr: i32,
    pub maghrib: i32,
    pub isha: i32,
}

impl PrayerAdjustments {
    pub const fn minutes_for(&self, prayer: Prayer) -> i32 {
        match prayer {
            Prayer::Fajr => self.fajr,
            Prayer::Sunrise => self.sunrise,
            Prayer::Dhuhr => self.dhuhr,
            Prayer::Asr => self.asr,
            Prayer::Maghrib => self.maghrib,
            Prayer::Isha => self.isha,
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

/// Everything besides location and date that shapes a schedule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrayerConfig {
    pub method: CalculationMethod,
    pub asr: AsrJuristicMethod,
    /// Offset of the caller's local clock from UT.
    pub offset: UtcOffset,
    /// Selects the Ramadan Isha interval for fixed-interval methods.
    pub ramadan: bool,
    pub adjustments: PrayerAdjustments,
}

impl PrayerConfig {
    pub fn new(method: CalculationMethod, asr: AsrJuristicMethod, offset: UtcOffset) -> Self {
        Self {
            method,
            asr,
            offset,
            ramadan: false,
            adjustments: PrayerAdjustments::default(),
        }
    }

    pub fn with_ramadan(self, ramadan: bool) -> Self {
        Self { ramadan, ..self }
    }

    pub fn with_adjustments(self, adjustments: PrayerAdjustments) -> Self {
        Self {
            adjustments,
            ..self
        }
    }
}

impl Default for PrayerConfig {
    fn default() -> Self {
        Self::new(
            CalculationMethod::Mwl,
            AsrJuristicMethod::Standard,
            UtcOffset::UTC,
        )
    }
}

/// Result of a next-prayer query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NextPrayer {
    /// Date the instant falls on (the query date, or the day after).
    pub date: CivilDate,
    pub instant: PrayerInstant,
    /// Whole minutes from the query time to the instant.
    pub minutes_until: u32,
}

/// Suhoor and iftar for one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FastingDay {
    pub date: CivilDate,
    /// End of suhoor, equal to Fajr.
    pub suhoor_end: ClockTime,
    /// Start of iftar, equal to Maghrib.
    pub iftar_start: ClockTime,
}

impl FastingDay {
    /// Length of the fast in minutes.
    pub fn fasting_minutes(&self) -> u32 {
        self.iftar_start.minutes() - self.suhoor_end.minutes()
    }
}

/// Fasting days over an inclusive date window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastingWindow {
    pub start_date: CivilDate,
    pub end_date: CivilDate,
    pub days: Vec<FastingDay>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32) -> ClockTime {
        ClockTime::new(h, m).unwrap()
    }

    fn sample() -> DailySchedule {
        let times = [t(3, 45), t(5, 25), t(12, 58), t(16, 58), t(20, 31), t(22, 11)];
        let mut instants = [PrayerInstant {
            prayer: Prayer::Fajr,
            time: ClockTime::MIDNIGHT,
        }; 6];
        for (slot, (&prayer, &time)) in instants.iter_mut().zip(Prayer::all().iter().zip(&times)) {
            *slot = PrayerInstant { prayer, time };
        }
        DailySchedule::new(CivilDate::new(2024, 6, 21).unwrap(), instants)
    }

    #[test]
    fn prayers_are_ordered() {
        let all = Prayer::all();
        assert!(all.windows(2).all(|w| w[0] < w[1]));
        for (i, p) in all.iter().enumerate() {
            assert_eq!(p.index(), i);
        }
    }

    #[test]
    fn schedule_accessors() {
        let s = sample();
        assert_eq!(s.fajr(), t(3, 45));
        assert_eq!(s.sunrise(), t(5, 25));
        assert_eq!(s.dhuhr(), t(12, 58));
        assert_eq!(s.asr(), t(16, 58));
        assert_eq!(s.maghrib(), t(20, 31));
        assert_eq!(s.isha(), t(22, 11));
        assert_eq!(s.instants()[4].prayer, Prayer::Maghrib);
    }

    #[test]
    fn adjustments_lookup() {
        let adj = PrayerAdjustments {
            fajr: -2,
            isha: 3,
            ..Default::default()
        };
        assert_eq!(adj.minutes_for(Prayer::Fajr), -2);
        assert_eq!(adj.minutes_for(Prayer::Dhuhr), 0);
        assert_eq!(adj.minutes_for(Prayer::Isha), 3);
        assert!(!adj.is_zero());
        assert!(PrayerAdjustments::default().is_zero());
    }

    #[test]
    fn config_builders() {
        let c = PrayerConfig::default();
        assert_eq!(c.method, CalculationMethod::Mwl);
        assert_eq!(c.asr, AsrJuristicMethod::Standard);
        assert_eq!(c.offset, UtcOffset::UTC);
        assert!(!c.ramadan);
        let r = c.with_ramadan(true);
        assert!(r.ramadan);
        assert_eq!(r.method, c.method);
    }

    #[test]
    fn fasting_minutes() {
        let d = FastingDay {
            date: CivilDate::new(2025, 3, 1).unwrap(),
            suhoor_end: t(5, 15),
            iftar_start: t(17, 48),
        };
        assert_eq!(d.fasting_minutes(), 12 * 60 + 33);
    }

    #[test]
    fn value_types_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DailySchedule>();
        assert_send_sync::<PrayerConfig>();
        assert_send_sync::<NextPrayer>();
        assert_send_sync::<FastingWindow>();
    }
}
