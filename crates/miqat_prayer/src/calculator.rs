//! Daily prayer-time computation.
//!
//! Dhuhr is the solar transit. Every other instant is the moment the Sun's
//! altitude crosses a target depression on the rising or setting side:
//!
//! `cos H = (−sin a − sin φ·sin δ) / (cos φ·cos δ)`
//!
//! Each event starts from the transit estimate and re-evaluates the solar
//! position at its own estimated instant, so declination and equation of
//! time track the Sun through the day.

use miqat_geo::GeoCoordinate;
use miqat_solar::SolarPosition;
use miqat_time::{CivilDate, ClockTime, MINUTES_PER_DAY};
use tracing::{debug, trace};

use crate::error::PrayerError;
use crate::method::{IshaRule, MaghribRule};
use crate::prayer_types::{DailySchedule, Prayer, PrayerConfig, PrayerInstant};

/// Latitudes beyond this band are rejected outright.
pub const MAX_POLAR_LATITUDE_DEG: f64 = 65.0;

/// Sunrise/sunset depression: 34' refraction plus 16' solar semidiameter.
pub const HORIZON_DEPRESSION_DEG: f64 = 0.833;

/// Maximum iterations for the event refinement loop.
const MAX_ITERATIONS: usize = 3;

/// Convergence threshold in hours (~0.036 seconds).
const CONVERGENCE_HOURS: f64 = 1.0e-5;

/// Approximate Julian Date of local solar noon.
///
/// `jd_midnight` is 0h UT of the civil date, `longitude_deg` is east
/// positive.
pub fn approximate_local_noon_jd(jd_midnight: f64, longitude_deg: f64) -> f64 {
    jd_midnight + 0.5 - longitude_deg / 360.0
}

/// Hour angle in degrees at which the Sun is `depression_deg` below the
/// horizon, or `None` when it never gets there on this day.
pub fn hour_angle_deg(depression_deg: f64, latitude_deg: f64, declination_deg: f64) -> Option<f64> {
    let phi = latitude_deg.to_radians();
    let delta = declination_deg.to_radians();
    let cos_h = (-depression_deg.to_radians().sin() - phi.sin() * delta.sin())
        / (phi.cos() * delta.cos());
    if !(-1.0..=1.0).contains(&cos_h) {
        return None;
    }
    Some(cos_h.acos().to_degrees())
}

/// Depression angle of the Asr instant for a shadow factor.
///
/// The result is negative: the Sun is still above the horizon.
pub fn asr_depression_deg(shadow_factor: f64, latitude_deg: f64, declination_deg: f64) -> f64 {
    let zenith_at_noon = (latitude_deg - declination_deg).abs().to_radians();
    -(1.0 / (shadow_factor + zenith_at_noon.tan())).atan().to_degrees()
}

#[derive(Debug, Clone, Copy)]
enum Side {
    Rising,
    Setting,
}

impl Side {
    fn sign(self) -> f64 {
        match self {
            Side::Rising => -1.0,
            Side::Setting => 1.0,
        }
    }
}

/// Per-day inputs shared by every event.
struct Day {
    date: CivilDate,
    jd_midnight: f64,
    latitude_deg: f64,
    longitude_deg: f64,
}

impl Day {
    /// Transit in UT hours given an equation of time in minutes.
    fn noon_ut(&self, eqt_min: f64) -> f64 {
        12.0 - self.longitude_deg / 15.0 - eqt_min / 60.0
    }

    fn transit_ut(&self) -> f64 {
        let sun = SolarPosition::at_jd(approximate_local_noon_jd(
            self.jd_midnight,
            self.longitude_deg,
        ));
        self.noon_ut(sun.equation_of_time_min)
    }

    /// UT hours at which the Sun crosses `depression(δ)` on `side`.
    fn event_ut(
        &self,
        prayer: Prayer,
        side: Side,
        depression: impl Fn(f64) -> f64,
    ) -> Result<f64, PrayerError> {
        let mut t = self.transit_ut();
        for _ in 0..MAX_ITERATIONS {
            let sun = SolarPosition::at_jd(self.jd_midnight + t / 24.0);
            let dec = sun.declination_deg;
            let h = hour_angle_deg(depression(dec), self.latitude_deg, dec)
                .ok_or_else(|| self.polar(Some(prayer)))?;
            let next = self.noon_ut(sun.equation_of_time_min) + side.sign() * h / 15.0;
            let converged = (next - t).abs() < CONVERGENCE_HOURS;
            t = next;
            if converged {
                break;
            }
        }
        Ok(t)
    }

    /// UT hours → local clock time, with the per-prayer adjustment.
    ///
    /// An event the Sun itself places outside the local day (Isha after
    /// midnight in a high-latitude summer) is a twilight degeneracy. Only
    /// an adjustment pushing an instant out of the day is a violation.
    fn to_local(
        &self,
        prayer: Prayer,
        ut_hours: f64,
        config: &PrayerConfig,
    ) -> Result<ClockTime, PrayerError> {
        let solar = (ut_hours + config.offset.hours()) * 60.0;
        if !within_day(solar.round()) {
            return Err(self.polar(Some(prayer)));
        }
        let rounded = (solar + f64::from(config.adjustments.minutes_for(prayer))).round();
        if !within_day(rounded) {
            return Err(PrayerError::InvariantViolation {
                date: self.date,
                detail: format!(
                    "{prayer} at {rounded} minutes falls outside the local day (offset {})",
                    config.offset
                ),
            });
        }
        Ok(ClockTime::from_minutes(rounded as u32)?)
    }

    fn polar(&self, prayer: Option<Prayer>) -> PrayerError {
        debug!(
            date = %self.date,
            latitude = self.latitude_deg,
            prayer = ?prayer,
            "polar degeneracy"
        );
        PrayerError::PolarDegeneracy {
            prayer,
            latitude: self.latitude_deg,
            date: self.date,
        }
    }
}

/// Prayer times for one date at one location.
///
/// Instants are local to `config.offset`, tuned by `config.adjustments` and
/// rounded to the nearest minute.
///
/// # Errors
/// - [`PrayerError::Time`] for dates outside 1901–2199
/// - [`PrayerError::PolarDegeneracy`] when `|latitude| > 65°`, an angle is
///   never reached, or an event falls outside the local day
/// - [`PrayerError::InvariantViolation`] when an adjustment moves an instant
///   out of the local day or the six instants are not strictly increasing
pub fn daily_schedule(
    coordinate: &GeoCoordinate,
    date: CivilDate,
    config: &PrayerConfig,
) -> Result<DailySchedule, PrayerError> {
    let date = date.ensure_supported()?;
    let day = Day {
        date,
        jd_midnight: date.jd_midnight(),
        latitude_deg: coordinate.latitude_deg(),
        longitude_deg: coordinate.longitude_deg(),
    };
    if day.latitude_deg.abs() > MAX_POLAR_LATITUDE_DEG {
        return Err(day.polar(None));
    }

    let params = config.method.parameters();
    let shadow = config.asr.shadow_factor();
    let lat = day.latitude_deg;

    let fajr = day.event_ut(Prayer::Fajr, Side::Rising, |_| params.fajr_angle_deg)?;
    let sunrise = day.event_ut(Prayer::Sunrise, Side::Rising, |_| HORIZON_DEPRESSION_DEG)?;
    let dhuhr = day.transit_ut();
    let asr = day.event_ut(Prayer::Asr, Side::Setting, |dec| {
        asr_depression_deg(shadow, lat, dec)
    })?;
    let maghrib = match params.maghrib {
        MaghribRule::MinutesAfterSunset(m) => {
            let sunset =
                day.event_ut(Prayer::Maghrib, Side::Setting, |_| HORIZON_DEPRESSION_DEG)?;
            sunset + f64::from(m) / 60.0
        }
        MaghribRule::Angle(a) => day.event_ut(Prayer::Maghrib, Side::Setting, |_| a)?,
    };
    let isha = match params.isha {
        IshaRule::Angle(a) => day.event_ut(Prayer::Isha, Side::Setting, |_| a)?,
        IshaRule::MinutesAfterMaghrib { regular, ramadan } => {
            let m = if config.ramadan { ramadan } else { regular };
            maghrib + f64::from(m) / 60.0
        }
    };

    let ut = [fajr, sunrise, dhuhr, asr, maghrib, isha];
    let mut instants = [PrayerInstant {
        prayer: Prayer::Fajr,
        time: ClockTime::MIDNIGHT,
    }; 6];
    for (slot, (&prayer, &hours)) in instants.iter_mut().zip(Prayer::all().iter().zip(&ut)) {
        *slot = PrayerInstant {
            prayer,
            time: day.to_local(prayer, hours, config)?,
        };
    }
    check_order(date, &instants)?;

    trace!(
        date = %date,
        method = %config.method,
        asr = %config.asr,
        fajr = %instants[0].time,
        isha = %instants[5].time,
        "computed schedule"
    );
    Ok(DailySchedule::new(date, instants))
}

fn within_day(minutes: f64) -> bool {
    (0.0..f64::from(MINUTES_PER_DAY)).contains(&minutes)
}

fn check_order(date: CivilDate, instants: &[PrayerInstant; 6]) -> Result<(), PrayerError> {
    for pair in instants.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if a.time >= b.time {
            return Err(PrayerError::InvariantViolation {
                date,
                detail: format!(
                    "{} {} is not before {} {}",
                    a.prayer, a.time, b.prayer, b.time
                ),
            });
        }
    }
    Ok(())
}
