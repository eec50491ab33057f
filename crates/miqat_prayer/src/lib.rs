//! Islamic prayer-time calculator.
//!
//! This crate provides:
//! - The six calculation methods and the Asr juristic options
//! - Daily schedules (Fajr, Sunrise, Dhuhr, Asr, Maghrib, Isha)
//! - Monthly schedules and Ramadan fasting windows
//! - Next-prayer and current-prayer queries against a caller-supplied clock
//!
//! All functions are pure and synchronous. The calculator emits `tracing`
//! events; install a subscriber to see them.

pub mod batch;
pub mod calculator;
pub mod error;
pub mod method;
pub mod next;
pub mod prayer_types;

pub use batch::{fasting_window, month_days, monthly_schedule};
pub use calculator::{
    HORIZON_DEPRESSION_DEG, MAX_POLAR_LATITUDE_DEG, approximate_local_noon_jd,
    asr_depression_deg, daily_schedule, hour_angle_deg,
};
pub use error::PrayerError;
pub use method::{
    AngleParameters, AsrJuristicMethod, CalculationMethod, IshaRule, MaghribRule, parameters_for,
    parameters_for_id, shadow_factor_for,
};
pub use next::{current_prayer, next_prayer};
pub use prayer_types::{
    DailySchedule, FastingDay, FastingWindow, NextPrayer, Prayer, PrayerAdjustments, PrayerConfig,
    PrayerInstant,
};
