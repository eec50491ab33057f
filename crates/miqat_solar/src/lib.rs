//! Solar position engine for prayer-time computation.
//!
//! This crate provides:
//! - Solar declination and equation of time for a calendar date
//! - The same quantities at an arbitrary Julian Date, for refining
//!   individual events at their estimated instants
//!
//! Pure functions only; no state and no I/O.

pub mod solar;

pub use solar::{SolarPosition, obliquity_deg, solar_position, solar_position_jd};
