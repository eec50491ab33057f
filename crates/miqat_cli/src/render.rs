//! Plain-text rendering of records.

use std::fmt::Write;

use miqat_rs::{
    FastingRecord, GeoCoordinate, MethodRecord, NextPrayerRecord, PrayerConfig, QiblaRecord,
    ScheduleRecord,
};

/// Column labels in schedule order.
const LABELS: [&str; 6] = ["Fajr", "Sunrise", "Dhuhr", "Asr", "Maghrib", "Isha"];

fn times_of(r: &ScheduleRecord) -> [String; 6] {
    [r.fajr, r.sunrise, r.dhuhr, r.asr, r.maghrib, r.isha].map(|t| t.to_string())
}

/// Header line: place, method, offset.
pub fn header(place: Option<&str>, coord: &GeoCoordinate, config: &PrayerConfig) -> String {
    let place = match place {
        Some(name) => format!("{name} ({coord})"),
        None => coord.to_string(),
    };
    let mut s = format!(
        "{place}\n{} / Asr {} / UTC{}",
        config.method.name(),
        config.asr,
        config.offset
    );
    if config.ramadan {
        s.push_str(" / Ramadan");
    }
    s
}

pub fn schedule(r: &ScheduleRecord) -> String {
    let mut s = format!("{}\n", r.date);
    for (label, time) in LABELS.iter().zip(times_of(r)) {
        let _ = writeln!(s, "  {label:<8} {time}");
    }
    s
}

pub fn month(rows: &[ScheduleRecord]) -> String {
    let mut s = format!("{:<10}", "Date");
    for label in LABELS {
        let _ = write!(s, "  {label:<7}");
    }
    s.push('\n');
    for r in rows {
        let _ = write!(s, "{:<10}", r.date.to_string());
        for time in times_of(r) {
            let _ = write!(s, "  {time:<7}");
        }
        s.push('\n');
    }
    s
}

pub fn fasting(f: &FastingRecord) -> String {
    let mut s = format!("Fasting {} to {}\n", f.start_date, f.end_date);
    let _ = writeln!(s, "{:<10}  {:<6}  {:<6}  {}", "Date", "Suhoor", "Iftar", "Fast");
    for d in &f.days {
        let _ = writeln!(
            s,
            "{:<10}  {:<6}  {:<6}  {}h{:02}",
            d.date.to_string(),
            d.suhoor_end.to_string(),
            d.iftar_start.to_string(),
            d.fasting_minutes / 60,
            d.fasting_minutes % 60
        );
    }
    s
}

pub fn next(n: &NextPrayerRecord) -> String {
    format!(
        "Next: {} at {} on {} (in {}h{:02})\n",
        n.prayer,
        n.time,
        n.date,
        n.minutes_until / 60,
        n.minutes_until % 60
    )
}

pub fn qibla(q: &QiblaRecord) -> String {
    format!(
        "Qibla: {:.1}° ({}, {})\nDistance to the Kaaba: {:.1} km\n",
        q.qibla_direction,
        q.cardinal,
        q.cardinal.name(),
        q.distance_km
    )
}

pub fn methods(rows: &[MethodRecord]) -> String {
    let mut s = String::new();
    for m in rows {
        let _ = writeln!(
            s,
            "{:<9} {:<46} Fajr {:>4}°  Isha {}  Maghrib {}",
            m.id, m.name, m.fajr_angle, m.isha, m.maghrib
        );
    }
    s
}
