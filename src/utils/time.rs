//! Time utilities: parsing YYYY-MM-DD / HH:MM input, local↔UTC conversion,
//! and the canonical duration formatter.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Local, LocalResult, NaiveDate, NaiveTime, TimeZone, Utc};

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

/// Interpret a date + wall-clock time in the local timezone and convert to
/// UTC. A wall-clock time skipped by a DST jump is rejected; an ambiguous
/// one resolves to its earlier occurrence.
pub fn local_to_utc(date: NaiveDate, time: NaiveTime) -> AppResult<DateTime<Utc>> {
    let naive = date.and_time(time);
    match Local.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Ok(dt.with_timezone(&Utc)),
        LocalResult::Ambiguous(earliest, _) => Ok(earliest.with_timezone(&Utc)),
        LocalResult::None => Err(AppError::InvalidTime(naive.format("%Y-%m-%d %H:%M").to_string())),
    }
}

pub fn local_date_str(t: &DateTime<Utc>) -> String {
    t.with_timezone(&Local).format("%Y-%m-%d").to_string()
}

pub fn local_time_str(t: &DateTime<Utc>) -> String {
    t.with_timezone(&Local).format("%H:%M").to_string()
}

/// Canonical duration formatter, shared by every display site.
///
/// - exactly zero minutes → "0m"
/// - whole hours → "{h}h"
/// - otherwise → "{h}h {m}m"
///
/// Hours and minutes come from integer division/remainder by 60, truncating
/// toward zero, so 30 renders "0h 30m" and negative inputs render with
/// negative components.
pub fn format_duration(minutes: i64) -> String {
    if minutes == 0 {
        return "0m".to_string();
    }

    if minutes % 60 == 0 {
        return format!("{}h", minutes / 60);
    }

    format!("{}h {}m", minutes / 60, minutes % 60)
}
