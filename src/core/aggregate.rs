//! Time aggregation engine: pure functions computing derived display values
//! from records and preferences. No side effects, no I/O.

use crate::models::drive::DriveRecord;
use crate::models::preferences::Preferences;

/// Length of one drive in whole minutes, truncated toward zero.
///
/// Not clamped: a record persisted with an inverted range yields a negative
/// duration, and callers show it as-is.
pub fn duration_minutes(record: &DriveRecord) -> i64 {
    (record.end - record.start).num_minutes()
}

/// Sum of all drive lengths, in minutes.
pub fn total_duration(records: &[DriveRecord]) -> i64 {
    records.iter().map(duration_minutes).sum()
}

/// Sum of night drive lengths, in minutes.
pub fn night_duration(records: &[DriveRecord]) -> i64 {
    records
        .iter()
        .filter(|r| !r.day)
        .map(duration_minutes)
        .sum()
}

/// Accumulated minutes over the configured goal.
///
/// Unclamped: may exceed 1.0 (goal surpassed) or be negative (inverted
/// legacy records); only the rendering layer clamps. A goal of zero or
/// negative minutes is treated as already met and yields 1.0.
pub fn progress_ratio(accumulated: i64, required: i64) -> f64 {
    if required <= 0 {
        return 1.0;
    }
    accumulated as f64 / required as f64
}

/// Derived values the summary display consumes.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressSummary {
    pub drive_minutes: i64,
    pub night_minutes: i64,
    pub drive_ratio: f64,
    pub night_ratio: f64,
}

pub fn build_summary(records: &[DriveRecord], prefs: &Preferences) -> ProgressSummary {
    let drive_minutes = total_duration(records);
    let night_minutes = night_duration(records);
    ProgressSummary {
        drive_minutes,
        night_minutes,
        drive_ratio: progress_ratio(drive_minutes, prefs.required_drive_time),
        night_ratio: progress_ratio(night_minutes, prefs.required_night_drive_time),
    }
}
