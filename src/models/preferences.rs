use serde::{Deserialize, Serialize};

/// Single global preferences record: which aggregate displays are shown and
/// the minute-denominated goals used for progress ratios.
///
/// Every field falls back to its default on deserialize, so a preferences
/// blob written by an older version stays readable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub show_drive_time: bool,
    pub show_drive_progress: bool,
    pub show_night_drive_time: bool,
    pub show_night_drive_progress: bool,
    /// Total drive-time goal, in minutes.
    pub required_drive_time: i64,
    /// Night drive-time goal, in minutes.
    pub required_night_drive_time: i64,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            show_drive_time: true,
            show_drive_progress: true,
            show_night_drive_time: true,
            show_night_drive_progress: true,
            required_drive_time: 3000,
            required_night_drive_time: 600,
        }
    }
}
