//! Export column set for CSV output.

use crate::core::aggregate::duration_minutes;
use crate::errors::{AppError, AppResult};
use crate::models::drive::DriveRecord;
use crate::utils::time::{local_date_str, local_time_str};

/// The fixed set of CSV columns, selectable and orderable by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportColumn {
    Date,
    StartTime,
    EndTime,
    Length,
    Day,
    Weather,
    Notes,
}

impl ExportColumn {
    pub const ALL: [ExportColumn; 7] = [
        ExportColumn::Date,
        ExportColumn::StartTime,
        ExportColumn::EndTime,
        ExportColumn::Length,
        ExportColumn::Day,
        ExportColumn::Weather,
        ExportColumn::Notes,
    ];

    pub fn header(&self) -> &'static str {
        match self {
            ExportColumn::Date => "Date",
            ExportColumn::StartTime => "Start Time",
            ExportColumn::EndTime => "End Time",
            ExportColumn::Length => "Length",
            ExportColumn::Day => "Day",
            ExportColumn::Weather => "Weather",
            ExportColumn::Notes => "Notes",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "date" => Some(ExportColumn::Date),
            "start time" => Some(ExportColumn::StartTime),
            "end time" => Some(ExportColumn::EndTime),
            "length" => Some(ExportColumn::Length),
            "day" => Some(ExportColumn::Day),
            "weather" => Some(ExportColumn::Weather),
            "notes" => Some(ExportColumn::Notes),
            _ => None,
        }
    }

    /// Cell value for one record. Length is the drive duration in whole
    /// minutes.
    pub fn value(&self, record: &DriveRecord) -> String {
        match self {
            ExportColumn::Date => local_date_str(&record.start),
            ExportColumn::StartTime => local_time_str(&record.start),
            ExportColumn::EndTime => local_time_str(&record.end),
            ExportColumn::Length => duration_minutes(record).to_string(),
            ExportColumn::Day => record.day.to_string(),
            ExportColumn::Weather => record.weather.as_str().to_string(),
            ExportColumn::Notes => record.notes.clone().unwrap_or_default(),
        }
    }
}

/// Parse a comma-separated column list, e.g. "Date,Length,Notes".
pub fn parse_columns(list: &str) -> AppResult<Vec<ExportColumn>> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|name| ExportColumn::from_name(name).ok_or_else(|| AppError::InvalidColumn(name.to_string())))
        .collect()
}
