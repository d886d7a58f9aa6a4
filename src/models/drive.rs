use super::weather::Weather;
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One logged drive session.
///
/// Records persisted by old versions of the app carry no `id`; those
/// deserialize as the nil UUID and get a fresh one assigned on first load
/// (see `DriveStore::load_all`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriveRecord {
    #[serde(default = "Uuid::nil")]
    pub id: Uuid,
    pub start: DateTime<Utc>, // RFC 3339 in the stored blob
    pub end: DateTime<Utc>,
    pub day: bool, // user-set classification, not computed from solar time
    #[serde(default)]
    pub weather: Weather,
    #[serde(default)]
    pub notes: Option<String>,
}

impl DriveRecord {
    /// Build a new record with a freshly assigned id.
    /// Rejects ranges that end before they start.
    pub fn new(
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        day: bool,
        weather: Weather,
        notes: Option<String>,
    ) -> AppResult<Self> {
        let record = Self {
            id: Uuid::new_v4(),
            start,
            end,
            day,
            weather,
            notes,
        };
        record.validate()?;
        Ok(record)
    }

    /// Check the temporal invariant. Called at creation and at edit commit;
    /// records already persisted with an inverted range are not re-checked
    /// on load.
    pub fn validate(&self) -> AppResult<()> {
        if self.end < self.start {
            return Err(AppError::InvalidTimeRange {
                start: self.start.to_rfc3339(),
                end: self.end.to_rfc3339(),
            });
        }
        Ok(())
    }

    pub fn is_legacy(&self) -> bool {
        self.id.is_nil()
    }

    /// First block of the hyphenated uuid, enough to identify a drive in
    /// CLI output and as an `edit`/`del` argument.
    pub fn short_id(&self) -> String {
        self.id.to_string().chars().take(8).collect()
    }
}
