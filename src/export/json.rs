//! Writes drive records as formatted JSON.

use crate::errors::AppResult;
use crate::models::drive::DriveRecord;
use std::path::Path;

pub fn write_json(path: &Path, records: &[DriveRecord]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(records)?;
    std::fs::write(path, json)?;
    Ok(())
}
