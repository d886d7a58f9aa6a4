//! Writes drive records as CSV with the selected columns.

use crate::errors::AppResult;
use crate::export::model::ExportColumn;
use crate::models::drive::DriveRecord;
use csv::Writer;
use std::path::Path;

pub fn write_csv(path: &Path, records: &[DriveRecord], columns: &[ExportColumn]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(columns.iter().map(|c| c.header()))?;

    for record in records {
        wtr.write_record(columns.iter().map(|c| c.value(record)))?;
    }

    wtr.flush()?;
    Ok(())
}
