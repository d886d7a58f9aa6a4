//! High-level export logic.

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::csv::write_csv;
use crate::export::fs_utils::ensure_writable;
use crate::export::json::write_json;
use crate::export::model::{ExportColumn, parse_columns};
use crate::store::drives::DriveStore;
use crate::store::kv::KvStore;
use crate::ui::messages::{success, warning};
use std::io;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Export the drive collection.
    ///
    /// - `file`: absolute path of the output file
    /// - `columns`: CSV column selection, e.g. "Date,Length,Notes";
    ///   all columns in their fixed order when omitted. JSON always carries
    ///   the full records.
    pub fn export(
        store: &mut KvStore,
        format: ExportFormat,
        file: &str,
        columns: &Option<String>,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::from(io::Error::other(format!(
                "Output file path must be absolute: {file}"
            ))));
        }

        ensure_writable(path, force)?;

        let records = DriveStore::load_all(store)?;

        if records.is_empty() {
            warning("No drives recorded yet, nothing to export.");
            return Ok(());
        }

        match format {
            ExportFormat::Csv => {
                let cols = match columns {
                    Some(list) => parse_columns(list)?,
                    None => ExportColumn::ALL.to_vec(),
                };
                write_csv(path, &records, &cols)?;
            }
            ExportFormat::Json => {
                if columns.is_some() {
                    warning("--columns only applies to CSV export, ignoring.");
                }
                write_json(path, &records)?;
            }
        }

        success(format!(
            "Exported {} drive(s) to {}",
            records.len(),
            path.display()
        ));

        Ok(())
    }
}
