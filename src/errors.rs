//! Unified application error type.
//! All modules (store, core, cli, export, utils) return AppError to keep the
//! error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Store-related
    // ---------------------------
    #[error("Store error: {0}")]
    Store(#[from] rusqlite::Error),

    #[error("Stored data under key '{key}' is corrupt: {source}")]
    CorruptData {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid weather: {0}")]
    InvalidWeather(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("Drive cannot end ({end}) before it starts ({start})")]
    InvalidTimeRange { start: String, end: String },

    #[error("No drive found with id '{0}'")]
    UnknownId(String),

    #[error("Id prefix '{0}' matches more than one drive")]
    AmbiguousId(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Unknown export column: {0}")]
    InvalidColumn(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
