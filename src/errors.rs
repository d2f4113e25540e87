//! Unified application error type.
//! The core (merge, idle, grouping, layout) and the outer layers (loader,
//! config, export, cli) all return AppError so the binary has a single place
//! to report failures.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / serialization
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid date-time format: {0}")]
    InvalidDateTime(String),

    #[error("Invalid weekday index: {0} (expected 0..=6)")]
    InvalidWeekday(u8),

    #[error("Unsupported input format: {0}")]
    InvalidInputFormat(String),

    // ---------------------------
    // Schedule engine errors
    // ---------------------------
    #[error("Cannot merge an empty list of ranges")]
    EmptyInput,

    #[error("Invalid range (start must be before end): {0}")]
    InvalidRange(String),

    #[error("Range crosses a day boundary, split it first: {0}")]
    CrossesDayBoundary(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
