//! Unified application error type.
//! Loader, config and the interactive session all return AppError so that
//! main() has a single place to report failures.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Input stream closed")]
    InputClosed,

    // ---------------------------
    // Data source errors
    // ---------------------------
    #[error("Unknown source: no dataset is mapped to city '{0}'")]
    UnknownSource(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing column '{0}' in data source")]
    MissingColumn(String),

    #[error("Invalid timestamp in column '{column}': {value}")]
    InvalidTimestamp { column: String, value: String },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),
}

pub type AppResult<T> = Result<T, AppError>;
