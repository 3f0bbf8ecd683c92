//! Timestamp parsing for trip data and elapsed-time formatting for reports.

use crate::errors::{AppError, AppResult};
use chrono::NaiveDateTime;
use std::time::Duration;

const TIMESTAMP_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M"];

pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}

/// Parse a timestamp cell, naming the column in the error.
pub fn parse_column_timestamp(column: &str, value: &str) -> AppResult<NaiveDateTime> {
    parse_timestamp(value).ok_or_else(|| AppError::InvalidTimestamp {
        column: column.to_string(),
        value: value.to_string(),
    })
}

pub fn format_elapsed(elapsed: Duration) -> String {
    format!("{:.6}", elapsed.as_secs_f64())
}
