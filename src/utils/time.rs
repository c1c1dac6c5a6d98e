//! Time utilities: parsing RFC3339 input, formatting minutes and instants
//! for terminal output.

use crate::core::boundary::jst;
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};

/// Parse an RFC3339 timestamp from CLI input.
pub fn parse_timestamp(s: &str) -> AppResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| AppError::InvalidTimestamp(s.to_string()))
}

pub fn parse_optional_timestamp(input: Option<&String>) -> AppResult<Option<DateTime<Utc>>> {
    if let Some(s) = input {
        Ok(Some(parse_timestamp(s)?))
    } else {
        Ok(None)
    }
}

/// 485 → "08h 05m"
pub fn format_minutes(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.abs();
    format!("{}{:02}h {:02}m", sign, m / 60, m % 60)
}

/// Render an instant in JST for display ("2026-01-20 23:59").
pub fn format_jst(dt: DateTime<Utc>) -> String {
    dt.with_timezone(&jst()).format("%Y-%m-%d %H:%M").to_string()
}

pub fn format_jst_opt(dt: Option<DateTime<Utc>>) -> String {
    match dt {
        Some(v) => format_jst(v),
        None => "--:--".to_string(),
    }
}
