//! JSON session store.
//!
//! The persisted representation is a JSON array of camelCase session objects
//! with RFC3339 timestamps. Loading is defensive: each record is decoded
//! independently and malformed or partial records are dropped instead of
//! failing the whole load; missing list fields default to empty and missing
//! `createdAt`/`updatedAt` default to `startAt`.

use crate::errors::{AppError, AppResult};
use crate::models::{
    AttendanceBreak, AttendanceCorrection, AttendanceSession,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Raw shape used for tolerant decoding. A record missing `id`, `userId` or
/// a parseable `startAt` fails deserialization as a whole and is dropped.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredSession {
    id: String,
    user_id: String,
    start_at: DateTime<Utc>,
    #[serde(default)]
    end_at: Option<DateTime<Utc>>,
    #[serde(default)]
    breaks: Vec<AttendanceBreak>,
    #[serde(default)]
    tasks: Vec<String>,
    #[serde(default)]
    split_by_closing_boundary: bool,
    #[serde(default)]
    continued_from_closing_boundary: bool,
    #[serde(default)]
    corrections: Vec<AttendanceCorrection>,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    updated_at: Option<DateTime<Utc>>,
}

impl From<StoredSession> for AttendanceSession {
    fn from(raw: StoredSession) -> Self {
        AttendanceSession {
            created_at: raw.created_at.unwrap_or(raw.start_at),
            updated_at: raw.updated_at.unwrap_or(raw.start_at),
            id: raw.id,
            user_id: raw.user_id,
            start_at: raw.start_at,
            end_at: raw.end_at,
            breaks: raw.breaks,
            tasks: raw.tasks,
            split_by_closing_boundary: raw.split_by_closing_boundary,
            continued_from_closing_boundary: raw.continued_from_closing_boundary,
            corrections: raw.corrections,
        }
    }
}

/// Decode a JSON document into sessions, dropping malformed records.
pub fn parse_sessions(json: &str) -> AppResult<Vec<AttendanceSession>> {
    let doc: Value = serde_json::from_str(json)
        .map_err(|e| AppError::Store(format!("not valid JSON: {e}")))?;
    let Value::Array(items) = doc else {
        return Err(AppError::Store("expected a JSON array of sessions".into()));
    };

    Ok(items
        .into_iter()
        .filter_map(|v| serde_json::from_value::<StoredSession>(v).ok())
        .map(AttendanceSession::from)
        .collect())
}

pub fn serialize_sessions(sessions: &[AttendanceSession]) -> AppResult<String> {
    serde_json::to_string_pretty(sessions).map_err(|e| AppError::Store(e.to_string()))
}

/// Load the session list from `path`. A missing file is an empty list.
pub fn load_sessions(path: &str) -> AppResult<Vec<AttendanceSession>> {
    let p = Path::new(path);
    if !p.exists() {
        return Ok(Vec::new());
    }
    let content = fs::read_to_string(p)?;
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }
    parse_sessions(&content)
}

/// Persist the session list to `path`, creating parent dirs on demand.
pub fn save_sessions(path: &str, sessions: &[AttendanceSession]) -> AppResult<()> {
    let p = Path::new(path);
    if let Some(dir) = p.parent()
        && !dir.as_os_str().is_empty()
    {
        fs::create_dir_all(dir)?;
    }
    fs::write(p, serialize_sessions(sessions)?)?;
    Ok(())
}
