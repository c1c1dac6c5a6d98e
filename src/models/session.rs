use super::{break_entry::AttendanceBreak, correction::AttendanceCorrection};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One continuous work stint for a single user.
///
/// `end_at == None` means the session is still open; the engine guarantees at
/// most one open session per user. A session that crossed a payroll closing
/// boundary is force-closed with `split_by_closing_boundary` set, and its
/// automatically created follow-up carries `continued_from_closing_boundary`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceSession {
    pub id: String,
    pub user_id: String,
    pub start_at: DateTime<Utc>,
    pub end_at: Option<DateTime<Utc>>,
    pub breaks: Vec<AttendanceBreak>,
    pub tasks: Vec<String>,
    pub split_by_closing_boundary: bool,
    pub continued_from_closing_boundary: bool,
    pub corrections: Vec<AttendanceCorrection>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AttendanceSession {
    /// Fresh open session, as created by clock-in or by a boundary split.
    pub fn open(id: String, user_id: &str, start_at: DateTime<Utc>) -> Self {
        Self {
            id,
            user_id: user_id.to_string(),
            start_at,
            end_at: None,
            breaks: Vec::new(),
            tasks: Vec::new(),
            split_by_closing_boundary: false,
            continued_from_closing_boundary: false,
            corrections: Vec::new(),
            created_at: start_at,
            updated_at: start_at,
        }
    }

    pub fn is_open(&self) -> bool {
        self.end_at.is_none()
    }

    /// The break currently in progress, if any.
    pub fn open_break(&self) -> Option<&AttendanceBreak> {
        self.breaks.iter().find(|b| b.end_at.is_none())
    }

    pub fn open_break_mut(&mut self) -> Option<&mut AttendanceBreak> {
        self.breaks.iter_mut().find(|b| b.end_at.is_none())
    }
}

/// Trim task lines and drop the empty ones.
pub fn sanitize_tasks(tasks: &[String]) -> Vec<String> {
    tasks
        .iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect()
}
