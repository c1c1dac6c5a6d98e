//! Pure read helpers over the session list: current status, duration math,
//! period membership.

use crate::models::{AttendancePeriod, AttendanceSession, AttendanceStatus};
use chrono::{DateTime, Utc};

pub fn current_open_session<'a>(
    sessions: &'a [AttendanceSession],
    user_id: &str,
) -> Option<&'a AttendanceSession> {
    sessions.iter().find(|s| s.user_id == user_id && s.is_open())
}

pub fn current_status(sessions: &[AttendanceSession], user_id: &str) -> AttendanceStatus {
    match current_open_session(sessions, user_id) {
        None => AttendanceStatus::Off,
        Some(s) if s.open_break().is_some() => AttendanceStatus::OnBreak,
        Some(_) => AttendanceStatus::Working,
    }
}

/// Total break minutes: sum of (end ?? now) - start, floored to minutes.
pub fn break_minutes(session: &AttendanceSession, now: DateTime<Utc>) -> i64 {
    let secs: i64 = session
        .breaks
        .iter()
        .map(|b| (b.end_at.unwrap_or(now) - b.start_at).num_seconds().max(0))
        .sum();
    secs / 60
}

/// Worked minutes: floored span minutes minus break minutes, never negative.
pub fn work_minutes(session: &AttendanceSession, now: DateTime<Utc>) -> i64 {
    let span = (session.end_at.unwrap_or(now) - session.start_at)
        .num_seconds()
        .max(0)
        / 60;
    (span - break_minutes(session, now)).max(0)
}

/// Does the session's `[start, end ?? now]` interval intersect the period?
/// A session spanning a boundary belongs to both adjacent periods.
pub fn is_session_in_period(
    session: &AttendanceSession,
    period: &AttendancePeriod,
    now: DateTime<Utc>,
) -> bool {
    let end = session.end_at.unwrap_or(now);
    session.start_at <= period.end_at && end >= period.start_at
}
