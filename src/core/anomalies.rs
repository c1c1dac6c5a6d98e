//! Scan the session log for operational problems worth a supervisor's
//! attention: shifts left open, breaks left open inside them, and recent
//! boundary-forced splits that may need a correction.

use crate::models::{Anomaly, AnomalyKind, AttendanceSession};
use chrono::{DateTime, Duration, Utc};

/// Forced splits older than this are no longer actionable and stop being
/// reported. Display heuristic, not an engine invariant.
pub const RECENT_SPLIT_WINDOW_DAYS: i64 = 90;

pub fn find_anomalies(sessions: &[AttendanceSession], now: DateTime<Utc>) -> Vec<Anomaly> {
    let mut out = Vec::new();
    let window_start = now - Duration::days(RECENT_SPLIT_WINDOW_DAYS);

    for s in sessions {
        if s.is_open() {
            out.push(Anomaly {
                session_id: s.id.clone(),
                user_id: s.user_id.clone(),
                kind: AnomalyKind::OpenShift,
                message: format!(
                    "Session started {} has no clock-out",
                    s.start_at.to_rfc3339()
                ),
            });
            if s.open_break().is_some() {
                out.push(Anomaly {
                    session_id: s.id.clone(),
                    user_id: s.user_id.clone(),
                    kind: AnomalyKind::OpenBreak,
                    message: "Open session also has a break still in progress".to_string(),
                });
            }
        }

        if s.split_by_closing_boundary && s.updated_at >= window_start {
            out.push(Anomaly {
                session_id: s.id.clone(),
                user_id: s.user_id.clone(),
                kind: AnomalyKind::ClosingSplit,
                message: "Session was force-closed at a payroll closing boundary".to_string(),
            });
        }
    }

    out
}
