//! Closing-boundary split pass.
//!
//! Time passes between CLI invocations: a user can clock in on the 20th and
//! not act again until the 22nd. A closing period must never contain a
//! session crossing its boundary, so every operation that touches the open
//! session runs this pass first. The loop handles a user who stays idle
//! across two or more boundaries.

use crate::core::boundary::next_closing_boundary;
use crate::core::ids::IdSource;
use crate::models::AttendanceSession;
use chrono::{DateTime, Duration, Utc};

/// Marker task injected into a force-closed session, at most once.
pub const CLOSING_SPLIT_TASK: &str =
    "(auto) clocked out at payroll closing boundary (21st 00:00 JST)";

/// Split the user's open session as many times as needed so that no session
/// spans a boundary that `now` has already passed. Returns the new list and
/// whether any split happened. Calling this twice with the same `now` changes
/// nothing the second time.
pub fn ensure_closing_boundary_split(
    sessions: &[AttendanceSession],
    user_id: &str,
    now: DateTime<Utc>,
    ids: &mut dyn IdSource,
) -> (Vec<AttendanceSession>, bool) {
    let mut out = sessions.to_vec();
    let mut split_occurred = false;

    loop {
        let Some(idx) = out
            .iter()
            .position(|s| s.user_id == user_id && s.is_open())
        else {
            break;
        };

        let boundary = next_closing_boundary(out[idx].start_at);
        if now < boundary {
            break;
        }

        let close_at = boundary - Duration::seconds(1);
        {
            let session = &mut out[idx];
            session.end_at = Some(close_at);
            session.split_by_closing_boundary = true;
            if let Some(b) = session.open_break_mut() {
                b.end_at = Some(close_at);
            }
            if !session.tasks.iter().any(|t| t == CLOSING_SPLIT_TASK) {
                session.tasks.push(CLOSING_SPLIT_TASK.to_string());
            }
            session.updated_at = now;
        }

        let mut continuation = AttendanceSession::open(ids.next_id(), user_id, boundary);
        continuation.continued_from_closing_boundary = true;
        continuation.created_at = now;
        continuation.updated_at = now;
        out.push(continuation);

        split_occurred = true;
    }

    (out, split_occurred)
}
