//! The mutation engine: pure functions over the session list.
//!
//! Every operation takes the caller's current list by reference, never
//! mutates it, and returns either a business error or a `MutationOutcome`
//! with a brand-new list. A failed call provably leaves the caller's
//! retained list untouched. Successful results are re-sorted descending by
//! start time (display convenience, not a semantic ordering).

use crate::core::ids::IdSource;
use crate::core::split::ensure_closing_boundary_split;
use crate::errors::{AppError, AppResult};
use crate::models::{
    AttendanceBreak, AttendanceCorrection, AttendanceSession, CorrectionPayload, sanitize_tasks,
};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct MutationOutcome {
    pub sessions: Vec<AttendanceSession>,
    pub notice: String,
    /// True when the closing-boundary pass split a session on the way in;
    /// callers surface a distinct warning in that case.
    pub split_occurred: bool,
}

fn sort_sessions(sessions: &mut [AttendanceSession]) {
    sessions.sort_by(|a, b| b.start_at.cmp(&a.start_at));
}

fn open_session_index(sessions: &[AttendanceSession], user_id: &str) -> Option<usize> {
    sessions
        .iter()
        .position(|s| s.user_id == user_id && s.is_open())
}

/// Clock in: fails if the user already has an open session.
pub fn clock_in(
    sessions: &[AttendanceSession],
    user_id: &str,
    now: DateTime<Utc>,
    ids: &mut dyn IdSource,
) -> AppResult<MutationOutcome> {
    if open_session_index(sessions, user_id).is_some() {
        return Err(AppError::AlreadyWorking);
    }

    let mut out = sessions.to_vec();
    out.push(AttendanceSession::open(ids.next_id(), user_id, now));
    sort_sessions(&mut out);

    Ok(MutationOutcome {
        sessions: out,
        notice: "Clocked in.".to_string(),
        split_occurred: false,
    })
}

/// Start a break on the open session.
pub fn break_start(
    sessions: &[AttendanceSession],
    user_id: &str,
    now: DateTime<Utc>,
    ids: &mut dyn IdSource,
) -> AppResult<MutationOutcome> {
    let (mut out, split) = ensure_closing_boundary_split(sessions, user_id, now, ids);

    let idx = open_session_index(&out, user_id).ok_or(AppError::NotWorking)?;
    if out[idx].open_break().is_some() {
        return Err(AppError::AlreadyOnBreak);
    }

    out[idx].breaks.push(AttendanceBreak::open(ids.next_id(), now));
    out[idx].updated_at = now;
    sort_sessions(&mut out);

    Ok(MutationOutcome {
        sessions: out,
        notice: "Break started.".to_string(),
        split_occurred: split,
    })
}

/// End the break in progress on the open session.
pub fn break_end(
    sessions: &[AttendanceSession],
    user_id: &str,
    now: DateTime<Utc>,
    ids: &mut dyn IdSource,
) -> AppResult<MutationOutcome> {
    let (mut out, split) = ensure_closing_boundary_split(sessions, user_id, now, ids);

    let idx = open_session_index(&out, user_id).ok_or(AppError::NotWorking)?;
    let b = out[idx].open_break_mut().ok_or(AppError::NotOnBreak)?;
    b.end_at = Some(now);
    out[idx].updated_at = now;
    sort_sessions(&mut out);

    Ok(MutationOutcome {
        sessions: out,
        notice: "Break ended.".to_string(),
        split_occurred: split,
    })
}

/// Clock out with the day's task lines. A session cannot be closed without
/// at least one non-empty task; an open break is closed at the same instant.
pub fn clock_out(
    sessions: &[AttendanceSession],
    user_id: &str,
    tasks: &[String],
    now: DateTime<Utc>,
    ids: &mut dyn IdSource,
) -> AppResult<MutationOutcome> {
    let (mut out, split) = ensure_closing_boundary_split(sessions, user_id, now, ids);

    let idx = open_session_index(&out, user_id).ok_or(AppError::NotWorking)?;
    let clean = sanitize_tasks(tasks);
    if clean.is_empty() {
        return Err(AppError::MissingTasks);
    }

    let mut closed_break = false;
    let session = &mut out[idx];
    if let Some(b) = session.open_break_mut() {
        b.end_at = Some(now);
        closed_break = true;
    }
    session.tasks = clean;
    session.end_at = Some(now);
    session.updated_at = now;
    sort_sessions(&mut out);

    let notice = if closed_break {
        "Break ended and clocked out.".to_string()
    } else {
        "Clocked out.".to_string()
    };

    Ok(MutationOutcome {
        sessions: out,
        notice,
        split_occurred: split,
    })
}

/// Replace the open session's task list. Saving an identical list is a
/// no-op in effect (the session's `updated_at` is left alone).
pub fn save_current_tasks(
    sessions: &[AttendanceSession],
    user_id: &str,
    tasks: &[String],
    now: DateTime<Utc>,
    ids: &mut dyn IdSource,
) -> AppResult<MutationOutcome> {
    let (mut out, split) = ensure_closing_boundary_split(sessions, user_id, now, ids);

    let idx = open_session_index(&out, user_id).ok_or(AppError::NotWorking)?;
    let clean = sanitize_tasks(tasks);
    if out[idx].tasks != clean {
        out[idx].tasks = clean;
        out[idx].updated_at = now;
    }
    sort_sessions(&mut out);

    Ok(MutationOutcome {
        sessions: out,
        notice: "Tasks saved.".to_string(),
        split_occurred: split,
    })
}

/// Replace the tasks of a specific session owned by `user_id`, open or
/// closed. No boundary pass: the target is not necessarily the open session.
pub fn save_session_tasks(
    sessions: &[AttendanceSession],
    session_id: &str,
    user_id: &str,
    tasks: &[String],
    now: DateTime<Utc>,
) -> AppResult<MutationOutcome> {
    let mut out = sessions.to_vec();
    let idx = out
        .iter()
        .position(|s| s.id == session_id && s.user_id == user_id)
        .ok_or_else(|| AppError::NotFound(session_id.to_string()))?;

    let clean = sanitize_tasks(tasks);
    if out[idx].tasks != clean {
        out[idx].tasks = clean;
        out[idx].updated_at = now;
    }
    sort_sessions(&mut out);

    Ok(MutationOutcome {
        sessions: out,
        notice: "Tasks saved.".to_string(),
        split_occurred: false,
    })
}

/// Supervisor correction of a session's start/end. Records the pre-edit
/// values in an audit entry (newest first), overwrites the interval, and
/// clamps every break into it: a correction may shrink the interval a break
/// was recorded in, so start is pulled up, end is pulled down, and a break
/// that ends up inverted collapses to zero length. An open break is closed at
/// the new end when the correction closes the session, otherwise the break
/// containment invariant would be violated. A correction without an end
/// reopens the session; that is refused while the user has another open
/// session, keeping the one-open-session rule intact.
pub fn apply_correction(
    sessions: &[AttendanceSession],
    session_id: &str,
    payload: &CorrectionPayload,
    now: DateTime<Utc>,
) -> AppResult<MutationOutcome> {
    // ActorRole only has reviewer/admin variants, so role gating is done by
    // the type; the CLI rejects unknown role codes with Forbidden.
    if payload.message.trim().is_empty() {
        return Err(AppError::Validation("message must not be blank".into()));
    }
    if let Some(end) = payload.end_at
        && end <= payload.start_at
    {
        return Err(AppError::Validation("end must be after start".into()));
    }

    let mut out = sessions.to_vec();
    let idx = out
        .iter()
        .position(|s| s.id == session_id)
        .ok_or_else(|| AppError::NotFound(session_id.to_string()))?;

    // A correction with no end reopens the session; refuse it when the user
    // already has a different open session, or two sessions would be open at
    // once for the same user.
    if payload.end_at.is_none() {
        let user_id = out[idx].user_id.clone();
        let other_open = out
            .iter()
            .any(|s| s.user_id == user_id && s.is_open() && s.id != session_id);
        if other_open {
            return Err(AppError::Validation(
                "cannot leave this session open: the user already has an open session".into(),
            ));
        }
    }

    let session = &mut out[idx];
    let correction = AttendanceCorrection {
        actor_id: payload.actor_id.clone(),
        actor_role: payload.actor_role,
        message: payload.message.trim().to_string(),
        before_start_at: session.start_at,
        before_end_at: session.end_at,
        after_start_at: payload.start_at,
        after_end_at: payload.end_at,
        created_at: now,
    };
    session.corrections.insert(0, correction);

    session.start_at = payload.start_at;
    session.end_at = payload.end_at;

    for b in &mut session.breaks {
        if b.start_at < payload.start_at {
            b.start_at = payload.start_at;
        }
        if let Some(new_end) = payload.end_at {
            // A break recorded entirely after the new end collapses at the
            // new end itself, so it stays inside the corrected interval.
            if b.start_at > new_end {
                b.start_at = new_end;
            }
            match b.end_at {
                Some(be) if be > new_end => b.end_at = Some(new_end),
                None => b.end_at = Some(new_end),
                _ => {}
            }
        }
        if let Some(be) = b.end_at
            && be < b.start_at
        {
            b.end_at = Some(b.start_at);
        }
    }
    session.updated_at = now;
    sort_sessions(&mut out);

    Ok(MutationOutcome {
        sessions: out,
        notice: "Session corrected.".to_string(),
        split_occurred: false,
    })
}
