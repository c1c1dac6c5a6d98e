use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Roles allowed to issue corrections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActorRole {
    Reviewer,
    Admin,
}

impl ActorRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActorRole::Reviewer => "reviewer",
            ActorRole::Admin => "admin",
        }
    }

    /// Helper: parse a role code from the CLI (case-insensitive).
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_lowercase().as_str() {
            "reviewer" => Some(ActorRole::Reviewer),
            "admin" => Some(ActorRole::Admin),
            _ => None,
        }
    }
}

/// Immutable audit record of a supervisor edit. Appended newest-first to the
/// session's `corrections` list and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceCorrection {
    pub actor_id: String,
    pub actor_role: ActorRole,
    pub message: String,
    pub before_start_at: DateTime<Utc>,
    pub before_end_at: Option<DateTime<Utc>>,
    pub after_start_at: DateTime<Utc>,
    pub after_end_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Input to `apply_correction`. `start_at` is mandatory by construction; the
/// CLI layer reports a missing `--start` before the engine is reached.
#[derive(Debug, Clone)]
pub struct CorrectionPayload {
    pub start_at: DateTime<Utc>,
    pub end_at: Option<DateTime<Utc>>,
    pub message: String,
    pub actor_id: String,
    pub actor_role: ActorRole,
}
