use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnomalyKind {
    OpenShift,
    OpenBreak,
    ClosingSplit,
}

impl AnomalyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnomalyKind::OpenShift => "open_shift",
            AnomalyKind::OpenBreak => "open_break",
            AnomalyKind::ClosingSplit => "closing_split",
        }
    }
}

/// An operational problem detected in the session log.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Anomaly {
    pub session_id: String,
    pub user_id: String,
    pub kind: AnomalyKind,
    pub message: String,
}
