use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A break inside a session. `end_at == None` means still on break;
/// at most one open break exists inside the open session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceBreak {
    pub id: String,
    pub start_at: DateTime<Utc>,
    pub end_at: Option<DateTime<Utc>>,
}

impl AttendanceBreak {
    pub fn open(id: String, start_at: DateTime<Utc>) -> Self {
        Self {
            id,
            start_at,
            end_at: None,
        }
    }
}
