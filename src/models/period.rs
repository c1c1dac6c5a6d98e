use chrono::{DateTime, Utc};
use serde::Serialize;

/// A payroll closing window: 21st 00:00 JST of one month through
/// 20th 23:59:59 JST of the next. The label is the JST `YYYY-MM` of the
/// month the period closes in, which is how payroll refers to it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendancePeriod {
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
    pub label: String,
}
