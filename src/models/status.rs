use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    Off,
    Working,
    OnBreak,
}

impl AttendanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Off => "off",
            AttendanceStatus::Working => "working",
            AttendanceStatus::OnBreak => "on_break",
        }
    }
}
