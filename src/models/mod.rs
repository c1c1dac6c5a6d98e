pub mod anomaly;
pub mod break_entry;
pub mod correction;
pub mod period;
pub mod session;
pub mod status;

pub use anomaly::{Anomaly, AnomalyKind};
pub use break_entry::AttendanceBreak;
pub use correction::{ActorRole, AttendanceCorrection, CorrectionPayload};
pub use period::AttendancePeriod;
pub use session::{AttendanceSession, sanitize_tasks};
pub use status::AttendanceStatus;
