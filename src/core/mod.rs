//! The attendance engine: pure, replayable functions over an in-memory
//! session list. Callers hold the authoritative list, apply one operation
//! per user action, and persist the returned list.

pub mod anomalies;
pub mod boundary;
pub mod ids;
pub mod mutations;
pub mod query;
pub mod split;

pub use anomalies::find_anomalies;
pub use boundary::{current_closing_period, is_closing_warning_day, next_closing_boundary};
pub use ids::{IdSource, SeqIds, UuidSource};
pub use mutations::{
    MutationOutcome, apply_correction, break_end, break_start, clock_in, clock_out,
    save_current_tasks, save_session_tasks,
};
pub use query::{
    break_minutes, current_open_session, current_status, is_session_in_period, work_minutes,
};
pub use split::{CLOSING_SPLIT_TASK, ensure_closing_boundary_split};
