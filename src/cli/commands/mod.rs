pub mod anomalies;
pub mod break_cmd;
pub mod clock_in;
pub mod clock_out;
pub mod config;
pub mod correct;
pub mod init;
pub mod list;
pub mod status;
pub mod tasks;

use crate::config::Config;
use crate::core::ids::{IdSource, UuidSource};
use crate::core::mutations::MutationOutcome;
use crate::errors::AppResult;
use crate::models::AttendanceSession;
use crate::store;
use crate::ui::messages;

/// Shared mutation pipeline: load the store, run one engine operation,
/// persist the returned list, report the outcome. Keeps the boundary-split
/// notice handling in one place instead of in every handler.
pub(crate) fn apply<F>(cfg: &Config, op: F) -> AppResult<()>
where
    F: FnOnce(&[AttendanceSession], &mut dyn IdSource) -> AppResult<MutationOutcome>,
{
    let sessions = store::load_sessions(&cfg.data_file)?;
    let mut ids = UuidSource;

    let outcome = op(&sessions, &mut ids)?;
    store::save_sessions(&cfg.data_file, &outcome.sessions)?;

    if outcome.split_occurred {
        messages::warning(
            "The open session crossed a payroll closing boundary and was split automatically.",
        );
    }
    messages::success(&outcome.notice);
    Ok(())
}
