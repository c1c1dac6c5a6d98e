use crate::cli::commands::apply;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core;
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};

pub fn handle(cmd: &Commands, cfg: &Config, now: DateTime<Utc>) -> AppResult<()> {
    if let Commands::Tasks { tasks, session } = cmd {
        return apply(cfg, |sessions, ids| match session {
            Some(id) => core::save_session_tasks(sessions, id, &cfg.user, tasks, now),
            None => core::save_current_tasks(sessions, &cfg.user, tasks, now, ids),
        });
    }

    Err(AppError::Other("unexpected command".into()))
}
