use crate::cli::commands::apply;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core;
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};

pub fn handle(cmd: &Commands, cfg: &Config, now: DateTime<Utc>) -> AppResult<()> {
    if let Commands::Out { tasks } = cmd {
        return apply(cfg, |sessions, ids| {
            core::clock_out(sessions, &cfg.user, tasks, now, ids)
        });
    }

    Err(AppError::Other("unexpected command".into()))
}
