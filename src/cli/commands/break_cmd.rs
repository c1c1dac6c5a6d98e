use crate::cli::commands::apply;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core;
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};

pub fn handle(cmd: &Commands, cfg: &Config, now: DateTime<Utc>) -> AppResult<()> {
    if let Commands::Break { end } = cmd {
        return apply(cfg, |sessions, ids| {
            if *end {
                core::break_end(sessions, &cfg.user, now, ids)
            } else {
                core::break_start(sessions, &cfg.user, now, ids)
            }
        });
    }

    Err(AppError::Other("unexpected command".into()))
}
