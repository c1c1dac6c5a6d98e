use crate::cli::commands::apply;
use crate::config::Config;
use crate::core;
use crate::errors::AppResult;
use crate::ui::messages;
use chrono::{DateTime, Utc};

pub fn handle(cfg: &Config, now: DateTime<Utc>) -> AppResult<()> {
    apply(cfg, |sessions, ids| {
        core::clock_in(sessions, &cfg.user, now, ids)
    })?;

    if core::is_closing_warning_day(now) {
        messages::warning(
            "Today is the 20th (JST): any session still open at midnight will be split at the closing boundary.",
        );
    }
    Ok(())
}
