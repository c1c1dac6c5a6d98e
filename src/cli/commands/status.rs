use crate::config::Config;
use crate::core;
use crate::errors::AppResult;
use crate::models::AttendanceStatus;
use crate::store;
use crate::ui::messages;
use crate::utils::time::{format_jst, format_minutes};
use chrono::{DateTime, Utc};

pub fn handle(cfg: &Config, now: DateTime<Utc>) -> AppResult<()> {
    let sessions = store::load_sessions(&cfg.data_file)?;

    match core::current_status(&sessions, &cfg.user) {
        AttendanceStatus::Off => {
            messages::info(format!("{}: off the clock.", cfg.user));
        }
        status => {
            // Status is Working or OnBreak, so an open session exists.
            let open = core::current_open_session(&sessions, &cfg.user)
                .expect("open session exists for non-off status");
            let verb = if status == AttendanceStatus::OnBreak {
                "on break"
            } else {
                "working"
            };
            messages::info(format!(
                "{}: {} since {} (worked {}, breaks {})",
                cfg.user,
                verb,
                format_jst(open.start_at),
                format_minutes(core::work_minutes(open, now)),
                format_minutes(core::break_minutes(open, now)),
            ));
        }
    }

    let period = core::current_closing_period(now);
    messages::info(format!(
        "Closing period {}: {} → {} (JST)",
        period.label,
        format_jst(period.start_at),
        format_jst(period.end_at)
    ));

    if core::is_closing_warning_day(now) {
        messages::warning(
            "Today is the 20th (JST): any session still open at midnight will be split at the closing boundary.",
        );
    }

    Ok(())
}
