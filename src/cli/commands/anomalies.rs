use crate::config::Config;
use crate::core;
use crate::errors::AppResult;
use crate::store;
use crate::ui::messages;
use chrono::{DateTime, Utc};

pub fn handle(cfg: &Config, now: DateTime<Utc>) -> AppResult<()> {
    let sessions = store::load_sessions(&cfg.data_file)?;
    let anomalies = core::find_anomalies(&sessions, now);

    if anomalies.is_empty() {
        messages::success("No anomalies found.");
        return Ok(());
    }

    for a in &anomalies {
        messages::warning(format!(
            "[{}] user={} session={}: {}",
            a.kind.as_str(),
            a.user_id,
            a.session_id,
            a.message
        ));
    }
    messages::info(format!("{} anomalies found.", anomalies.len()));
    Ok(())
}
