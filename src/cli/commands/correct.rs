use crate::cli::commands::apply;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core;
use crate::errors::{AppError, AppResult};
use crate::models::{ActorRole, CorrectionPayload};
use crate::utils::time::{parse_optional_timestamp, parse_timestamp};
use chrono::{DateTime, Utc};

pub fn handle(cmd: &Commands, cfg: &Config, now: DateTime<Utc>) -> AppResult<()> {
    if let Commands::Correct {
        session,
        start,
        end,
        message,
        actor,
        role,
    } = cmd
    {
        // Roles other than reviewer/admin may not correct sessions.
        let actor_role = ActorRole::from_code(role).ok_or(AppError::Forbidden)?;

        let payload = CorrectionPayload {
            start_at: parse_timestamp(start)?,
            end_at: parse_optional_timestamp(end.as_ref())?,
            message: message.clone(),
            actor_id: actor.clone(),
            actor_role,
        };

        return apply(cfg, |sessions, _ids| {
            core::apply_correction(sessions, session, &payload, now)
        });
    }

    Err(AppError::Other("unexpected command".into()))
}
