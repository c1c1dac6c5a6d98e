use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core;
use crate::core::boundary::closing_period_of;
use crate::errors::{AppError, AppResult};
use crate::models::{AttendancePeriod, AttendanceSession};
use crate::store;
use crate::ui::messages;
use crate::utils::table::{Column, Table};
use crate::utils::time::{format_jst, format_jst_opt, format_minutes};
use chrono::{DateTime, Datelike, NaiveDate, Utc};

pub fn handle(cmd: &Commands, cfg: &Config, now: DateTime<Utc>) -> AppResult<()> {
    if let Commands::List { period, all } = cmd {
        let sessions = store::load_sessions(&cfg.data_file)?;

        let (rows, heading) = if *all {
            (sessions.iter().collect::<Vec<_>>(), "all sessions".to_string())
        } else {
            let p = resolve_period(period.as_ref(), now)?;
            let filtered = sessions
                .iter()
                .filter(|s| core::is_session_in_period(s, &p, now))
                .collect::<Vec<_>>();
            (filtered, format!("closing period {}", p.label))
        };

        if rows.is_empty() {
            messages::info(format!("No sessions in {}.", heading));
            return Ok(());
        }

        messages::info(format!("Sessions in {}:", heading));
        println!("{}", render_table(&rows, now));
        return Ok(());
    }

    Err(AppError::Other("unexpected command".into()))
}

/// `--period YYYY-MM` names the month the period closes in; the window then
/// starts on the 21st of the previous month.
fn resolve_period(label: Option<&String>, now: DateTime<Utc>) -> AppResult<AttendancePeriod> {
    match label {
        None => Ok(core::current_closing_period(now)),
        Some(p) => {
            let first = NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d")
                .map_err(|_| AppError::InvalidPeriod(p.to_string()))?;
            let (y, m) = if first.month() == 1 {
                (first.year() - 1, 12)
            } else {
                (first.year(), first.month() - 1)
            };
            Ok(closing_period_of(y, m))
        }
    }
}

fn render_table(rows: &[&AttendanceSession], now: DateTime<Utc>) -> String {
    let mut table = Table::new(vec![
        Column { header: "USER".into(), width: 8 },
        Column { header: "START (JST)".into(), width: 16 },
        Column { header: "END (JST)".into(), width: 16 },
        Column { header: "WORK".into(), width: 7 },
        Column { header: "BREAK".into(), width: 7 },
        Column { header: "FLAGS".into(), width: 5 },
        Column { header: "TASKS".into(), width: 40 },
    ]);

    for s in rows {
        let mut flags = String::new();
        if s.is_open() {
            flags.push('*');
        }
        if s.split_by_closing_boundary {
            flags.push('S');
        }
        if s.continued_from_closing_boundary {
            flags.push('C');
        }
        if !s.corrections.is_empty() {
            flags.push('!');
        }

        table.add_row(vec![
            s.user_id.clone(),
            format_jst(s.start_at),
            format_jst_opt(s.end_at),
            format_minutes(core::work_minutes(s, now)),
            format_minutes(core::break_minutes(s, now)),
            flags,
            s.tasks.join("; "),
        ]);
    }

    table.render()
}
