use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::store;
use crate::ui::messages;
use std::fs;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        if *print_config {
            let path = Config::config_file();
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                println!("{}", content);
            } else {
                messages::warning("No configuration file found; using defaults.");
                println!("{}", serde_yaml::to_string(cfg).unwrap_or_default());
            }
            return Ok(());
        }

        if *check {
            let sessions = store::load_sessions(&cfg.data_file)?;
            messages::success(format!(
                "Session store OK: {} ({} sessions)",
                cfg.data_file,
                sessions.len()
            ));
            return Ok(());
        }

        messages::info("Nothing to do: specify --print or --check.");
        return Ok(());
    }

    Err(AppError::Other("unexpected command".into()))
}
