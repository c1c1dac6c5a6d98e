//! kintai library root.
//! Exposes the CLI parser, the high-level run() function, and the pure
//! attendance engine modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use chrono::Utc;
use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    // The engine never reads the wall clock itself; the instant every
    // operation is evaluated at is resolved once, here.
    let now = match &cli.at {
        Some(s) => utils::time::parse_timestamp(s)?,
        None => Utc::now(),
    };

    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::In => cli::commands::clock_in::handle(cfg, now),
        Commands::Break { .. } => cli::commands::break_cmd::handle(&cli.command, cfg, now),
        Commands::Out { .. } => cli::commands::clock_out::handle(&cli.command, cfg, now),
        Commands::Tasks { .. } => cli::commands::tasks::handle(&cli.command, cfg, now),
        Commands::Correct { .. } => cli::commands::correct::handle(&cli.command, cfg, now),
        Commands::Status => cli::commands::status::handle(cfg, now),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg, now),
        Commands::Anomalies => cli::commands::anomalies::handle(cfg, now),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1. parse CLI
    let cli = Cli::parse();

    // 2. load config once
    let mut cfg = Config::load();

    // 3. apply command-line overrides before dispatching
    if let Some(custom_data) = &cli.data {
        cfg.data_file = custom_data.clone();
    }
    cfg.data_file = utils::path::expand_tilde(&cfg.data_file)
        .to_string_lossy()
        .to_string();
    if let Some(user) = &cli.user {
        cfg.user = user.clone();
    }

    // 4. hand everything to the dispatcher
    dispatch(&cli, &cfg)
}
