//! studylogger library root.
//! Exposes the CLI parser, the high-level run() function and the session
//! recorder used by the commands.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use ui::messages::warning;

pub use crate::core::SessionRecorder;
pub use crate::models::StudyEntry;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Save { .. } => cli::commands::save::handle(&cli.command, cfg),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Del { .. } => cli::commands::del::handle(&cli.command, cfg),
        Commands::Backup { .. } => cli::commands::backup::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Db { .. } => cli::commands::db::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // `init` rewrites the config file, so it must not depend on loading it
    if matches!(cli.command, Commands::Init) {
        return cli::commands::init::handle(&cli);
    }

    let mut cfg = config_for(&cli.command, Config::load())?;

    if let Some(custom_db) = &cli.db {
        cfg.database = Config::resolve_db_path(custom_db)
            .to_string_lossy()
            .to_string();
    }

    dispatch(&cli, &cfg)
}

/// A broken config file must not block `config`, the command that repairs it.
fn config_for(cmd: &Commands, loaded: AppResult<Config>) -> AppResult<Config> {
    match loaded {
        Err(e) if matches!(cmd, Commands::Config { .. }) => {
            warning(format!("{e}; using default settings"));
            Ok(Config::default())
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use errors::AppError;

    fn broken() -> AppResult<Config> {
        Err(AppError::ConfigLoad("bad yaml".into()))
    }

    #[test]
    fn config_command_survives_broken_file() {
        let cmd = Commands::Config {
            print_config: false,
            edit_config: true,
            editor: None,
        };
        assert_eq!(config_for(&cmd, broken()).unwrap(), Config::default());
    }

    #[test]
    fn other_commands_report_broken_file() {
        let cmd = Commands::Log { print: true };
        assert!(matches!(
            config_for(&cmd, broken()),
            Err(AppError::ConfigLoad(_))
        ));
    }
}
