use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::SessionRecorder;
use crate::db::log::ttlog_or_warn;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Handle the `init` command
///
/// This initializes:
///  - the data directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite database and its schema
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.as_deref(), cli.test)?;

    println!("⚙️  Initializing studylogger…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Database   : {}", &cfg.database);

    let recorder = SessionRecorder::open(&cfg.database)?;

    success(format!("Database initialized at {}", &cfg.database));

    ttlog_or_warn(
        recorder.conn(),
        "init",
        "Database initialized",
        &format!("Database initialized at {}", &cfg.database),
    );

    Ok(())
}
