use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::SessionRecorder;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        force,
    } = cmd
    {
        let recorder = SessionRecorder::open(&cfg.database)?;
        ExportLogic::export(&recorder, *format, file, range.as_deref(), *force)?;
    }
    Ok(())
}
