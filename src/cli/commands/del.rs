use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::SessionRecorder;
use crate::errors::AppResult;
use crate::ui::messages::{confirm, info, success, warning};
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { date: date_raw } = cmd {
        let d = date::require_date(date_raw)?;

        let mut recorder = SessionRecorder::open(&cfg.database)?;

        if recorder.get_day(&d)?.is_none() {
            warning(format!("No study entry recorded for {}.", d));
            return Ok(());
        }

        if !confirm(format!(
            "Delete the study entry for {}? This action is irreversible.",
            d
        )) {
            info("Operation cancelled.");
            return Ok(());
        }

        if recorder.delete_day(&d)? {
            success(format!("Study entry for {} has been deleted.", d));
        }
    }

    Ok(())
}
