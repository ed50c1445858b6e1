use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::SessionRecorder;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::date;
use crate::utils::formatting::format_duration;
use crate::utils::time::require_time;

/// The "Save Day" action.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Save {
        date: date_raw,
        start,
        stop,
        category,
    } = cmd
    {
        // parse everything before touching the database
        let d = date::require_date(date_raw)?;
        let start_time = require_time(start)?;
        let stop_time = require_time(stop)?;
        let category = category.as_deref().unwrap_or(&cfg.default_category);

        let mut recorder = SessionRecorder::open(&cfg.database)?;
        let replaced = recorder.get_day(&d)?.is_some();
        let entry = recorder.save_day_in(d, start_time, stop_time, category)?;

        success(format!(
            "{} {}: {} → {} ({}) [{}]",
            if replaced { "Updated" } else { "Saved" },
            entry.date_str(),
            entry.start_str(),
            entry.stop_str(),
            format_duration(entry.duration_minutes()),
            entry.category()
        ));
    }

    Ok(())
}
