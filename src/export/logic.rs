use crate::core::SessionRecorder;
use crate::db::log::ttlog_or_warn;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::EntryExport;
use crate::ui::messages::warning;
use crate::utils::date::parse_period;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Export study entries.
    ///
    /// - `file`: absolute path of the output file
    /// - `range`: `None`, `"all"` or a period such as `YYYY`, `YYYY-MM`,
    ///   `YYYY-MM-DD` or `A:B` ranges of those
    ///
    /// Returns the number of exported rows; nothing is written when the
    /// range holds no entries.
    pub fn export(
        recorder: &SessionRecorder,
        format: ExportFormat,
        file: &str,
        range: Option<&str>,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        let bounds = match range {
            Some(r) => parse_period(r)?,
            None => None,
        };

        let rows: Vec<EntryExport> = recorder
            .list_period(bounds)?
            .iter()
            .map(EntryExport::from)
            .collect();

        if rows.is_empty() {
            warning("No study entries found for selected range.");
            return Ok(0);
        }

        ensure_writable(path, force)?;

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }

        ttlog_or_warn(
            recorder.conn(),
            "export",
            &path.to_string_lossy(),
            &format!("Exported {} entries as {}", rows.len(), format.as_str()),
        );

        Ok(rows.len())
    }
}
