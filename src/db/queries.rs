use crate::errors::{AppError, AppResult};
use crate::models::StudyEntry;
use crate::utils::date::{DATE_FORMAT, date_str};
use crate::utils::time::TIME_FORMAT;
use chrono::{Local, NaiveDate, NaiveTime};
use rusqlite::types::Type;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const SELECT_COLUMNS: &str = "SELECT date, start_time, stop_time, category FROM study_days";

fn conversion_error(err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(0, Type::Text, Box::new(err))
}

pub fn map_row(row: &Row) -> Result<StudyEntry> {
    let date_raw: String = row.get("date")?;
    let start_raw: String = row.get("start_time")?;
    let stop_raw: String = row.get("stop_time")?;
    let category: String = row.get("category")?;

    let date = NaiveDate::parse_from_str(&date_raw, DATE_FORMAT)
        .map_err(|_| conversion_error(AppError::InvalidDate(date_raw.clone())))?;
    let start = NaiveTime::parse_from_str(&start_raw, TIME_FORMAT)
        .map_err(|_| conversion_error(AppError::InvalidTime(start_raw.clone())))?;
    let stop = NaiveTime::parse_from_str(&stop_raw, TIME_FORMAT)
        .map_err(|_| conversion_error(AppError::InvalidTime(stop_raw.clone())))?;

    StudyEntry::new(date, start, stop, &category).map_err(conversion_error)
}

/// Insert the entry, or overwrite the row already stored for its date.
pub fn upsert_entry(conn: &Connection, entry: &StudyEntry) -> AppResult<()> {
    conn.execute(
        "INSERT INTO study_days (date, start_time, stop_time, category, duration_minutes, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)
         ON CONFLICT(date) DO UPDATE SET
             start_time       = excluded.start_time,
             stop_time        = excluded.stop_time,
             category         = excluded.category,
             duration_minutes = excluded.duration_minutes,
             updated_at       = excluded.updated_at",
        params![
            entry.date_str(),
            entry.start_str(),
            entry.stop_str(),
            entry.category(),
            entry.duration_minutes(),
            Local::now().to_rfc3339(),
        ],
    )?;
    Ok(())
}

pub fn load_entry_by_date(conn: &Connection, date: &NaiveDate) -> AppResult<Option<StudyEntry>> {
    let mut stmt = conn.prepare_cached(&format!("{SELECT_COLUMNS} WHERE date = ?1"))?;
    let entry = stmt.query_row([date_str(date)], map_row).optional()?;
    Ok(entry)
}

pub fn load_all_entries(conn: &Connection) -> AppResult<Vec<StudyEntry>> {
    let mut stmt = conn.prepare_cached(&format!("{SELECT_COLUMNS} ORDER BY date ASC"))?;
    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Entries with `from <= date <= to`, ordered by date.
pub fn load_entries_in_range(
    conn: &Connection,
    from: &NaiveDate,
    to: &NaiveDate,
) -> AppResult<Vec<StudyEntry>> {
    let mut stmt = conn.prepare_cached(&format!(
        "{SELECT_COLUMNS} WHERE date BETWEEN ?1 AND ?2 ORDER BY date ASC"
    ))?;
    let rows = stmt.query_map(params![date_str(from), date_str(to)], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Returns the number of rows removed (0 or 1).
pub fn delete_entry_by_date(conn: &Connection, date: &NaiveDate) -> AppResult<usize> {
    let n = conn.execute("DELETE FROM study_days WHERE date = ?1", [date_str(date)])?;
    Ok(n)
}

pub fn count_entries(conn: &Connection) -> Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM study_days", [], |row| row.get(0))
}
