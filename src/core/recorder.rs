//! The session recorder: validate a day's start/stop pair and keep exactly
//! one row per date in the local store.

use crate::db::initialize::init_db;
use crate::db::log::ttlog_or_warn;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::{DEFAULT_CATEGORY, StudyEntry};
use crate::utils::date::date_str;
use crate::utils::formatting::format_duration;
use chrono::{NaiveDate, NaiveTime};
use rusqlite::Connection;

pub struct SessionRecorder {
    pool: DbPool,
}

impl SessionRecorder {
    /// Open the database at `path`, creating it and its schema if needed.
    pub fn open(path: &str) -> AppResult<Self> {
        Self::from_pool(DbPool::new(path)?)
    }

    pub fn in_memory() -> AppResult<Self> {
        Self::from_pool(DbPool::in_memory()?)
    }

    pub fn from_pool(pool: DbPool) -> AppResult<Self> {
        init_db(&pool.conn)?;
        Ok(Self { pool })
    }

    pub fn conn(&self) -> &Connection {
        &self.pool.conn
    }

    /// "Save Day" with the default category.
    pub fn save_day(
        &mut self,
        date: NaiveDate,
        start_time: NaiveTime,
        stop_time: NaiveTime,
    ) -> AppResult<StudyEntry> {
        self.save_day_in(date, start_time, stop_time, DEFAULT_CATEGORY)
    }

    /// Validate and store the entry for `date`, replacing any previous one.
    ///
    /// A validation failure leaves the store untouched.
    pub fn save_day_in(
        &mut self,
        date: NaiveDate,
        start_time: NaiveTime,
        stop_time: NaiveTime,
        category: &str,
    ) -> AppResult<StudyEntry> {
        let entry = StudyEntry::new(date, start_time, stop_time, category)?;

        queries::upsert_entry(&self.pool.conn, &entry)?;

        ttlog_or_warn(
            &self.pool.conn,
            "save",
            &entry.date_str(),
            &format!(
                "{}-{} ({}) {}",
                entry.start_str(),
                entry.stop_str(),
                format_duration(entry.duration_minutes()),
                entry.category()
            ),
        );

        Ok(entry)
    }

    pub fn get_day(&self, date: &NaiveDate) -> AppResult<Option<StudyEntry>> {
        queries::load_entry_by_date(&self.pool.conn, date)
    }

    /// All entries, ordered by date.
    pub fn list_days(&self) -> AppResult<Vec<StudyEntry>> {
        queries::load_all_entries(&self.pool.conn)
    }

    /// Entries between `from` and `to` inclusive, ordered by date.
    pub fn list_range(&self, from: &NaiveDate, to: &NaiveDate) -> AppResult<Vec<StudyEntry>> {
        queries::load_entries_in_range(&self.pool.conn, from, to)
    }

    /// `None` bounds mean everything.
    pub fn list_period(
        &self,
        bounds: Option<(NaiveDate, NaiveDate)>,
    ) -> AppResult<Vec<StudyEntry>> {
        match bounds {
            Some((from, to)) => self.list_range(&from, &to),
            None => self.list_days(),
        }
    }

    /// Returns false when nothing was stored for `date`.
    pub fn delete_day(&mut self, date: &NaiveDate) -> AppResult<bool> {
        let removed = queries::delete_entry_by_date(&self.pool.conn, date)? > 0;

        if removed {
            ttlog_or_warn(
                &self.pool.conn,
                "del",
                &date_str(date),
                "Deleted study entry",
            );
        }

        Ok(removed)
    }
}
