use crate::errors::{AppError, AppResult};
use crate::models::StudyEntry;
use crate::ui::messages::{success, warning};
use crate::utils::date::parse_date;
use crate::utils::time::parse_time;
use chrono::NaiveDate;
use rusqlite::{Connection, OptionalExtension, params};
use std::collections::BTreeMap;

const LEGACY_IMPORT_VERSION: &str = "20240501_0001_import_study_logs";

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )
}

fn table_exists(conn: &Connection, name: &str) -> rusqlite::Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// One row per date; the primary key enforces it.
fn create_study_days_table(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS study_days (
            date             TEXT PRIMARY KEY,
            start_time       TEXT NOT NULL,
            stop_time        TEXT NOT NULL,
            category         TEXT NOT NULL DEFAULT 'Other',
            duration_minutes INTEGER NOT NULL CHECK(duration_minutes > 0),
            updated_at       TEXT NOT NULL,
            CHECK(stop_time > start_time)
        );
        "#,
    )
}

/// Path of the main database file, empty for in-memory connections.
fn main_db_path(conn: &Connection) -> String {
    conn.query_row("PRAGMA database_list;", [], |row| row.get::<_, String>(2))
        .unwrap_or_default()
}

fn backup_before_migration(db_path: &str) -> AppResult<()> {
    use chrono::Local;
    use std::fs::{self, File};
    use std::io::Write;
    use zip::CompressionMethod;
    use zip::ZipWriter;
    use zip::write::FileOptions;

    let backup_name = format!(
        "{}-backup_db_pre_study_days.zip",
        Local::now().format("%Y%m%d_%H%M%S")
    );

    let db = std::path::Path::new(db_path);
    let backup_path = db
        .parent()
        .map(|p| p.join(&backup_name))
        .unwrap_or_else(|| backup_name.clone().into());

    let file = File::create(&backup_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(CompressionMethod::Deflated);

    zip.start_file("database.sqlite", options)
        .map_err(|e| AppError::Migration(format!("Backup failed (start_file): {e}")))?;

    let db_content = fs::read(db)?;
    zip.write_all(&db_content)?;

    zip.finish()
        .map_err(|e| AppError::Migration(format!("Backup failed (finish): {e}")))?;

    success(format!("📦 Backup created: {}", backup_path.display()));
    Ok(())
}

/// Rows of the old multi-row `study_logs` table, reduced to one per date.
///
/// Rows are visited in insertion order so a later save for the same date
/// wins. Rows that cannot form a valid entry (bad text, overnight or empty
/// span) are skipped and counted.
fn collect_legacy_entries(
    conn: &Connection,
) -> rusqlite::Result<(BTreeMap<NaiveDate, StudyEntry>, usize)> {
    let mut stmt = conn.prepare(
        "SELECT study_date, start_time, end_time, category
         FROM study_logs
         ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, String>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
            row.get::<_, Option<String>>(3)?,
        ))
    })?;

    let mut latest = BTreeMap::new();
    let mut skipped = 0;

    for r in rows {
        let (date, start, stop, category) = r?;
        let entry = match (parse_date(&date), parse_time(&start), parse_time(&stop)) {
            (Some(d), Some(s), Some(e)) => {
                StudyEntry::new(d, s, e, category.as_deref().unwrap_or("")).ok()
            }
            _ => None,
        };

        match entry {
            Some(e) => {
                latest.insert(e.date(), e);
            }
            None => skipped += 1,
        }
    }

    Ok((latest, skipped))
}

fn import_legacy_study_logs(conn: &Connection) -> AppResult<()> {
    let db_path = main_db_path(conn);
    if db_path.is_empty() {
        warning("Could not determine DB path — backup skipped.");
    } else {
        warning("Legacy study_logs table detected — creating safety backup before migration...");
        backup_before_migration(&db_path)?;
    }

    let (entries, skipped) = collect_legacy_entries(conn)?;
    let now = chrono::Local::now().to_rfc3339();

    let tx = conn.unchecked_transaction()?;
    let mut imported = 0;
    {
        // Rows already present in study_days are newer than the legacy table.
        let mut insert = tx.prepare(
            "INSERT INTO study_days (date, start_time, stop_time, category, duration_minutes, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)
             ON CONFLICT(date) DO NOTHING",
        )?;
        for e in entries.values() {
            imported += insert.execute(params![
                e.date_str(),
                e.start_str(),
                e.stop_str(),
                e.category(),
                e.duration_minutes(),
                now,
            ])?;
        }
    }

    tx.execute_batch("DROP TABLE study_logs;")?;
    tx.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, 'migration_applied', ?2, ?3)",
        params![
            now,
            LEGACY_IMPORT_VERSION,
            format!("Imported {imported} day(s) from study_logs, skipped {skipped} row(s)"),
        ],
    )?;
    tx.commit()?;

    success(format!(
        "Migration applied: {} → imported {} day(s)",
        LEGACY_IMPORT_VERSION, imported
    ));
    if skipped > 0 {
        warning(format!(
            "{skipped} legacy row(s) skipped (invalid times or overnight span)"
        ));
    }

    Ok(())
}

/// Public entry point: run all pending migrations. Safe to call on every open.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    ensure_log_table(conn)?;

    if !table_exists(conn, "study_days")? {
        create_study_days_table(conn)?;
        success("Created study_days table.");
    }

    if table_exists(conn, "study_logs")? {
        import_legacy_study_logs(conn)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn legacy_conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(
            r#"
            CREATE TABLE study_logs (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                study_date TEXT NOT NULL,
                start_time TEXT NOT NULL,
                end_time TEXT NOT NULL,
                category TEXT NOT NULL,
                duration_minutes INTEGER NOT NULL,
                created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
            );
            INSERT INTO study_logs (study_date, start_time, end_time, category, duration_minutes)
            VALUES ('2024-05-01', '09:00', '10:00', 'GenAI', 60),
                   ('2024-05-01', '13:00', '15:30', 'Operating Systems', 150),
                   ('2024-05-02', '23:00', '01:00', 'GenAI', 120),
                   ('2024-05-03', '08:00', '08:45', 'GenAI', 45);
            "#,
        )
        .unwrap();
        conn
    }

    #[test]
    fn migrations_are_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        run_pending_migrations(&conn).unwrap();
        run_pending_migrations(&conn).unwrap();
        assert!(table_exists(&conn, "study_days").unwrap());
        assert!(table_exists(&conn, "log").unwrap());
    }

    #[test]
    fn legacy_rows_collapse_to_latest_per_date() {
        let conn = legacy_conn();
        run_pending_migrations(&conn).unwrap();

        assert!(!table_exists(&conn, "study_logs").unwrap());

        let mut stmt = conn
            .prepare("SELECT date, start_time, stop_time, category FROM study_days ORDER BY date")
            .unwrap();
        let rows: Vec<(String, String, String, String)> = stmt
            .query_map([], |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?, r.get(3)?)))
            .unwrap()
            .map(|r| r.unwrap())
            .collect();

        assert_eq!(
            rows,
            vec![
                (
                    "2024-05-01".to_string(),
                    "13:00".to_string(),
                    "15:30".to_string(),
                    "Operating Systems".to_string()
                ),
                (
                    "2024-05-03".to_string(),
                    "08:00".to_string(),
                    "08:45".to_string(),
                    "GenAI".to_string()
                ),
            ]
        );

        let applied: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM log WHERE operation = 'migration_applied' AND target = ?1",
                [LEGACY_IMPORT_VERSION],
                |r| r.get(0),
            )
            .unwrap();
        assert_eq!(applied, 1);
    }

    #[test]
    fn legacy_import_writes_zip_backup_next_to_database() {
        use std::io::Read;

        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("study.sqlite");

        {
            let conn = Connection::open(&db_path).unwrap();
            conn.execute_batch(
                r#"
                CREATE TABLE study_logs (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    study_date TEXT NOT NULL,
                    start_time TEXT NOT NULL,
                    end_time TEXT NOT NULL,
                    category TEXT NOT NULL,
                    duration_minutes INTEGER NOT NULL
                );
                INSERT INTO study_logs (study_date, start_time, end_time, category, duration_minutes)
                VALUES ('2024-05-01', '09:00', '10:00', 'GenAI', 60);
                "#,
            )
            .unwrap();
        }
        let original = std::fs::read(&db_path).unwrap();

        let conn = Connection::open(&db_path).unwrap();
        run_pending_migrations(&conn).unwrap();

        let backups: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().path())
            .filter(|p| {
                p.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.ends_with("-backup_db_pre_study_days.zip"))
            })
            .collect();
        assert_eq!(backups.len(), 1);

        let file = std::fs::File::open(&backups[0]).unwrap();
        let mut archive = zip::ZipArchive::new(file).unwrap();
        let mut stored = Vec::new();
        archive
            .by_name("database.sqlite")
            .unwrap()
            .read_to_end(&mut stored)
            .unwrap();
        assert_eq!(stored, original);

        let days: i64 = conn
            .query_row("SELECT COUNT(*) FROM study_days", [], |r| r.get(0))
            .unwrap();
        assert_eq!(days, 1);
    }
}
