use crate::db::pool::DbPool;
use crate::db::queries::count_entries;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use crate::utils::formatting::format_total;
use rusqlite::OptionalExtension;
use std::fs;

/// Summary figures about the study database.
#[derive(Debug, Clone, PartialEq)]
pub struct DbStats {
    pub file_size: u64,
    pub entries: i64,
    pub first_date: Option<String>,
    pub last_date: Option<String>,
    pub total_minutes: i64,
}

pub fn collect(pool: &DbPool, db_path: &str) -> rusqlite::Result<DbStats> {
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let entries = count_entries(&pool.conn)?;

    let (first_date, last_date): (Option<String>, Option<String>) = pool
        .conn
        .query_row("SELECT MIN(date), MAX(date) FROM study_days", [], |row| {
            Ok((row.get(0)?, row.get(1)?))
        })
        .optional()?
        .unwrap_or((None, None));

    let total_minutes: i64 = pool.conn.query_row(
        "SELECT COALESCE(SUM(duration_minutes), 0) FROM study_days",
        [],
        |row| row.get(0),
    )?;

    Ok(DbStats {
        file_size,
        entries,
        first_date,
        last_date,
        total_minutes,
    })
}

pub fn print_db_info(pool: &DbPool, db_path: &str) -> rusqlite::Result<()> {
    let stats = collect(pool, db_path)?;
    let file_mb = (stats.file_size as f64) / (1024.0 * 1024.0);

    println!();
    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);
    println!(
        "{}• Recorded days:{} {}{}{}",
        CYAN, RESET, GREEN, stats.entries, RESET
    );

    let placeholder = format!("{GREY}--{RESET}");
    println!("{}• Date range:{}", CYAN, RESET);
    println!(
        "    from: {}",
        stats.first_date.as_deref().unwrap_or(&placeholder)
    );
    println!(
        "    to:   {}",
        stats.last_date.as_deref().unwrap_or(&placeholder)
    );

    println!(
        "{}• Total study time:{} {}",
        CYAN,
        RESET,
        format_total(stats.total_minutes)
    );

    if stats.entries > 0 {
        let avg = stats.total_minutes / stats.entries;
        println!(
            "{}• Average per recorded day:{} {}",
            CYAN,
            RESET,
            format_total(avg)
        );
    }

    println!();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::initialize::init_db;

    #[test]
    fn empty_database_has_no_range() {
        let pool = DbPool::in_memory().unwrap();
        init_db(&pool.conn).unwrap();
        let stats = collect(&pool, "").unwrap();
        assert_eq!(stats.entries, 0);
        assert_eq!(stats.first_date, None);
        assert_eq!(stats.total_minutes, 0);
    }

    #[test]
    fn figures_follow_stored_rows() {
        let pool = DbPool::in_memory().unwrap();
        init_db(&pool.conn).unwrap();
        pool.conn
            .execute_batch(
                "INSERT INTO study_days VALUES ('2024-05-03', '09:00', '10:00', 'GenAI', 60, 'x');
                 INSERT INTO study_days VALUES ('2024-05-01', '09:00', '11:30', 'GenAI', 150, 'x');",
            )
            .unwrap();
        let stats = collect(&pool, "").unwrap();
        assert_eq!(stats.entries, 2);
        assert_eq!(stats.first_date.as_deref(), Some("2024-05-01"));
        assert_eq!(stats.last_date.as_deref(), Some("2024-05-03"));
        assert_eq!(stats.total_minutes, 210);
    }
}
