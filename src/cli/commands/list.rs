use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::SessionRecorder;
use crate::errors::AppResult;
use crate::models::{StudyEntry, total_minutes};
use crate::ui::messages::{header, info};
use crate::utils::colors::{RESET, color_for_weekday};
use crate::utils::date;
use crate::utils::formatting::{bold, format_duration, format_total};
use crate::utils::table::{Column, Table};
use chrono::Datelike;
use unicode_width::UnicodeWidthStr;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { period, now } = cmd {
        let recorder = SessionRecorder::open(&cfg.database)?;

        let (bounds, title) = if *now {
            let today = date::today();
            (Some((today, today)), format!("Study log for {}", today))
        } else {
            match period {
                Some(p) => (date::parse_period(p)?, format!("Study log for {}", p)),
                None => (None, "Study log".to_string()),
            }
        };

        let entries = recorder.list_period(bounds)?;

        if entries.is_empty() {
            info("No study entries recorded for this period.");
            return Ok(());
        }

        header(title);
        print!("{}", render_table(&entries, cfg));
        println!(
            "\n{} {} over {} day(s)",
            bold("Total:"),
            format_total(total_minutes(&entries)),
            entries.len()
        );
    }
    Ok(())
}

fn render_table(entries: &[StudyEntry], cfg: &Config) -> String {
    let cat_w = entries
        .iter()
        .map(|e| UnicodeWidthStr::width(e.category()))
        .max()
        .unwrap_or(0)
        .max("Category".len());

    let mut columns = vec![Column::new("Date", 10)];
    if cfg.show_weekday {
        columns.push(Column::new("Day", 3));
    }
    columns.extend([
        Column::new("From", 5),
        Column::new("To", 5),
        Column::new("Duration", 8),
        Column::new("Category", cat_w),
    ]);

    let mut table = Table::new(columns, cfg.separator());

    for e in entries {
        let mut row = vec![e.date_str()];
        if cfg.show_weekday {
            row.push(e.date().weekday().to_string());
        }
        row.extend([
            e.start_str(),
            e.stop_str(),
            format_duration(e.duration_minutes()),
            e.category().to_string(),
        ]);
        table.add_row(row);
    }

    if !cfg.show_weekday {
        return table.render();
    }

    // dim weekend rows; colour codes are added after padding so widths stay right
    let rendered = table.render();
    let mut out = String::new();
    for (i, line) in rendered.lines().enumerate() {
        let color = i
            .checked_sub(2)
            .and_then(|idx| entries.get(idx))
            .map(|e| color_for_weekday(e.date().weekday()))
            .unwrap_or(RESET);
        out.push_str(&format!("{color}{line}{RESET}\n"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::date::parse_date;
    use crate::utils::time::parse_time;

    fn entry(date: &str, cat: &str) -> StudyEntry {
        StudyEntry::new(
            parse_date(date).unwrap(),
            parse_time("09:00").unwrap(),
            parse_time("11:30").unwrap(),
            cat,
        )
        .unwrap()
    }

    #[test]
    fn table_lists_times_and_duration() {
        let cfg = Config::default();
        let out = render_table(&[entry("2024-05-01", "GenAI")], &cfg);
        let row = out.lines().nth(2).unwrap();
        assert!(row.starts_with("2024-05-01 09:00 11:30 2h 30m"));
        assert!(row.contains("GenAI"));
    }

    #[test]
    fn weekday_column_is_optional() {
        let cfg = Config {
            show_weekday: true,
            ..Config::default()
        };
        // 2024-05-01 is a Wednesday
        let out = render_table(&[entry("2024-05-01", "GenAI")], &cfg);
        assert!(out.contains("Wed"));
    }
}
