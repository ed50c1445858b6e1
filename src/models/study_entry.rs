use crate::errors::{AppError, AppResult};
use crate::utils::date::date_str;
use crate::utils::time::{minutes_between, time_str};
use chrono::{Duration, NaiveDate, NaiveTime};

/// Category used when none is given.
pub const DEFAULT_CATEGORY: &str = "Other";

/// One day of study: the start and stop time recorded for `date`.
///
/// Fields are private and [`StudyEntry::new`] is the only constructor, so
/// every value satisfies `stop_time > start_time`.
///
/// ```compile_fail
/// use chrono::{NaiveDate, NaiveTime};
/// let reversed = studylogger::StudyEntry {
///     date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
///     start_time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
///     stop_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
///     category: "GenAI".to_string(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudyEntry {
    date: NaiveDate,       // ⇔ study_days.date (TEXT "YYYY-MM-DD", PK)
    start_time: NaiveTime, // ⇔ study_days.start_time (TEXT "HH:MM")
    stop_time: NaiveTime,  // ⇔ study_days.stop_time (TEXT "HH:MM")
    category: String,      // ⇔ study_days.category
}

impl StudyEntry {
    pub fn new(
        date: NaiveDate,
        start_time: NaiveTime,
        stop_time: NaiveTime,
        category: &str,
    ) -> AppResult<Self> {
        if stop_time <= start_time {
            return Err(AppError::StopNotAfterStart {
                start: time_str(&start_time),
                stop: time_str(&stop_time),
            });
        }

        let category = match category.trim() {
            "" => DEFAULT_CATEGORY.to_string(),
            c => c.to_string(),
        };

        Ok(Self {
            date,
            start_time,
            stop_time,
            category,
        })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn start_time(&self) -> NaiveTime {
        self.start_time
    }

    pub fn stop_time(&self) -> NaiveTime {
        self.stop_time
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn duration(&self) -> Duration {
        self.stop_time - self.start_time
    }

    pub fn duration_minutes(&self) -> i64 {
        minutes_between(self.start_time, self.stop_time)
    }

    pub fn date_str(&self) -> String {
        date_str(&self.date)
    }

    pub fn start_str(&self) -> String {
        time_str(&self.start_time)
    }

    pub fn stop_str(&self) -> String {
        time_str(&self.stop_time)
    }
}

/// Sum of durations, in minutes.
pub fn total_minutes(entries: &[StudyEntry]) -> i64 {
    entries.iter().map(StudyEntry::duration_minutes).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::date::parse_date;
    use crate::utils::time::parse_time;

    fn entry(start: &str, stop: &str) -> AppResult<StudyEntry> {
        StudyEntry::new(
            parse_date("2024-05-01").unwrap(),
            parse_time(start).unwrap(),
            parse_time(stop).unwrap(),
            "GenAI",
        )
    }

    #[test]
    fn duration_is_stop_minus_start() {
        let e = entry("09:00", "11:30").unwrap();
        assert_eq!(e.duration(), Duration::minutes(150));
        assert_eq!(e.duration_minutes(), 150);
    }

    #[test]
    fn rejects_equal_and_reversed_times() {
        assert!(entry("10:00", "10:00").unwrap_err().is_validation());
        assert!(matches!(
            entry("23:00", "01:00"),
            Err(AppError::StopNotAfterStart { .. })
        ));
    }

    #[test]
    fn blank_category_falls_back_to_default() {
        let e = StudyEntry::new(
            parse_date("2024-05-01").unwrap(),
            parse_time("08:00").unwrap(),
            parse_time("09:00").unwrap(),
            "   ",
        )
        .unwrap();
        assert_eq!(e.category(), DEFAULT_CATEGORY);
    }

    #[test]
    fn totals_add_up() {
        let a = entry("09:00", "11:30").unwrap();
        let b = entry("14:00", "17:00").unwrap();
        assert_eq!(total_minutes(&[a, b]), 330);
    }
}
