//! Library-level checks of the session recorder against a real database file.

use chrono::{NaiveDate, NaiveTime};
use studylogger::SessionRecorder;
use studylogger::errors::AppError;

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn t(s: &str) -> NaiveTime {
    NaiveTime::parse_from_str(s, "%H:%M").unwrap()
}

#[test]
fn entries_survive_reopening_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("nested").join("study.sqlite");
    let db = db.to_string_lossy().to_string();

    {
        let mut rec = SessionRecorder::open(&db).unwrap();
        rec.save_day(d("2024-05-01"), t("09:00"), t("11:30")).unwrap();
    }

    let rec = SessionRecorder::open(&db).unwrap();
    let days = rec.list_days().unwrap();
    assert_eq!(days.len(), 1);
    assert_eq!(days[0].date(), d("2024-05-01"));
    assert_eq!(days[0].duration_minutes(), 150);
}

#[test]
fn every_valid_pair_round_trips_with_its_duration() {
    let mut rec = SessionRecorder::in_memory().unwrap();
    let date = d("2024-01-01");

    for (i, (start, stop)) in [("00:00", "00:01"), ("09:00", "17:45"), ("22:10", "23:59")]
        .into_iter()
        .enumerate()
    {
        let day = date + chrono::Duration::days(i as i64);
        let saved = rec.save_day(day, t(start), t(stop)).unwrap();
        let stored = rec.get_day(&day).unwrap().unwrap();
        assert_eq!(stored, saved);
        assert_eq!(stored.duration(), t(stop) - t(start));
    }
}

#[test]
fn overnight_span_is_a_validation_error() {
    let mut rec = SessionRecorder::in_memory().unwrap();
    let err = rec
        .save_day(d("2024-05-01"), t("23:00"), t("01:00"))
        .unwrap_err();
    assert!(err.is_validation());
    assert!(matches!(err, AppError::StopNotAfterStart { .. }));
    assert!(rec.get_day(&d("2024-05-01")).unwrap().is_none());
}

#[test]
fn unreadable_location_is_a_storage_error() {
    let dir = tempfile::tempdir().unwrap();
    // a directory cannot be opened as a database file
    let err = SessionRecorder::open(&dir.path().to_string_lossy()).err().unwrap();
    assert!(!err.is_validation());
}
