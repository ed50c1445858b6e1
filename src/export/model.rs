use crate::models::StudyEntry;
use serde::Serialize;

/// Flat row written by every export format.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct EntryExport {
    pub date: String,
    pub start_time: String,
    pub stop_time: String,
    pub duration_minutes: i64,
    pub category: String,
}

impl From<&StudyEntry> for EntryExport {
    fn from(e: &StudyEntry) -> Self {
        Self {
            date: e.date_str(),
            start_time: e.start_str(),
            stop_time: e.stop_str(),
            duration_minutes: e.duration_minutes(),
            category: e.category().to_string(),
        }
    }
}
