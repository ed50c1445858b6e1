pub mod study_entry;

pub use study_entry::{DEFAULT_CATEGORY, StudyEntry, total_minutes};
