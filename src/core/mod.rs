pub mod backup;
pub mod log;
pub mod recorder;

pub use recorder::SessionRecorder;
