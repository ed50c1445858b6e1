/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Weekend days are dimmed in the history table.
pub fn color_for_weekday(weekday: chrono::Weekday) -> &'static str {
    match weekday {
        chrono::Weekday::Sat | chrono::Weekday::Sun => GREY,
        _ => RESET,
    }
}
