//! Formatting utilities used for CLI and export outputs.

use unicode_width::UnicodeWidthStr;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Pad to a display width, so category names with wide characters still line up.
pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(w)))
}

/// Human readable duration: "2h 30m", or "45m" below one hour.
pub fn format_duration(mins: i64) -> String {
    let hours = mins / 60;
    let minutes = mins % 60;
    if hours != 0 {
        format!("{}h {}m", hours, minutes)
    } else {
        format!("{}m", minutes)
    }
}

/// Total label form, hours always shown: "0h 45m".
pub fn format_total(mins: i64) -> String {
    format!("{}h {}m", mins / 60, mins % 60)
}
