use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok()
}

/// Accepts `YYYY-MM-DD` or the keyword `today`.
pub fn require_date(s: &str) -> AppResult<NaiveDate> {
    if s.trim().eq_ignore_ascii_case("today") {
        return Ok(today());
    }
    parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

pub fn date_str(d: &NaiveDate) -> String {
    d.format(DATE_FORMAT).to_string()
}

/// Parse a period filter into inclusive date bounds.
///
/// Supported forms:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - YYYY:YYYY
/// - YYYY-MM:YYYY-MM
/// - YYYY-MM-DD:YYYY-MM-DD
///
/// `all` yields `None` (no filter).
pub fn parse_period(p: &str) -> AppResult<Option<(NaiveDate, NaiveDate)>> {
    let p = p.trim();
    if p.eq_ignore_ascii_case("all") {
        return Ok(None);
    }

    let (from, to) = if let Some((start_raw, end_raw)) = p.split_once(':') {
        let (start, end) = (start_raw.trim(), end_raw.trim());
        if start.len() != end.len() {
            return Err(AppError::InvalidPeriod(format!(
                "{p}: start and end must have the same format"
            )));
        }
        (bounds_of(start)?.0, bounds_of(end)?.1)
    } else {
        bounds_of(p)?
    };

    if from > to {
        return Err(AppError::InvalidPeriod(format!("{p}: start is after end")));
    }

    Ok(Some((from, to)))
}

/// First and last day covered by a single year, month or day token.
fn bounds_of(token: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let invalid = || AppError::InvalidPeriod(token.to_string());

    match token.len() {
        // YYYY
        4 => {
            let y: i32 = token.parse().map_err(|_| invalid())?;
            let first = NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(invalid)?;
            let last = NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(invalid)?;
            Ok((first, last))
        }
        // YYYY-MM
        7 => {
            let first = NaiveDate::parse_from_str(&format!("{token}-01"), DATE_FORMAT)
                .map_err(|_| invalid())?;
            let last = last_day_of_month(first.year(), first.month()).ok_or_else(invalid)?;
            Ok((first, last))
        }
        // YYYY-MM-DD
        10 => {
            let d = parse_date(token).ok_or_else(invalid)?;
            Ok((d, d))
        }
        _ => Err(invalid()),
    }
}

fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let (ny, nm) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(ny, nm, 1)?.pred_opt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        parse_date(s).unwrap()
    }

    #[test]
    fn period_year() {
        let (from, to) = parse_period("2024").unwrap().unwrap();
        assert_eq!(from, d("2024-01-01"));
        assert_eq!(to, d("2024-12-31"));
    }

    #[test]
    fn period_month_handles_leap_february() {
        let (from, to) = parse_period("2024-02").unwrap().unwrap();
        assert_eq!(from, d("2024-02-01"));
        assert_eq!(to, d("2024-02-29"));
    }

    #[test]
    fn period_range_of_months() {
        let (from, to) = parse_period("2024-11:2025-01").unwrap().unwrap();
        assert_eq!(from, d("2024-11-01"));
        assert_eq!(to, d("2025-01-31"));
    }

    #[test]
    fn period_all_means_no_filter() {
        assert!(parse_period("all").unwrap().is_none());
    }

    #[test]
    fn period_rejects_mixed_or_reversed() {
        assert!(parse_period("2024:2024-05").is_err());
        assert!(parse_period("2025:2024").is_err());
        assert!(parse_period("2024-13").is_err());
        assert!(parse_period("yesterday").is_err());
    }

    #[test]
    fn require_date_accepts_today() {
        assert_eq!(require_date("today").unwrap(), today());
        assert!(require_date("2024-02-30").is_err());
    }
}
