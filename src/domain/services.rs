//! Field parsers for the four raw columns of the export.
//!
//! These are pure functions: one raw string in, one typed value or a
//! `FormatError` out. Row context is attached by the pipeline.

use crate::domain::model::WorkoutDate;
use crate::utils::error::{ConvertError, Result};

fn format_error(field: &str, value: &str, reason: &str) -> ConvertError {
    ConvertError::FormatError {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

fn int_component<T>(field: &str, value: &str, token: &str) -> Result<T>
where
    T: std::str::FromStr,
{
    token.parse().map_err(|_| {
        format_error(field, value, &format!("\"{}\" is not a number", token))
    })
}

/// Parses `"<date> <time>"` where the date part is `YYYY-MM-DD`.
/// The time part must be present but is discarded. The components are
/// only parsed as integers, never range-checked.
pub fn parse_date(value: &str) -> Result<WorkoutDate> {
    let mut tokens = value.splitn(2, ' ');
    let date_token = tokens.next().unwrap_or("");
    if tokens.next().is_none() {
        return Err(format_error("date", value, "expected \"<date> <time>\""));
    }

    let parts: Vec<&str> = date_token.split('-').collect();
    if parts.len() < 3 {
        return Err(format_error(
            "date",
            value,
            "expected \"<year>-<month>-<day>\"",
        ));
    }

    Ok(WorkoutDate {
        year: int_component("date", value, parts[0])?,
        month: int_component("date", value, parts[1])?,
        day: int_component("date", value, parts[2])?,
    })
}

/// Parses a distance in meters written with `.` as a thousands
/// separator, e.g. `"5.200"` -> 5200. Fractional meters do not exist in
/// the export.
pub fn parse_distance(value: &str) -> Result<u32> {
    let digits = value.replace('.', "");
    digits
        .parse()
        .map_err(|_| format_error("distance", value, "not a whole number of meters"))
}

/// Parses `"HH:MM:SS"` into total seconds. A fractional part after a
/// comma in the seconds component (`"01:42:26,54"`) is dropped.
pub fn parse_duration(value: &str) -> Result<u32> {
    let parts: Vec<&str> = value.split(':').collect();
    if parts.len() < 3 {
        return Err(format_error(
            "time",
            value,
            "expected \"<hours>:<minutes>:<seconds>\"",
        ));
    }

    let seconds_token = match parts[2].find(',') {
        Some(pos) => &parts[2][..pos],
        None => parts[2],
    };

    let hours: u32 = int_component("time", value, parts[0])?;
    let minutes: u32 = int_component("time", value, parts[1])?;
    let seconds: u32 = int_component("time", value, seconds_token)?;

    Ok(hours * 3600 + minutes * 60 + seconds)
}

/// Classifies an activity type string as pool (true) or open-water
/// (false) swimming. The input is trimmed and lowercased, then matched
/// against the configured keyword vocabulary; anything unrecognized
/// counts as open water.
pub fn is_pool_activity(value: &str, pool_keywords: &[String]) -> bool {
    let normalized = value.trim().to_lowercase();
    pool_keywords
        .iter()
        .any(|keyword| normalized.contains(&keyword.to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keywords() -> Vec<String> {
        vec!["pool".to_string(), "piscina".to_string(), "alberca".to_string()]
    }

    #[test]
    fn test_parse_date_recovers_components() {
        let date = parse_date("2023-11-21 09:15:22").unwrap();
        assert_eq!(date, WorkoutDate { year: 2023, month: 11, day: 21 });
    }

    #[test]
    fn test_parse_date_ignores_time_part() {
        let morning = parse_date("2024-01-02 00:00:01").unwrap();
        let evening = parse_date("2024-01-02 23:59:59").unwrap();
        assert_eq!(morning, evening);
    }

    #[test]
    fn test_parse_date_accepts_out_of_range_month() {
        // No calendar validation: only integer parsing applies.
        let date = parse_date("2023-13-01 10:00:00").unwrap();
        assert_eq!(date.month, 13);
    }

    #[test]
    fn test_parse_date_requires_time_token() {
        assert!(parse_date("2023-11-21").is_err());
    }

    #[test]
    fn test_parse_date_requires_three_date_components() {
        assert!(parse_date("2023-11 09:15:22").is_err());
        assert!(parse_date("21/11/2023 09:15:22").is_err());
    }

    #[test]
    fn test_parse_date_rejects_non_numeric_components() {
        assert!(parse_date("2023-nov-21 09:15:22").is_err());
    }

    #[test]
    fn test_parse_distance_strips_thousands_separator() {
        assert_eq!(parse_distance("5.200").unwrap(), 5200);
        assert_eq!(parse_distance("12.345.678").unwrap(), 12_345_678);
        assert_eq!(parse_distance("950").unwrap(), 950);
    }

    #[test]
    fn test_parse_distance_rejects_garbage() {
        assert!(parse_distance("").is_err());
        assert!(parse_distance("5,200").is_err());
        assert!(parse_distance("12m").is_err());
        assert!(parse_distance("-100").is_err());
    }

    #[test]
    fn test_parse_duration_sums_components() {
        assert_eq!(parse_duration("01:42:26").unwrap(), 6146);
        assert_eq!(parse_duration("1:2:3").unwrap(), 3723);
        assert_eq!(parse_duration("0:0:59").unwrap(), 59);
    }

    #[test]
    fn test_parse_duration_drops_fractional_seconds() {
        assert_eq!(parse_duration("01:42:26,54").unwrap(), 6146);
        assert_eq!(parse_duration("10:00:00,5").unwrap(), 36000);
    }

    #[test]
    fn test_parse_duration_requires_three_components() {
        assert!(parse_duration("1:2").is_err());
        assert!(parse_duration("6146").is_err());
        assert!(parse_duration("").is_err());
    }

    #[test]
    fn test_parse_duration_rejects_non_numeric_components() {
        assert!(parse_duration("aa:bb:cc").is_err());
        assert!(parse_duration("-1:00:00").is_err());
    }

    #[test]
    fn test_pool_activity_matches_keywords() {
        assert!(is_pool_activity("Natación en piscina", &keywords()));
        assert!(is_pool_activity("Pool swim", &keywords()));
        assert!(is_pool_activity("  ALBERCA municipal  ", &keywords()));
    }

    #[test]
    fn test_open_water_and_unknown_activities() {
        assert!(!is_pool_activity("Natación en aguas abiertas", &keywords()));
        assert!(!is_pool_activity("Open water", &keywords()));
        assert!(!is_pool_activity("", &keywords()));
    }
}
