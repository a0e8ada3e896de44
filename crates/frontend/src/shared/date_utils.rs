/// Utilities for date formatting
///
/// Provides consistent date formatting across the application

use chrono::NaiveDate;

/// Format a date as DD.MM.YYYY for the history table
/// Example: 2026-08-07 -> "07.08.2026"
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// Short DD.MM label for chart axes
/// Example: 2026-08-07 -> "07.08"
pub fn format_date_short(date: NaiveDate) -> String {
    date.format("%d.%m").to_string()
}

/// Format ISO datetime string to DD.MM.YYYY HH:MM:SS format
/// Example: "2026-08-07T14:02:26.123Z" -> "07.08.2026 14:02:26"
pub fn format_datetime(datetime_str: &str) -> String {
    if let Some((date_part, time_part)) = datetime_str.split_once('T') {
        if let Some((year, rest)) = date_part.split_once('-') {
            if let Some((month, day)) = rest.split_once('-') {
                let time = time_part.split('.').next().unwrap_or(time_part);
                let time = time.trim_end_matches('Z');
                return format!("{}.{}.{} {}", day, month, year, time);
            }
        }
    }
    datetime_str.to_string()
}

/// Today's calendar date as the browser sees it
pub fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1,
        now.get_date(),
    )
    .unwrap_or_else(|| NaiveDate::from_ymd_opt(1970, 1, 1).expect("epoch date is valid"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(date("2026-08-07")), "07.08.2026");
        assert_eq!(format_date_short(date("2026-08-07")), "07.08");
    }

    #[test]
    fn test_format_datetime() {
        assert_eq!(
            format_datetime("2026-08-07T14:02:26.123Z"),
            "07.08.2026 14:02:26"
        );
        assert_eq!(
            format_datetime("2026-12-31T23:59:59Z"),
            "31.12.2026 23:59:59"
        );
    }

    #[test]
    fn test_invalid_datetime_passes_through() {
        assert_eq!(format_datetime("invalid"), "invalid");
    }
}
