//! Display formatting for values entered through native date/time inputs.

use chrono::{NaiveDate, NaiveTime};

/// Format a `YYYY-MM-DD` date as "May 25, 2023".
///
/// Falls back to the input unchanged if it does not parse.
pub fn format_date_long(date_str: &str) -> String {
    match NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d") {
        Ok(date) => date.format("%B %-d, %Y").to_string(),
        Err(_) => date_str.to_string(),
    }
}

/// Format a 24-hour `HH:MM` time as "2:30 PM".
///
/// Falls back to the input unchanged if it does not parse.
pub fn format_time_12h(time_str: &str) -> String {
    let trimmed = time_str.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
        .map(|t| t.format("%-I:%M %p").to_string())
        .unwrap_or_else(|_| time_str.to_string())
}

/// "30" → "30 mins". Non-numeric input is passed through.
pub fn format_duration_minutes(minutes: &str) -> String {
    match minutes.trim().parse::<u32>() {
        Ok(n) => format!("{n} mins"),
        Err(_) => minutes.to_string(),
    }
}

/// Uppercase the first character only (e.g. "at-risk" → "At-risk").
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().to_string() + chars.as_str(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_long_formats_iso_dates() {
        assert_eq!(format_date_long("2023-05-25"), "May 25, 2023");
        assert_eq!(format_date_long("2024-01-05"), "January 5, 2024");
    }

    #[test]
    fn date_long_passes_through_garbage() {
        assert_eq!(format_date_long("next tuesday"), "next tuesday");
        assert_eq!(format_date_long(""), "");
    }

    #[test]
    fn time_12h_handles_noon_and_midnight() {
        assert_eq!(format_time_12h("14:30"), "2:30 PM");
        assert_eq!(format_time_12h("00:05"), "12:05 AM");
        assert_eq!(format_time_12h("12:00"), "12:00 PM");
        assert_eq!(format_time_12h("09:15:00"), "9:15 AM");
    }

    #[test]
    fn time_12h_passes_through_garbage() {
        assert_eq!(format_time_12h("soon"), "soon");
    }

    #[test]
    fn duration_formats_minutes() {
        assert_eq!(format_duration_minutes("45"), "45 mins");
        assert_eq!(format_duration_minutes("an hour"), "an hour");
    }

    #[test]
    fn capitalize_first_letter() {
        assert_eq!(capitalize("upcoming"), "Upcoming");
        assert_eq!(capitalize(""), "");
    }
}
