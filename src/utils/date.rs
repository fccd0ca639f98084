use chrono::{Datelike, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// The current season as a date prefix (the calendar year).
pub fn current_season() -> String {
    today().year().to_string()
}

/// A season filter is a year ("2025") or year-month ("2025-03") prefix.
pub fn is_valid_season(s: &str) -> bool {
    let bytes = s.as_bytes();
    match bytes.len() {
        4 => bytes.iter().all(u8::is_ascii_digit),
        7 => {
            bytes[..4].iter().all(u8::is_ascii_digit)
                && bytes[4] == b'-'
                && bytes[5..].iter().all(u8::is_ascii_digit)
                && matches!(s[5..].parse::<u8>(), Ok(1..=12))
        }
        _ => false,
    }
}
