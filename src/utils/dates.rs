// ============================================================================
// DATES - Parsing and formatting of session dates
// ============================================================================
// The backend stores session dates as free-form strings; the form writes
// "MM/DD/YYYY HH:MM" while seeded data uses ISO 8601.
// ============================================================================

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y"];

/// Form input format (also the default shown when creating a session)
pub const FORM_DATE_FORMAT: &str = "%m/%d/%Y %H:%M";

/// Parse a session date into local naive time. Date-only values are taken
/// at midnight.
pub fn parse_session_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
        return Some(with_offset.with_timezone(&Local).naive_local());
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

pub fn format_form_date(value: NaiveDateTime) -> String {
    value.format(FORM_DATE_FORMAT).to_string()
}

/// Current local wall-clock time
pub fn now_local() -> NaiveDateTime {
    Local::now().naive_local()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .and_then(|date| date.and_hms_opt(h, min, 0))
            .unwrap()
    }

    #[test]
    fn parses_form_and_iso_formats() {
        assert_eq!(parse_session_date("03/15/2026 14:30"), Some(at(2026, 3, 15, 14, 30)));
        assert_eq!(parse_session_date("2026-03-15T14:30:00"), Some(at(2026, 3, 15, 14, 30)));
        assert_eq!(parse_session_date("2026-03-15 14:30"), Some(at(2026, 3, 15, 14, 30)));
        assert_eq!(parse_session_date("2026-03-15"), Some(at(2026, 3, 15, 0, 0)));
        assert!(parse_session_date("2026-03-15T14:30:00Z").is_some());
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_session_date(""), None);
        assert_eq!(parse_session_date("next tuesday"), None);
        assert_eq!(parse_session_date("13/45/2026 10:00"), None);
    }

    #[test]
    fn form_date_is_zero_padded() {
        assert_eq!(format_form_date(at(2026, 1, 5, 9, 7)), "01/05/2026 09:07");
    }
}
