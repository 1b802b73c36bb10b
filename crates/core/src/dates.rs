//! Parsing of client-supplied calendar dates.
//!
//! Clients send either a full RFC 3339 timestamp or a plain `YYYY-MM-DD`
//! date. Plain dates are taken as midnight UTC.

use chrono::{NaiveDate, TimeZone, Utc};

use crate::error::CoreError;
use crate::types::Timestamp;

const PLAIN_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a required date field.
pub fn parse_date(field: &str, value: &str) -> Result<Timestamp, CoreError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(CoreError::Validation(format!("{field} is required")));
    }

    if let Ok(ts) = chrono::DateTime::parse_from_rfc3339(value) {
        return Ok(ts.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(value, PLAIN_DATE_FORMAT)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
        .ok_or_else(|| {
            CoreError::Validation(format!(
                "{field} must be an RFC 3339 timestamp or a YYYY-MM-DD date, got '{value}'"
            ))
        })
}

/// Parse an optional date field. Absent and blank values both mean "no date".
pub fn parse_optional_date(field: &str, value: Option<&str>) -> Result<Option<Timestamp>, CoreError> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) => parse_date(field, v).map(Some),
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use chrono::{Datelike, Timelike};

    use super::*;

    #[test]
    fn plain_date_is_midnight_utc() {
        let ts = parse_date("releaseDate", "2008-01-20").unwrap();
        assert_eq!((ts.year(), ts.month(), ts.day()), (2008, 1, 20));
        assert_eq!((ts.hour(), ts.minute(), ts.second()), (0, 0, 0));
    }

    #[test]
    fn rfc3339_is_normalised_to_utc() {
        let ts = parse_date("releaseDate", "2008-01-20T02:30:00+02:00").unwrap();
        assert_eq!(ts.to_rfc3339(), "2008-01-20T00:30:00+00:00");
    }

    #[test]
    fn garbage_is_a_validation_error() {
        assert_matches!(
            parse_date("dateOfBirth", "20/01/2008"),
            Err(CoreError::Validation(msg)) if msg.contains("dateOfBirth")
        );
    }

    #[test]
    fn blank_required_date_is_rejected() {
        assert_matches!(parse_date("releaseDate", "  "), Err(CoreError::Validation(_)));
    }

    #[test]
    fn optional_date_accepts_absent_and_blank() {
        assert_matches!(parse_optional_date("endDate", None), Ok(None));
        assert_matches!(parse_optional_date("endDate", Some("")), Ok(None));
        assert_matches!(parse_optional_date("endDate", Some("2013-09-29")), Ok(Some(_)));
    }

    #[test]
    fn optional_date_still_rejects_garbage() {
        assert_matches!(
            parse_optional_date("dateOfDeath", Some("yesterday")),
            Err(CoreError::Validation(_))
        );
    }
}
