use crate::error::{AppError, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

/// Day 0 of the spreadsheet date system. Serial 1 = 1899-12-31.
const SPREADSHEET_EPOCH: NaiveDate = NaiveDate::from_ymd_opt(1899, 12, 30).unwrap();

const MILLIS_PER_DAY: f64 = 86_400_000.0;

// Date-times without an offset are read as UTC.
const NAIVE_DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

// RFC 3339 without seconds, e.g. `2019-12-25T14:10+02:00`.
const OFFSET_DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M%#z", "%Y-%m-%d %H:%M%#z"];

/// Convert date-like text into days since 1899-12-30, the serial number
/// Google Sheets stores for dates. Time of day becomes the fractional part.
pub fn to_spreadsheet_epoch(date_text: &str) -> Result<f64> {
    let parsed = parse_date_time(date_text).ok_or_else(|| {
        AppError::InvalidDate(format!(
            "'{}' is not a recognised date or date-time",
            date_text
        ))
    })?;

    Ok(datetime_to_spreadsheet_epoch(parsed))
}

pub fn datetime_to_spreadsheet_epoch(datetime: DateTime<Utc>) -> f64 {
    let epoch = SPREADSHEET_EPOCH.and_time(NaiveTime::MIN).and_utc();
    (datetime - epoch).num_milliseconds() as f64 / MILLIS_PER_DAY
}

fn parse_date_time(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();

    if let Ok(datetime) = DateTime::parse_from_rfc3339(text) {
        return Some(datetime.with_timezone(&Utc));
    }

    if let Some(datetime) = OFFSET_DATE_TIME_FORMATS
        .iter()
        .find_map(|format| DateTime::parse_from_str(text, format).ok())
    {
        return Some(datetime.with_timezone(&Utc));
    }

    // A trailing `Z` on anything else is UTC, same as no offset.
    let naive_text = text.strip_suffix(['Z', 'z']).unwrap_or(text);

    NAIVE_DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(naive_text, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(naive_text, "%Y-%m-%d")
                .ok()
                .map(|date| date.and_time(NaiveTime::MIN))
        })
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_epoch_origin() {
        assert_eq!(to_spreadsheet_epoch("1899-12-30T00:00:00.000Z").unwrap(), 0.0);
        assert_eq!(to_spreadsheet_epoch("1899-12-30").unwrap(), 0.0);
    }

    #[test]
    fn test_first_day() {
        assert_eq!(to_spreadsheet_epoch("1899-12-31").unwrap(), 1.0);
    }

    #[test]
    fn test_time_of_day_is_fractional() {
        assert_eq!(to_spreadsheet_epoch("1899-12-31T12:00:00Z").unwrap(), 1.5);
        assert_eq!(to_spreadsheet_epoch("1899-12-31 06:00").unwrap(), 1.25);
    }

    #[test]
    fn test_known_serial() {
        // 1980-07-12 is serial 29414, 14:00:20 is 50420 seconds into the day
        let serial = to_spreadsheet_epoch("1980-07-12T14:00:20.000Z").unwrap();
        let expected = 29414.0 + 50420.0 / 86400.0;
        assert!((serial - expected).abs() < 1e-9, "got {}", serial);
    }

    #[test]
    fn test_date_time_without_seconds_with_zone() {
        assert_eq!(to_spreadsheet_epoch("1899-12-31T12:00Z").unwrap(), 1.5);
        assert_eq!(to_spreadsheet_epoch("1899-12-31T14:00+02:00").unwrap(), 1.5);

        let minutes_only = to_spreadsheet_epoch("2019-12-25T14:10Z").unwrap();
        let with_seconds = to_spreadsheet_epoch("2019-12-25T14:10:00.000Z").unwrap();
        assert_eq!(minutes_only, with_seconds);
    }

    #[test]
    fn test_offset_is_normalised_to_utc() {
        let with_offset = to_spreadsheet_epoch("2019-12-25T02:00:00+02:00").unwrap();
        let utc = to_spreadsheet_epoch("2019-12-25").unwrap();
        assert_eq!(with_offset, utc);
    }

    #[test]
    fn test_monotonic() {
        let dates = [
            "1899-12-30",
            "1900-01-01T00:00:01Z",
            "1980-07-12",
            "1980-07-12T14:00:20.000Z",
            "2019-12-14T14:10:20.000Z",
            "2019-12-25",
        ];
        let serials: Vec<f64> = dates
            .iter()
            .map(|d| to_spreadsheet_epoch(d).unwrap())
            .collect();

        for pair in serials.windows(2) {
            assert!(pair[0] < pair[1], "{:?} should be increasing", serials);
        }
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        assert_eq!(to_spreadsheet_epoch("  1899-12-31\n").unwrap(), 1.0);
    }

    #[test]
    fn test_unparseable_date_is_an_error() {
        for text in ["Born 1980-07-12", "2019-13-45", "not a date", ""] {
            let err = to_spreadsheet_epoch(text).unwrap_err();
            assert!(matches!(err, AppError::InvalidDate(_)), "got {:?}", err);
        }
    }

    #[test]
    fn test_datetime_to_spreadsheet_epoch() {
        let datetime = Utc.with_ymd_and_hms(1900, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(datetime_to_spreadsheet_epoch(datetime), 2.0);
    }
}
