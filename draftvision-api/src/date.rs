use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

use crate::{Error, Time};

pub const UNKNOWN_DATE: &str = "Unknown date";

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

enum Parsed {
    Offset(DateTime<FixedOffset>),
    Naive(NaiveDateTime),
}

fn parse(raw: &str) -> Result<Parsed, Error> {
    let raw = raw.trim();
    if let Ok(d) = DateTime::parse_from_rfc3339(raw) {
        return Ok(Parsed::Offset(d));
    }
    for fmt in NAIVE_FORMATS {
        if let Ok(d) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Ok(Parsed::Naive(d));
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(|d| Parsed::Naive(d.and_time(NaiveTime::MIN)))
        .map_err(|_| Error::InvalidDate(raw.to_string()))
}

/// Parses a `created_at` value into the calendar date the viewer should see
///
/// Timestamps with an offset are converted to `tz`. Timestamps without one
/// are already in local time, so their date is taken as-is.
pub fn parse_created_at<Tz: TimeZone>(raw: &str, tz: &Tz) -> Result<NaiveDate, Error> {
    Ok(match parse(raw)? {
        Parsed::Offset(d) => d.with_timezone(tz).date_naive(),
        Parsed::Naive(d) => d.date(),
    })
}

/// Parses a `created_at` value into an instant, for ordering
///
/// Timestamps without an offset are taken as UTC.
pub fn parse_timestamp(raw: &str) -> Result<Time, Error> {
    Ok(match parse(raw)? {
        Parsed::Offset(d) => d.with_timezone(&Utc),
        Parsed::Naive(d) => Utc.from_utc_datetime(&d),
    })
}

/// Renders `created_at` as a short date, eg. `Feb 20, 2025`
///
/// Never fails: an unparsable value is shown verbatim, a missing one as
/// [`UNKNOWN_DATE`].
pub fn format_date<Tz: TimeZone>(raw: Option<&str>, tz: &Tz) -> String {
    let raw = match raw.map(str::trim).filter(|r| !r.is_empty()) {
        Some(r) => r,
        None => return String::from(UNKNOWN_DATE),
    };
    match parse_created_at(raw, tz) {
        Ok(d) => d.format("%b %-d, %Y").to_string(),
        Err(e) => {
            tracing::debug!(error=%e, "falling back to raw date display");
            raw.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rfc3339() {
        assert_eq!(format_date(Some("2025-02-20T15:30:00Z"), &Utc), "Feb 20, 2025");
        assert_eq!(
            format_date(Some("2025-02-20T15:30:00.123456+00:00"), &Utc),
            "Feb 20, 2025"
        );
    }

    #[test]
    fn rfc3339_converts_to_viewer_timezone() {
        let tz = chrono_tz::America::New_York;
        assert_eq!(format_date(Some("2025-02-21T02:00:00Z"), &tz), "Feb 20, 2025");
        assert_eq!(format_date(Some("2025-02-21T02:00:00Z"), &Utc), "Feb 21, 2025");
    }

    #[test]
    fn naive_is_local() {
        let tz = chrono_tz::Asia::Tokyo;
        assert_eq!(format_date(Some("2025-02-18T12:15:00"), &tz), "Feb 18, 2025");
        assert_eq!(format_date(Some("2025-02-22 09:45:00.5"), &tz), "Feb 22, 2025");
        assert_eq!(format_date(Some("2024-12-01"), &tz), "Dec 1, 2024");
    }

    #[test]
    fn fallbacks() {
        assert_eq!(format_date(None, &Utc), UNKNOWN_DATE);
        assert_eq!(format_date(Some("   "), &Utc), UNKNOWN_DATE);
        assert_eq!(format_date(Some(" yesterday "), &Utc), "yesterday");
        assert_eq!(format_date(Some("2025-13-40"), &Utc), "2025-13-40");
    }

    #[test]
    fn parse_error() {
        assert_eq!(
            parse_created_at("not a date", &Utc),
            Err(Error::InvalidDate(String::from("not a date"))),
        );
    }

    #[test]
    fn timestamps_keep_time_of_day() {
        let morning = parse_timestamp("2025-02-20T09:00:00").unwrap();
        let evening = parse_timestamp("2025-02-20 18:00:00").unwrap();
        assert!(morning < evening);
        assert_eq!(
            parse_timestamp("2025-02-20T10:00:00+01:00").unwrap(),
            morning
        );
        assert_eq!(
            parse_timestamp("2025-02-20").unwrap(),
            Utc.with_ymd_and_hms(2025, 2, 20, 0, 0, 0).unwrap()
        );
        assert_eq!(
            parse_timestamp("soon"),
            Err(Error::InvalidDate(String::from("soon")))
        );
    }

    #[test]
    fn format_never_panics() {
        bolero::check!()
            .with_type::<String>()
            .cloned()
            .for_each(|s: String| {
                let res = format_date(Some(s.as_str()), &Utc);
                assert!(!res.is_empty());
            })
    }
}
