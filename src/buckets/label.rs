//! Conversion of local bucket labels into epoch milliseconds.
//!
//! Labels come without a time zone and use a space between date and time
//! (`"2024-01-01 05:00:00"`). They are read as wall-clock time in the zone
//! handed in by the caller.

use chrono::{LocalResult, NaiveDateTime, TimeZone};

use crate::error::{Error, Result};

const LABEL_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Parses a label as a naive (zone-less) date-time.
pub fn parse_naive_label(label: &str) -> Result<NaiveDateTime> {
    let normalized = label.trim().replacen(' ', "T", 1);

    LABEL_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(&normalized, fmt).ok())
        .ok_or_else(|| Error::InvalidLabel(label.to_string()))
}

/// Resolves a naive local date-time to epoch milliseconds in `tz`.
///
/// Ambiguous times (clocks turned back) resolve to the earlier instant.
pub fn local_to_millis<Tz: TimeZone>(naive: NaiveDateTime, tz: &Tz) -> Result<i64> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Ok(dt.timestamp_millis()),
        LocalResult::Ambiguous(earliest, _) => Ok(earliest.timestamp_millis()),
        LocalResult::None => Err(Error::NonexistentLocalTime(naive)),
    }
}

/// Parses a bucket label into epoch milliseconds, interpreting it in `tz`.
pub fn parse_bucket_label<Tz: TimeZone>(label: &str, tz: &Tz) -> Result<i64> {
    local_to_millis(parse_naive_label(label)?, tz)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, NaiveDate, Utc};
    use chrono_tz::Europe::Berlin;

    #[test]
    fn test_space_separated_label() {
        let ts = parse_bucket_label("2024-01-01 05:00:00", &Utc).unwrap();
        assert_eq!(ts, 1_704_085_200_000);
    }

    #[test]
    fn test_t_separator_and_fraction() {
        let a = parse_bucket_label("2024-01-01T05:00:00", &Utc).unwrap();
        let b = parse_bucket_label("2024-01-01 05:00:00.000", &Utc).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_label_without_seconds() {
        let a = parse_bucket_label("2024-01-01 05:00", &Utc).unwrap();
        let b = parse_bucket_label("2024-01-01 05:00:00", &Utc).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_label_uses_given_zone() {
        let berlin_winter = FixedOffset::east_opt(3600).unwrap();
        let utc = parse_bucket_label("2024-01-01 05:00:00", &Utc).unwrap();
        let local = parse_bucket_label("2024-01-01 05:00:00", &berlin_winter).unwrap();
        assert_eq!(utc - local, 3_600_000);
    }

    #[test]
    fn test_label_in_spring_forward_gap() {
        let naive = NaiveDate::from_ymd_opt(2024, 3, 31)
            .unwrap()
            .and_hms_opt(2, 30, 0)
            .unwrap();
        assert_eq!(
            parse_bucket_label("2024-03-31 02:30:00", &Berlin),
            Err(Error::NonexistentLocalTime(naive))
        );
    }

    #[test]
    fn test_ambiguous_label_takes_earlier_instant() {
        let local = parse_bucket_label("2024-10-27 02:30:00", &Berlin).unwrap();
        // still CEST (+02:00) on the first pass through 02:30
        let cest = parse_bucket_label("2024-10-27 00:30:00", &Utc).unwrap();
        assert_eq!(local, cest);
    }

    #[test]
    fn test_garbage_label_is_rejected() {
        assert_eq!(
            parse_bucket_label("not a date", &Utc),
            Err(Error::InvalidLabel("not a date".to_string()))
        );
        assert!(parse_bucket_label("", &Utc).is_err());
        assert!(parse_bucket_label("2024-13-01 05:00:00", &Utc).is_err());
    }
}
