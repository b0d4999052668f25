use ::chrono::{DateTime, TimeZone, Utc};

/// What an instant renders as when it can't be represented.
pub const INVALID_DATE: &str = "Invalid date";

const UTC_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Formats a [`chrono::DateTime`] in UTC, to the second, with a `Z` suffix, e.g. `2000-01-01T00:00:00Z`.
///
/// Sub-second precision is truncated, never rounded.
/// The output doesn't depend on the host's timezone, making it safe to embed in assertion messages.
///
/// Arguments:
/// - `dt`: The datetime to format.
pub fn chrono_format_utc<Tz: TimeZone>(dt: &DateTime<Tz>) -> String {
    dt.with_timezone(&Utc).format(UTC_FORMAT).to_string()
}

/// Formats a millisecond unix timestamp the same way as [`chrono_format_utc`].
///
/// Arguments:
/// - `millis`: Milliseconds since the unix epoch, returns [`INVALID_DATE`] if out of chrono's range.
pub fn chrono_format_millis(millis: i64) -> String {
    match DateTime::<Utc>::from_timestamp_millis(millis) {
        Some(dt) => chrono_format_utc(&dt),
        None => INVALID_DATE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use ::chrono::FixedOffset;
    use rstest::*;

    use super::*;

    #[rstest]
    #[case(946684800000, "2000-01-01T00:00:00Z")]
    #[case(946684801234, "2000-01-01T00:00:01Z")]
    #[case(946684798766, "1999-12-31T23:59:58Z")]
    #[case(0, "1970-01-01T00:00:00Z")]
    #[case(i64::MAX, INVALID_DATE)]
    fn test_chrono_format_millis(#[case] millis: i64, #[case] expected: &str) {
        assert_eq!(chrono_format_millis(millis), expected);
    }

    #[test]
    fn test_chrono_format_utc_normalises_offset() {
        let offset = FixedOffset::east_opt(5 * 3600 + 30 * 60).unwrap();
        let dt = offset.with_ymd_and_hms(2000, 1, 1, 5, 30, 0).unwrap();
        assert_eq!(chrono_format_utc(&dt), "2000-01-01T00:00:00Z");
    }
}
