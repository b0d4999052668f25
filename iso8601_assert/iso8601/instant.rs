use ::chrono::{DateTime, FixedOffset, Local, NaiveDateTime, Offset, TimeZone};
use serde::{Deserialize, Serialize};

use crate::chrono::{chrono_format_utc, INVALID_DATE};

/// How to place a date-time that carries no offset, e.g. `2000-01-01T00:00:00`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NaiveZone {
    /// Treat it as UTC, results don't depend on the machine running the assertion.
    #[default]
    Utc,
    /// Treat it as the machine's local time.
    Local,
}

impl NaiveZone {
    /// Pin a naive date-time to a fixed offset in this zone.
    ///
    /// For local times skipped by a DST transition, the offset in force just before the gap is used.
    pub fn resolve(self, ndt: &NaiveDateTime) -> DateTime<FixedOffset> {
        match self {
            NaiveZone::Utc => ndt.and_utc().fixed_offset(),
            NaiveZone::Local => match Local.from_local_datetime(ndt).earliest() {
                Some(dt) => dt.fixed_offset(),
                None => {
                    let offset = Local.offset_from_utc_datetime(ndt).fix();
                    DateTime::from_naive_utc_and_offset(*ndt - offset, offset)
                }
            },
        }
    }
}

/// A moment in time parsed from an ISO-8601 string, or the record that parsing failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedInstant {
    dt: Option<DateTime<FixedOffset>>,
}

impl ParsedInstant {
    /// An instant that failed to parse.
    pub fn invalid() -> Self {
        Self { dt: None }
    }

    /// Whether the source was a valid ISO-8601 date-time.
    pub fn is_valid(&self) -> bool {
        self.dt.is_some()
    }

    /// The parsed date-time, keeping the offset it was written with.
    pub fn datetime(&self) -> Option<&DateTime<FixedOffset>> {
        self.dt.as_ref()
    }

    /// Milliseconds since the unix epoch, `None` when invalid.
    pub fn timestamp_millis(&self) -> Option<i64> {
        self.dt.map(|dt| dt.timestamp_millis())
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for ParsedInstant {
    fn from(dt: DateTime<Tz>) -> Self {
        Self {
            dt: Some(dt.fixed_offset()),
        }
    }
}

impl std::fmt::Display for ParsedInstant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.dt {
            Some(dt) => write!(f, "{}", chrono_format_utc(dt)),
            None => write!(f, "{}", INVALID_DATE),
        }
    }
}

#[cfg(test)]
mod tests {
    use ::chrono::{NaiveDate, Utc};

    use super::*;

    #[test]
    fn test_display_is_utc() {
        let offset = FixedOffset::west_opt(8 * 3600).unwrap();
        let instant = ParsedInstant::from(offset.with_ymd_and_hms(1999, 12, 31, 16, 0, 0).unwrap());
        assert_eq!(instant.to_string(), "2000-01-01T00:00:00Z");
        assert_eq!(instant.timestamp_millis(), Some(946684800000));
        assert_eq!(ParsedInstant::invalid().to_string(), "Invalid date");
        assert_eq!(ParsedInstant::invalid().timestamp_millis(), None);
    }

    #[test]
    fn test_naive_zone_utc() {
        let ndt = NaiveDate::from_ymd_opt(2000, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(
            NaiveZone::Utc.resolve(&ndt).timestamp_millis(),
            Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap().timestamp_millis()
        );
    }

    #[test]
    fn test_naive_zone_local_round_trips_wall_clock() {
        let ndt = NaiveDate::from_ymd_opt(2000, 6, 15)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        assert_eq!(NaiveZone::Local.resolve(&ndt).naive_local(), ndt);
    }
}
