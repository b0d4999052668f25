use ::chrono::{DateTime, FixedOffset, TimeZone};

use super::Relation;
use crate::{
    assertion::{Arg, Call},
    iso8601::ParsedInstant,
};

/// The expected date-time, in any of the shapes the predicate accepts.
#[derive(Debug, Clone, PartialEq)]
pub enum ExpectedDate {
    /// An ISO-8601 string, parsed with the same rules as the subject.
    Text(String),
    /// A native date-time.
    DateTime(DateTime<FixedOffset>),
    /// An already parsed instant.
    Instant(ParsedInstant),
}

impl From<&str> for ExpectedDate {
    fn from(s: &str) -> Self {
        ExpectedDate::Text(s.to_string())
    }
}

impl From<String> for ExpectedDate {
    fn from(s: String) -> Self {
        ExpectedDate::Text(s)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for ExpectedDate {
    fn from(dt: DateTime<Tz>) -> Self {
        ExpectedDate::DateTime(dt.fixed_offset())
    }
}

impl From<ParsedInstant> for ExpectedDate {
    fn from(instant: ParsedInstant) -> Self {
        ExpectedDate::Instant(instant)
    }
}

impl From<ExpectedDate> for Arg {
    fn from(expected: ExpectedDate) -> Self {
        match expected {
            ExpectedDate::Text(s) => Arg::Str(s),
            ExpectedDate::DateTime(dt) => Arg::DateTime(dt),
            ExpectedDate::Instant(instant) => Arg::Instant(instant),
        }
    }
}

/// The structured form of an `iso8601` call.
///
/// ```
/// use iso8601_assert::{Iso8601Args, Relation};
///
/// // Within 1.5 seconds either side:
/// let args = Iso8601Args::eq("2000-01-01T00:00:00Z").with_margin(1500);
/// // After, but by no more than a minute:
/// let args = Iso8601Args::new(Relation::Gt, "2000-01-01T00:00:00Z").with_margin(60_000);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Iso8601Args {
    /// How the subject must relate to the expected date-time.
    pub relation: Relation,
    /// The date-time to compare against.
    pub expected: ExpectedDate,
    /// Tolerance in milliseconds, `None` being an exact comparison.
    pub margin: Option<u64>,
}

impl Iso8601Args {
    /// Compare using `relation`.
    pub fn new(relation: Relation, expected: impl Into<ExpectedDate>) -> Self {
        Self {
            relation,
            expected: expected.into(),
            margin: None,
        }
    }

    /// The subject must be the same instant as `expected`.
    pub fn eq(expected: impl Into<ExpectedDate>) -> Self {
        Self::new(Relation::Eq, expected)
    }

    /// Widen the comparison by `margin` milliseconds, in the direction the relation permits.
    pub fn with_margin(mut self, margin: u64) -> Self {
        self.margin = Some(margin);
        self
    }
}

impl From<&str> for Iso8601Args {
    fn from(expected: &str) -> Self {
        Self::eq(expected)
    }
}

impl From<String> for Iso8601Args {
    fn from(expected: String) -> Self {
        Self::eq(expected)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Iso8601Args {
    fn from(expected: DateTime<Tz>) -> Self {
        Self::eq(expected)
    }
}

impl From<ParsedInstant> for Iso8601Args {
    fn from(expected: ParsedInstant) -> Self {
        Self::eq(expected)
    }
}

impl From<ExpectedDate> for Iso8601Args {
    fn from(expected: ExpectedDate) -> Self {
        Self::eq(expected)
    }
}

impl From<Iso8601Args> for Call {
    fn from(args: Iso8601Args) -> Self {
        Call::new(args.relation.tag(), args.expected, args.margin)
    }
}

/// The canonical `(relation, expected, margin)` triple, none of it validated yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedCall {
    /// Should be a relation tag.
    pub relation: Arg,
    /// Should be an ISO-8601 string, date-time or parsed instant.
    pub expected: Arg,
    /// Should be absent or a non-negative whole number.
    pub margin: Arg,
}

/// Work out which of the two call shapes was used.
///
/// - `(relation, expected, margin)` when the first argument is a relation tag.
/// - `(expected, margin)` when it isn't, the second argument is absent or a number and the third is absent.
///   The relation is then `eq`.
/// - Anything else is taken positionally as given, leaving validation to report the bad relation.
pub fn normalize_call(call: Call) -> NormalizedCall {
    let Call {
        first,
        second,
        third,
    } = call;
    let first_is_tag = first.as_str().and_then(Relation::from_tag).is_some();

    if !first_is_tag
        && !first.is_absent()
        && (second.is_absent() || second.is_num())
        && third.is_absent()
    {
        NormalizedCall {
            relation: Arg::from(Relation::Eq.tag()),
            expected: first,
            margin: second,
        }
    } else {
        NormalizedCall {
            relation: first,
            expected: second,
            margin: third,
        }
    }
}
