use ::chrono::{DateTime, FixedOffset, SecondsFormat, TimeZone, Utc};

use crate::iso8601::ParsedInstant;

/// A dynamically typed positional argument, as passed to a predicate through the registry.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    /// The argument wasn't given.
    Absent,
    /// An explicit null.
    Null,
    /// A boolean.
    Bool(bool),
    /// A number.
    Num(f64),
    /// A string.
    Str(String),
    /// A native date-time value.
    DateTime(DateTime<FixedOffset>),
    /// An already parsed instant, possibly invalid.
    Instant(ParsedInstant),
}

impl Arg {
    /// Whether the argument was left out.
    pub fn is_absent(&self) -> bool {
        matches!(self, Arg::Absent)
    }

    /// Whether the argument is a number.
    pub fn is_num(&self) -> bool {
        matches!(self, Arg::Num(_))
    }

    /// The text if the argument is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Arg::Str(s) => Some(s),
            _ => None,
        }
    }

    /// The kind of value, named the way a `typeof` check would.
    pub fn type_name(&self) -> &'static str {
        match self {
            Arg::Absent => "undefined",
            Arg::Null | Arg::DateTime(_) | Arg::Instant(_) => "object",
            Arg::Bool(_) => "boolean",
            Arg::Num(_) => "number",
            Arg::Str(_) => "string",
        }
    }

    /// A json rendering of the argument, strings come out quoted and escaped.
    pub fn to_json(&self) -> String {
        match self {
            Arg::Absent => "undefined".to_string(),
            Arg::Null => "null".to_string(),
            Arg::Bool(b) => b.to_string(),
            Arg::Num(n) if n.is_finite() => fmt_num(*n),
            Arg::Num(_) => "null".to_string(),
            Arg::Str(s) => serde_json::Value::String(s.clone()).to_string(),
            Arg::DateTime(dt) => format!("\"{}\"", fmt_json_dt(dt)),
            Arg::Instant(instant) => match instant.datetime() {
                Some(dt) => format!("\"{}\"", fmt_json_dt(dt)),
                None => "null".to_string(),
            },
        }
    }
}

fn fmt_num(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n == f64::INFINITY {
        "Infinity".to_string()
    } else if n == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else {
        n.to_string()
    }
}

fn fmt_json_dt(dt: &DateTime<FixedOffset>) -> String {
    dt.with_timezone(&Utc)
        .to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl std::fmt::Display for Arg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Arg::Absent => write!(f, "undefined"),
            Arg::Null => write!(f, "null"),
            Arg::Bool(b) => write!(f, "{}", b),
            Arg::Num(n) => write!(f, "{}", fmt_num(*n)),
            Arg::Str(s) => write!(f, "{}", s),
            Arg::DateTime(dt) => write!(f, "{}", dt.to_rfc3339()),
            Arg::Instant(instant) => write!(f, "{}", instant),
        }
    }
}

impl From<&str> for Arg {
    fn from(s: &str) -> Self {
        Arg::Str(s.to_string())
    }
}

impl From<String> for Arg {
    fn from(s: String) -> Self {
        Arg::Str(s)
    }
}

impl From<bool> for Arg {
    fn from(b: bool) -> Self {
        Arg::Bool(b)
    }
}

macro_rules! num_arg {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Arg {
                fn from(n: $ty) -> Self {
                    Arg::Num(n as f64)
                }
            }
        )*
    };
}

num_arg!(i32, i64, u32, u64, usize, f32, f64);

impl<Tz: TimeZone> From<DateTime<Tz>> for Arg {
    fn from(dt: DateTime<Tz>) -> Self {
        Arg::DateTime(dt.fixed_offset())
    }
}

impl From<ParsedInstant> for Arg {
    fn from(instant: ParsedInstant) -> Self {
        Arg::Instant(instant)
    }
}

impl<T: Into<Arg>> From<Option<T>> for Arg {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => Arg::Absent,
        }
    }
}

/// The positional arguments of a predicate call, missing trailing arguments are [`Arg::Absent`].
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    /// The first positional argument.
    pub first: Arg,
    /// The second positional argument.
    pub second: Arg,
    /// The third positional argument.
    pub third: Arg,
}

impl Call {
    /// Create a call from all three positions.
    pub fn new(first: impl Into<Arg>, second: impl Into<Arg>, third: impl Into<Arg>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
            third: third.into(),
        }
    }
}

impl From<()> for Call {
    fn from(_: ()) -> Self {
        Call::new(Arg::Absent, Arg::Absent, Arg::Absent)
    }
}

impl<A: Into<Arg>> From<(A,)> for Call {
    fn from((a,): (A,)) -> Self {
        Call::new(a, Arg::Absent, Arg::Absent)
    }
}

impl<A: Into<Arg>, B: Into<Arg>> From<(A, B)> for Call {
    fn from((a, b): (A, B)) -> Self {
        Call::new(a, b, Arg::Absent)
    }
}

impl<A: Into<Arg>, B: Into<Arg>, C: Into<Arg>> From<(A, B, C)> for Call {
    fn from((a, b, c): (A, B, C)) -> Self {
        Call::new(a, b, c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arg_rendering() {
        assert_eq!(Arg::from(-123).to_string(), "-123");
        assert_eq!(Arg::from(1.5).to_string(), "1.5");
        assert_eq!(Arg::Num(f64::NAN).to_string(), "NaN");
        assert_eq!(Arg::from("foo").to_string(), "foo");
        assert_eq!(Arg::from("foo").to_json(), "\"foo\"");
        assert_eq!(Arg::Absent.to_json(), "undefined");
        assert_eq!(Arg::Null.to_json(), "null");
        assert_eq!(
            Arg::from(Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap()).to_json(),
            "\"2000-01-01T00:00:00.000Z\""
        );
        assert_eq!(Arg::Instant(ParsedInstant::invalid()).to_string(), "Invalid date");
    }

    #[test]
    fn test_arg_type_names() {
        assert_eq!(Arg::Absent.type_name(), "undefined");
        assert_eq!(Arg::Null.type_name(), "object");
        assert_eq!(Arg::from(false).type_name(), "boolean");
        assert_eq!(Arg::from(1u64).type_name(), "number");
        assert_eq!(Arg::from("1").type_name(), "string");
    }

    #[test]
    fn test_call_from_tuples() {
        assert_eq!(
            Call::from(("2000-01-01",)),
            Call::new("2000-01-01", Arg::Absent, Arg::Absent)
        );
        assert_eq!(
            Call::from(("eq", "2000-01-01", 5)),
            Call {
                first: Arg::Str("eq".to_string()),
                second: Arg::Str("2000-01-01".to_string()),
                third: Arg::Num(5.0),
            }
        );
        assert_eq!(Call::from(("x", None::<u64>)).second, Arg::Absent);
    }
}
