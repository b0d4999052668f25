use ::chrono::{DateTime, TimeZone};

/// The value under test in an assertion.
pub trait Subject {
    /// The text of the subject if it's a string, `None` for every other kind of value.
    fn as_text(&self) -> Option<&str>;

    /// How the subject is shown in assertion messages, strings are single quoted, e.g. `'2000-01-01'`,
    /// with embedded single quotes backslash escaped.
    fn inspect(&self) -> String;
}

impl Subject for str {
    fn as_text(&self) -> Option<&str> {
        Some(self)
    }

    fn inspect(&self) -> String {
        format!("'{}'", self.replace('\'', "\\'"))
    }
}

impl Subject for String {
    fn as_text(&self) -> Option<&str> {
        Some(self)
    }

    fn inspect(&self) -> String {
        self.as_str().inspect()
    }
}

impl<T: Subject + ?Sized> Subject for &T {
    fn as_text(&self) -> Option<&str> {
        (**self).as_text()
    }

    fn inspect(&self) -> String {
        (**self).inspect()
    }
}

impl<T: Subject> Subject for Option<T> {
    fn as_text(&self) -> Option<&str> {
        self.as_ref().and_then(|s| s.as_text())
    }

    fn inspect(&self) -> String {
        match self {
            Some(s) => s.inspect(),
            None => "undefined".to_string(),
        }
    }
}

impl Subject for serde_json::Value {
    fn as_text(&self) -> Option<&str> {
        self.as_str()
    }

    fn inspect(&self) -> String {
        match self {
            serde_json::Value::String(s) => s.inspect(),
            other => other.to_string(),
        }
    }
}

impl<Tz: TimeZone> Subject for DateTime<Tz>
where
    Tz::Offset: std::fmt::Display,
{
    fn as_text(&self) -> Option<&str> {
        None
    }

    fn inspect(&self) -> String {
        self.to_rfc3339()
    }
}

macro_rules! non_text_subject {
    ($($ty:ty),*) => {
        $(
            impl Subject for $ty {
                fn as_text(&self) -> Option<&str> {
                    None
                }

                fn inspect(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

non_text_subject!(bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);
