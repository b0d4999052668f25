use super::Relation;
use crate::chrono::chrono_format_millis;

/// The acceptance window of a comparison, in unix milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Window {
    pub expected: i64,
    pub lower: i64,
    pub upper: i64,
}

impl Window {
    pub fn new(expected: i64, margin: u64) -> Self {
        let margin = i64::try_from(margin).unwrap_or(i64::MAX);
        Self {
            expected,
            lower: expected.saturating_sub(margin),
            upper: expected.saturating_add(margin),
        }
    }
}

/// Describe what the comparison expects, both instants rendered in UTC.
pub(super) fn describe(relation: Relation, margin: u64, actual: i64, window: Window) -> String {
    let actual = chrono_format_millis(actual);
    let expected = chrono_format_millis(window.expected);
    let lower = || chrono_format_millis(window.lower);
    let upper = || chrono_format_millis(window.upper);

    match (relation, margin) {
        (Relation::Eq, 0) => format!("expected {} to be the same as {}", actual, expected),
        (Relation::Eq, _) => format!(
            "expected {} to be between {} and {}",
            actual,
            lower(),
            upper()
        ),
        (Relation::Gt, 0) => format!("expected {} to be after {}", actual, expected),
        (Relation::Gt, _) => format!(
            "expected {} to be after {} but before or the same as {}",
            actual,
            expected,
            upper()
        ),
        (Relation::Gte, 0) => format!("expected {} to be after or the same as {}", actual, expected),
        (Relation::Gte, _) => format!(
            "expected {} to be after or the same as {} but before or the same as {}",
            actual,
            expected,
            upper()
        ),
        (Relation::Lt, 0) => format!("expected {} to be before {}", actual, expected),
        (Relation::Lt, _) => format!(
            "expected {} to be before {} but after or the same as {}",
            actual,
            expected,
            lower()
        ),
        (Relation::Lte, 0) => format!("expected {} to be before or the same as {}", actual, expected),
        (Relation::Lte, _) => format!(
            "expected {} to be before or the same as {} but after or the same as {}",
            actual,
            expected,
            lower()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const Y2K: i64 = 946684800000;

    #[test]
    fn test_window_saturates() {
        let window = Window::new(i64::MAX - 1, 10);
        assert_eq!(window.upper, i64::MAX);
        assert_eq!(window.lower, i64::MAX - 11);
        let window = Window::new(0, u64::MAX);
        assert_eq!((window.lower, window.upper), (-i64::MAX, i64::MAX));
    }

    #[test]
    fn test_describe_renders_bounds_in_utc() {
        let window = Window::new(Y2K, 1234);
        assert_eq!(
            describe(Relation::Eq, 1234, Y2K + 1235, window),
            "expected 2000-01-01T00:00:01Z to be between 1999-12-31T23:59:58Z and 2000-01-01T00:00:01Z"
        );
        assert_eq!(
            describe(Relation::Lte, 1234, Y2K, window),
            "expected 2000-01-01T00:00:00Z to be before or the same as 2000-01-01T00:00:00Z but after or the same as 1999-12-31T23:59:58Z"
        );
        assert_eq!(
            describe(Relation::Gt, 0, Y2K, Window::new(Y2K, 0)),
            "expected 2000-01-01T00:00:00Z to be after 2000-01-01T00:00:00Z"
        );
    }
}
