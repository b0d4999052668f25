use ::chrono::{DateTime, FixedOffset};

use super::{
    message::{describe, Window},
    normalize_call, resolve_margin, Relation,
};
use crate::{
    assertion::{Arg, Call, NumAssertion, Subject},
    iso8601::{parse_iso8601_in, NaiveZone, ParsedInstant},
    plugin::Iso8601Config,
    prelude::*,
};

/// The result of evaluating a relation between two valid instants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonOutcome {
    /// The relation that was checked.
    pub relation: Relation,
    /// The margin in milliseconds, zero for an exact comparison.
    pub margin: u64,
    /// The subject's instant.
    pub actual: DateTime<FixedOffset>,
    /// The expected instant.
    pub expected: DateTime<FixedOffset>,
    /// Whether the relation held.
    pub passed: bool,
    /// What was expected, followed by the failing numeric check when `passed` is false.
    pub message: String,
}

/// What the engine concluded about a subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The subject isn't a string holding a valid ISO-8601 date-time, nothing was compared.
    Invalid,
    /// The subject is valid and was compared against the expected date-time.
    Compared(ComparisonOutcome),
}

impl Verdict {
    /// Whether the subject was valid and the relation held.
    pub fn passed(&self) -> bool {
        matches!(self, Verdict::Compared(outcome) if outcome.passed)
    }
}

/// Evaluate the `iso8601` predicate against a subject.
///
/// Checks run in a fixed order: the margin, the subject's validity, the expected date then the relation.
/// Only problems with how the predicate was called come back as errors,
/// the subject failing is reported through the [`Verdict`].
///
/// Arguments:
/// - `subject`: The value under test.
/// - `call`: The positional arguments, either call shape.
/// - `config`: The predicate's configuration.
pub fn evaluate(
    subject: &dyn Subject,
    call: impl Into<Call>,
    config: &Iso8601Config,
) -> RResult<Verdict, ConfigErr> {
    let result = evaluate_inner(subject, call.into(), config);
    if let Err(report) = &result {
        warn!(error = %report.current_context(), "iso8601 predicate called incorrectly.");
    }
    result
}

fn evaluate_inner(
    subject: &dyn Subject,
    call: Call,
    config: &Iso8601Config,
) -> RResult<Verdict, ConfigErr> {
    let call = normalize_call(call);
    let margin = resolve_margin(&call.margin, config.margin_required)?;

    let actual = match subject.as_text() {
        Some(text) => parse_iso8601_in(text, config.naive_zone),
        None => ParsedInstant::invalid(),
    };
    let Some(actual) = actual.datetime().copied() else {
        debug!(subject = %subject.inspect(), "Subject is not a valid ISO-8601 date string.");
        return Ok(Verdict::Invalid);
    };

    let expected = parse_expected(&call.expected, config.naive_zone)?;
    let relation = call
        .relation
        .as_str()
        .and_then(Relation::from_tag)
        .ok_or_else(|| {
            Report::new(ConfigErr::UnknownRelation {
                got: call.relation.to_json(),
            })
        })?;

    let outcome = compare(relation, margin, actual, expected);
    debug!(
        %relation,
        margin,
        passed = outcome.passed,
        "Compared {} with {}.",
        outcome.actual,
        outcome.expected
    );
    Ok(Verdict::Compared(outcome))
}

fn parse_expected(raw: &Arg, naive_zone: NaiveZone) -> RResult<DateTime<FixedOffset>, ConfigErr> {
    let instant = match raw {
        Arg::Str(s) => parse_iso8601_in(s, naive_zone),
        Arg::DateTime(dt) => ParsedInstant::from(*dt),
        Arg::Instant(instant) => *instant,
        _ => ParsedInstant::invalid(),
    };
    instant.datetime().copied().ok_or_else(|| {
        Report::new(ConfigErr::InvalidExpectedDate {
            value: raw.to_string(),
        })
    })
}

/// Each relation is one or two numeric checks, the first to fail provides the message.
fn compare(
    relation: Relation,
    margin: u64,
    actual: DateTime<FixedOffset>,
    expected: DateTime<FixedOffset>,
) -> ComparisonOutcome {
    let actual_ms = actual.timestamp_millis();
    let window = Window::new(expected.timestamp_millis(), margin);
    let message = describe(relation, margin, actual_ms, window);

    let num = NumAssertion::new(actual_ms).with_message(&message);
    let checked = match (relation, margin) {
        (Relation::Eq, 0) => num.equal(window.expected),
        (Relation::Eq, _) => num
            .at_least(window.lower)
            .and_then(|_| num.at_most(window.upper)),
        (Relation::Gt, 0) => num.above(window.expected),
        (Relation::Gt, _) => num
            .above(window.expected)
            .and_then(|_| num.at_most(window.upper)),
        (Relation::Gte, 0) => num.at_least(window.expected),
        (Relation::Gte, _) => num
            .at_least(window.expected)
            .and_then(|_| num.at_most(window.upper)),
        (Relation::Lt, 0) => num.below(window.expected),
        (Relation::Lt, _) => num
            .below(window.expected)
            .and_then(|_| num.at_least(window.lower)),
        (Relation::Lte, 0) => num.at_most(window.expected),
        (Relation::Lte, _) => num
            .at_most(window.expected)
            .and_then(|_| num.at_least(window.lower)),
    };

    let (passed, message) = match checked {
        Ok(()) => (true, message),
        Err(failure) => (false, failure.message().to_string()),
    };
    ComparisonOutcome {
        relation,
        margin,
        actual,
        expected,
        passed,
        message,
    }
}
