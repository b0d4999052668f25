use serde::{Deserialize, Serialize};

use crate::{
    assertion::{expect, Assertion, Call, Predicate, PredicateErr, PredicateRegistry, Subject},
    compare::{evaluate, Iso8601Args, Verdict},
    prelude::*,
};
pub use crate::iso8601::NaiveZone;

/// The name the predicate is registered under.
pub const ISO8601_PREDICATE: &str = "iso8601";

const VALID_MSG: &str = "expected #{this} to be a valid ISO-8601 date string";
const NOT_VALID_MSG: &str = "expected #{this} not to be a valid ISO-8601 date string";

/// Configuration of the `iso8601` predicate, fixed when the plugin is installed.
///
/// Decodes from camelCase json, missing keys take their defaults:
/// ```
/// use iso8601_assert::Iso8601Config;
///
/// let config = Iso8601Config::from_json(r#"{"marginRequired": true}"#).unwrap();
/// assert!(config.margin_required);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Iso8601Config {
    /// Reject every call that doesn't give a margin.
    pub margin_required: bool,
    /// How date-times without an offset are placed on the timeline.
    pub naive_zone: NaiveZone,
}

impl Iso8601Config {
    /// Set whether a margin must always be given.
    pub fn with_margin_required(mut self, margin_required: bool) -> Self {
        self.margin_required = margin_required;
        self
    }

    /// Set the zone offset-less date-times are read in.
    pub fn with_naive_zone(mut self, naive_zone: NaiveZone) -> Self {
        self.naive_zone = naive_zone;
        self
    }

    /// Decode from a json object, e.g. `{"marginRequired": true, "naiveZone": "local"}`.
    pub fn from_json(json: &str) -> RResult<Self, AnyErr> {
        serde_json::from_str(json)
            .change_context(AnyErr)
            .attach_printable("Failed to decode iso8601 predicate config.")
    }
}

/// The `iso8601` predicate, as installed into a [`PredicateRegistry`].
#[derive(Debug, Clone, Default)]
pub struct Iso8601Predicate {
    config: Iso8601Config,
}

impl Iso8601Predicate {
    /// Create the predicate with the given config.
    pub fn new(config: Iso8601Config) -> Self {
        Self { config }
    }
}

impl Predicate for Iso8601Predicate {
    fn call(&self, subject: &dyn Subject, negated: bool, args: Call) -> RResult<(), PredicateErr> {
        let assertion = expect(subject);
        let assertion = if negated { assertion.not() } else { assertion };
        run(&assertion, args, &self.config)
    }
}

/// Negation applies to the validity check alone, a negated call has nothing left to compare.
fn run(
    assertion: &Assertion<&dyn Subject>,
    args: Call,
    config: &Iso8601Config,
) -> RResult<(), PredicateErr> {
    let verdict =
        evaluate(*assertion.subject(), args, config).change_context(PredicateErr::Misconfigured)?;

    let valid = !matches!(verdict, Verdict::Invalid);
    assertion
        .assert(valid, VALID_MSG, NOT_VALID_MSG)
        .change_context(PredicateErr::AssertionFailed)?;

    match verdict {
        Verdict::Compared(outcome) if !outcome.passed && !assertion.is_negated() => {
            Err(Report::new(AssertionErr::new(outcome.message))
                .change_context(PredicateErr::AssertionFailed))
        }
        _ => Ok(()),
    }
}

/// Create the plugin installing the `iso8601` predicate, for [`PredicateRegistry::use_plugin`].
///
/// ```
/// use iso8601_assert::{expect, iso8601_plugin, Iso8601Config, PredicateRegistry, ISO8601_PREDICATE};
///
/// let mut registry = PredicateRegistry::new();
/// registry.use_plugin(iso8601_plugin(Iso8601Config::default()));
///
/// let assertion = expect("2000-01-01T00:00:01Z");
/// assert!(registry.call(ISO8601_PREDICATE, &assertion, ("gte", "2000-01-01T00:00:00Z")).is_ok());
/// ```
pub fn iso8601_plugin(config: Iso8601Config) -> impl FnOnce(&mut PredicateRegistry) {
    move |registry| {
        registry.register(ISO8601_PREDICATE, Iso8601Predicate::new(config));
    }
}

/// The `iso8601` predicate directly on an [`Assertion`], without going through a registry.
pub trait Iso8601Ext {
    /// Assert the subject is a valid ISO-8601 date string satisfying `args`, with the default config.
    fn iso8601(&self, args: impl Into<Iso8601Args>) -> RResult<(), PredicateErr>;

    /// Same as [`Iso8601Ext::iso8601`] with an explicit config.
    fn iso8601_with(
        &self,
        config: &Iso8601Config,
        args: impl Into<Iso8601Args>,
    ) -> RResult<(), PredicateErr>;
}

impl<S: Subject> Iso8601Ext for Assertion<S> {
    fn iso8601(&self, args: impl Into<Iso8601Args>) -> RResult<(), PredicateErr> {
        self.iso8601_with(&Iso8601Config::default(), args)
    }

    fn iso8601_with(
        &self,
        config: &Iso8601Config,
        args: impl Into<Iso8601Args>,
    ) -> RResult<(), PredicateErr> {
        let subject: &dyn Subject = self.subject();
        let assertion = expect(subject);
        let assertion = if self.is_negated() {
            assertion.not()
        } else {
            assertion
        };
        run(&assertion, Call::from(args.into()), config)
    }
}
