use std::collections::HashMap;

use super::{Assertion, Call, Subject};
use crate::prelude::*;

/// Host level error for a predicate call.
///
/// The originating [`AssertionErr`] or [`ConfigErr`] stays in the report,
/// reachable with [`error_stack::Report::downcast_ref`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum PredicateErr {
    /// The subject didn't satisfy the predicate.
    #[strum(serialize = "PredicateErr (AssertionFailed): the subject didn't satisfy the predicate.")]
    AssertionFailed,
    /// The predicate was called incorrectly, never inverted by negation.
    #[strum(serialize = "PredicateErr (Misconfigured): the predicate was called incorrectly.")]
    Misconfigured,
    /// No predicate is registered under the name.
    #[strum(serialize = "PredicateErr (Unregistered): no predicate registered under that name.")]
    Unregistered,
}

impl error_stack::Context for PredicateErr {}

/// A custom predicate that can be installed into a [`PredicateRegistry`].
pub trait Predicate: Send + Sync {
    /// Evaluate the predicate against `subject`.
    ///
    /// Arguments:
    /// - `subject`: The value under test.
    /// - `negated`: Whether the assertion is negated.
    /// - `args`: The positional arguments of the call.
    fn call(&self, subject: &dyn Subject, negated: bool, args: Call) -> RResult<(), PredicateErr>;
}

impl<F> Predicate for F
where
    F: Fn(&dyn Subject, bool, Call) -> RResult<(), PredicateErr> + Send + Sync,
{
    fn call(&self, subject: &dyn Subject, negated: bool, args: Call) -> RResult<(), PredicateErr> {
        self(subject, negated, args)
    }
}

/// Named custom predicates, the host side of predicate registration.
///
/// Populated once at setup, after which it's only read, so can be shared between threads behind an `Arc`.
#[derive(Default)]
pub struct PredicateRegistry {
    predicates: HashMap<&'static str, Box<dyn Predicate>>,
}

impl PredicateRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a plugin, i.e. a registration callback that adds its predicates.
    pub fn use_plugin(&mut self, plugin: impl FnOnce(&mut Self)) -> &mut Self {
        plugin(self);
        self
    }

    /// Register a predicate under `name`, replacing any existing predicate with that name.
    pub fn register(&mut self, name: &'static str, predicate: impl Predicate + 'static) -> &mut Self {
        if self.predicates.insert(name, Box::new(predicate)).is_some() {
            debug!(predicate = name, "Replaced existing predicate.");
        }
        self
    }

    /// Whether a predicate is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.predicates.contains_key(name)
    }

    /// Evaluate the predicate registered under `name` within `assertion`.
    ///
    /// Arguments:
    /// - `name`: The registered name of the predicate.
    /// - `assertion`: The assertion context, providing the subject and negation.
    /// - `args`: The positional arguments, e.g. `("eq", "2000-01-01T00:00:00Z", 1234)`.
    pub fn call<S: Subject>(
        &self,
        name: &str,
        assertion: &Assertion<S>,
        args: impl Into<Call>,
    ) -> RResult<(), PredicateErr> {
        let predicate = self.predicates.get(name).ok_or_else(|| {
            Report::new(PredicateErr::Unregistered)
                .attach_printable(format!("No predicate named '{}'.", name))
        })?;
        predicate.call(assertion.subject(), assertion.is_negated(), args.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assertion::expect;

    fn is_upper(subject: &dyn Subject, negated: bool, _args: Call) -> RResult<(), PredicateErr> {
        let cond = subject
            .as_text()
            .is_some_and(|s| s.chars().all(|c| c.is_uppercase()));
        if cond != negated {
            Ok(())
        } else {
            Err(Report::new(AssertionErr::new("not upper")).change_context(PredicateErr::AssertionFailed))
        }
    }

    #[test]
    fn test_register_and_call() {
        let mut registry = PredicateRegistry::new();
        registry.register("upper", is_upper);
        assert!(registry.contains("upper"));

        assert!(registry.call("upper", &expect("ABC"), ()).is_ok());
        assert!(registry.call("upper", &expect("abc").not(), ()).is_ok());

        let err = registry.call("upper", &expect("abc"), ()).unwrap_err();
        assert_eq!(err.current_context(), &PredicateErr::AssertionFailed);
        assert_eq!(
            err.downcast_ref::<AssertionErr>().map(|e| e.message()),
            Some("not upper")
        );
    }

    #[test]
    fn test_unregistered() {
        let registry = PredicateRegistry::new();
        let err = registry.call("missing", &expect("x"), ()).unwrap_err();
        assert_eq!(err.current_context(), &PredicateErr::Unregistered);
        assert!(format!("{:?}", err).contains("No predicate named 'missing'."));
    }

    #[test]
    fn test_use_plugin() {
        let mut registry = PredicateRegistry::new();
        registry.use_plugin(|r| {
            r.register("upper", is_upper);
        });
        assert!(registry.contains("upper"));
    }
}
