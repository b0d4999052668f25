use super::Subject;
use crate::prelude::*;

/// Placeholder in assert messages replaced with the inspected subject.
const THIS: &str = "#{this}";

/// An assertion about a subject, the context every predicate runs in.
#[derive(Debug, Clone)]
pub struct Assertion<S> {
    subject: S,
    negated: bool,
}

/// Start an assertion about `subject`.
pub fn expect<S: Subject>(subject: S) -> Assertion<S> {
    Assertion {
        subject,
        negated: false,
    }
}

impl<S: Subject> Assertion<S> {
    /// Negate the assertion, toggles so `.not().not()` is positive again.
    pub fn not(mut self) -> Self {
        self.negated = !self.negated;
        self
    }

    /// The subject under test.
    pub fn subject(&self) -> &S {
        &self.subject
    }

    /// Whether the assertion has been negated.
    pub fn is_negated(&self) -> bool {
        self.negated
    }

    /// The negatable assert primitive.
    ///
    /// Passes when `cond` is true, or when it's false and the assertion is negated.
    /// `#{this}` in either message is replaced with the inspected subject.
    ///
    /// Arguments:
    /// - `cond`: The condition to check.
    /// - `msg`: The message when a positive assertion fails.
    /// - `negated_msg`: The message when a negated assertion fails.
    pub fn assert(&self, cond: bool, msg: &str, negated_msg: &str) -> RResult<(), AssertionErr> {
        if cond != self.negated {
            return Ok(());
        }
        let template = if self.negated { negated_msg } else { msg };
        Err(Report::new(AssertionErr::new(
            template.replace(THIS, &self.subject.inspect()),
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assert_respects_negation() {
        let positive = expect("abc");
        assert!(positive.assert(true, "yes #{this}", "no #{this}").is_ok());
        let err = positive.assert(false, "yes #{this}", "no #{this}").unwrap_err();
        assert_eq!(err.current_context().message(), "yes 'abc'");

        let negated = expect("abc").not();
        assert!(negated.is_negated());
        assert!(negated.assert(false, "yes #{this}", "no #{this}").is_ok());
        let err = negated.assert(true, "yes #{this}", "no #{this}").unwrap_err();
        assert_eq!(err.current_context().message(), "no 'abc'");

        assert!(!expect("abc").not().not().is_negated());
    }
}
