use crate::errors::AssertionErr;

/// The numeric comparisons a host assertion framework offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumOp {
    /// `actual == bound`
    Equal,
    /// `actual > bound`
    Above,
    /// `actual >= bound`
    AtLeast,
    /// `actual < bound`
    Below,
    /// `actual <= bound`
    AtMost,
}

impl NumOp {
    /// Whether the comparison holds.
    pub fn holds(self, actual: i64, bound: i64) -> bool {
        match self {
            NumOp::Equal => actual == bound,
            NumOp::Above => actual > bound,
            NumOp::AtLeast => actual >= bound,
            NumOp::Below => actual < bound,
            NumOp::AtMost => actual <= bound,
        }
    }

    fn describe(self) -> &'static str {
        match self {
            NumOp::Equal => "to equal",
            NumOp::Above => "to be above",
            NumOp::AtLeast => "to be at least",
            NumOp::Below => "to be below",
            NumOp::AtMost => "to be at most",
        }
    }
}

/// A numeric assertion on a single value, optionally prefixed with a higher level message on failure.
///
/// ```
/// use iso8601_assert::assertion::NumAssertion;
///
/// let num = NumAssertion::new(5).with_message("checking five");
/// assert!(num.at_most(5).is_ok());
/// assert_eq!(
///     num.above(5).unwrap_err().to_string(),
///     "checking five: expected 5 to be above 5"
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct NumAssertion<'a> {
    actual: i64,
    message: Option<&'a str>,
}

impl<'a> NumAssertion<'a> {
    /// Start an assertion on `actual`.
    pub fn new(actual: i64) -> Self {
        Self {
            actual,
            message: None,
        }
    }

    /// Prefix any failure with `message`.
    pub fn with_message(mut self, message: &'a str) -> Self {
        self.message = Some(message);
        self
    }

    /// Run a comparison against `bound`.
    pub fn check(&self, op: NumOp, bound: i64) -> Result<(), AssertionErr> {
        if op.holds(self.actual, bound) {
            return Ok(());
        }
        let err = AssertionErr::new(format!(
            "expected {} {} {}",
            self.actual,
            op.describe(),
            bound
        ));
        Err(match self.message {
            Some(message) => err.prefixed(message),
            None => err,
        })
    }

    /// Assert `actual == bound`.
    pub fn equal(&self, bound: i64) -> Result<(), AssertionErr> {
        self.check(NumOp::Equal, bound)
    }

    /// Assert `actual > bound`.
    pub fn above(&self, bound: i64) -> Result<(), AssertionErr> {
        self.check(NumOp::Above, bound)
    }

    /// Assert `actual >= bound`.
    pub fn at_least(&self, bound: i64) -> Result<(), AssertionErr> {
        self.check(NumOp::AtLeast, bound)
    }

    /// Assert `actual < bound`.
    pub fn below(&self, bound: i64) -> Result<(), AssertionErr> {
        self.check(NumOp::Below, bound)
    }

    /// Assert `actual <= bound`.
    pub fn at_most(&self, bound: i64) -> Result<(), AssertionErr> {
        self.check(NumOp::AtMost, bound)
    }
}

#[cfg(test)]
mod tests {
    use rstest::*;

    use super::*;

    #[rstest]
    #[case(NumOp::Equal, 1, 1, true)]
    #[case(NumOp::Equal, 1, 2, false)]
    #[case(NumOp::Above, 2, 1, true)]
    #[case(NumOp::Above, 1, 1, false)]
    #[case(NumOp::AtLeast, 1, 1, true)]
    #[case(NumOp::AtLeast, 0, 1, false)]
    #[case(NumOp::Below, 0, 1, true)]
    #[case(NumOp::Below, 1, 1, false)]
    #[case(NumOp::AtMost, 1, 1, true)]
    #[case(NumOp::AtMost, 2, 1, false)]
    fn test_num_op_holds(
        #[case] op: NumOp,
        #[case] actual: i64,
        #[case] bound: i64,
        #[case] holds: bool,
    ) {
        assert_eq!(op.holds(actual, bound), holds);
        assert_eq!(NumAssertion::new(actual).check(op, bound).is_ok(), holds);
    }

    #[test]
    fn test_failure_messages() {
        let num = NumAssertion::new(946684800000);
        assert_eq!(
            num.equal(915148800000).unwrap_err().message(),
            "expected 946684800000 to equal 915148800000"
        );
        assert_eq!(
            num.at_least(978307200000).unwrap_err().message(),
            "expected 946684800000 to be at least 978307200000"
        );
        assert_eq!(
            num.with_message("ctx")
                .below(946684800000)
                .unwrap_err()
                .message(),
            "ctx: expected 946684800000 to be below 946684800000"
        );
    }
}
