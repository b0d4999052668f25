/// A failed assertion about the subject under test.
///
/// Raised through the host's negatable assert primitive or one of the numeric comparison primitives,
/// this is the recoverable kind of failure: a test that didn't hold, not a misuse of the predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssertionErr {
    message: String,
}

impl AssertionErr {
    /// Create a new assertion failure from its user facing message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The user facing failure message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Prefix the message, e.g. with the higher level description of what was being checked.
    pub fn prefixed(self, prefix: &str) -> Self {
        Self {
            message: format!("{}: {}", prefix, self.message),
        }
    }
}

impl std::fmt::Display for AssertionErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl error_stack::Context for AssertionErr {}
