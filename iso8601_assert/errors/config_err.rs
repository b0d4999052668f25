use crate::compare::Relation;

/// The predicate was invoked incorrectly.
///
/// These are programmer mistakes rather than test outcomes, so they're never inverted by a negated assertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigErr {
    /// The configuration requires a margin but none was given.
    MarginRequired,
    /// The margin wasn't absent, zero or a positive integer.
    InvalidMargin {
        /// The offending value, as given.
        value: String,
        /// The type of the offending value.
        type_name: &'static str,
    },
    /// The expected date couldn't be parsed.
    InvalidExpectedDate {
        /// The offending value, as given.
        value: String,
    },
    /// The relation isn't one of the known tags.
    UnknownRelation {
        /// The offending value, json rendered.
        got: String,
    },
}

impl std::fmt::Display for ConfigErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigErr::MarginRequired => write!(f, "The \"margin\" option must be specified"),
            ConfigErr::InvalidMargin { value, type_name } => write!(
                f,
                "The \"margin\" option must be undefined, false, zero or a positive integer, got {} (type {})",
                value, type_name
            ),
            ConfigErr::InvalidExpectedDate { value } => {
                write!(f, "Expected date \"{}\" is not a valid ISO-8601 date", value)
            }
            ConfigErr::UnknownRelation { got } => write!(
                f,
                "The \"comparison\" argument must be one of {}; got {}",
                Relation::describe_all(),
                got
            ),
        }
    }
}

impl error_stack::Context for ConfigErr {}
