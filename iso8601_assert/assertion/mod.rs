mod arg;
mod context;
mod numeric;
mod registry;
mod subject;

pub use arg::{Arg, Call};
pub use context::{expect, Assertion};
pub use numeric::{NumAssertion, NumOp};
pub use registry::{Predicate, PredicateErr, PredicateRegistry};
pub use subject::Subject;
