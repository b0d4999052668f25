mod args;
mod engine;
mod margin;
mod message;
mod relation;

pub use args::{normalize_call, ExpectedDate, Iso8601Args, NormalizedCall};
pub use engine::{evaluate, ComparisonOutcome, Verdict};
pub use margin::resolve_margin;
pub use relation::Relation;
