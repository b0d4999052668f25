#![allow(clippy::module_inception)]
#![warn(clippy::disallowed_types)]
#![warn(missing_docs)]

//! iso8601_assert - An ISO-8601 date-time predicate for assertion frameworks.
//!
//! The `iso8601` predicate checks a subject is a string holding a valid ISO-8601 date-time,
//! and optionally compares it to an expected date-time with a relation (`eq`, `gt`, `gte`, `lt`, `lte`)
//! and a tolerance margin in milliseconds.
//!
//! ```
//! use iso8601_assert::{expect, Iso8601Args, Iso8601Ext};
//!
//! expect("2000-01-01T00:00:01Z")
//!     .iso8601(Iso8601Args::eq("2000-01-01T00:00:00Z").with_margin(1234))
//!     .unwrap();
//! ```

mod prelude;

/// The host assertion surface: subjects, negatable asserts, numeric primitives and the predicate registry.
pub mod assertion;
/// Chrono utilities
pub mod chrono;
/// Relation evaluation between a subject and an expected date-time.
pub mod compare;
/// Error handling utilities.
pub mod errors;
/// Strict ISO-8601 parsing.
pub mod iso8601;
/// Logging utilities
pub mod log;
/// Registration of the `iso8601` predicate and its configuration.
pub mod plugin;

#[cfg(test)]
mod testing;

pub use assertion::{expect, Arg, Assertion, PredicateErr, PredicateRegistry, Subject};
pub use compare::{ExpectedDate, Iso8601Args, Relation};
pub use errors::{AssertionErr, ConfigErr};
pub use iso8601::{parse_iso8601, ParsedInstant};
pub use plugin::{iso8601_plugin, Iso8601Config, Iso8601Ext, NaiveZone, ISO8601_PREDICATE};
