mod instant;
mod parse;

pub use instant::{NaiveZone, ParsedInstant};
pub use parse::{parse_iso8601, parse_iso8601_in};
