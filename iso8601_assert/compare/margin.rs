use crate::{assertion::Arg, prelude::*};

/// Resolve the raw margin argument to milliseconds.
///
/// Absent means zero unless a margin is required,
/// anything but a finite, non-negative, whole number is rejected.
///
/// Arguments:
/// - `raw`: The margin as passed to the predicate.
/// - `required`: Whether the configuration rejects calls without a margin.
pub fn resolve_margin(raw: &Arg, required: bool) -> RResult<u64, ConfigErr> {
    match raw {
        Arg::Absent if required => Err(Report::new(ConfigErr::MarginRequired)),
        Arg::Absent => Ok(0),
        Arg::Num(n) if n.is_finite() && *n >= 0.0 && n.fract() == 0.0 => Ok(*n as u64),
        other => Err(Report::new(ConfigErr::InvalidMargin {
            value: other.to_string(),
            type_name: other.type_name(),
        })),
    }
}
