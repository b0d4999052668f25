mod chrono_formatting;

pub use chrono_formatting::*;
