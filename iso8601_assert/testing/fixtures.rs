use tracing::Level;

use crate::{log::setup_stdout_logging, testing::prelude::*};

/// Include this in a test to turn on logging globally.
#[fixture]
#[once]
pub fn logging(#[default(Level::TRACE)] level: Level) {
    panic_on_err!({
        setup_stdout_logging(level)?;
        Ok::<(), Report<AnyErr>>(())
    })
}
