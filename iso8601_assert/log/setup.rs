use tracing::{Level, Subscriber};

use crate::prelude::*;

/// Sends formatted log lines to a plain function, e.g. to capture logs in tests.
#[derive(Debug, Clone, Copy)]
pub struct CustomWriter {
    write: fn(&[u8]),
}

impl CustomWriter {
    /// Create the writer, `write` is passed the raw bytes of each formatted log.
    ///
    /// If needing a string, can do:
    ///
    /// `let log = String::from_utf8_lossy(log);`
    pub fn new(write: fn(&[u8])) -> Self {
        Self { write }
    }
}

/// Need the write trait for our write function.
impl std::io::Write for CustomWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        (self.write)(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

// Need to be able to convert into a tracing writer:
impl<'writer> tracing_subscriber::fmt::MakeWriter<'writer> for CustomWriter {
    type Writer = CustomWriter;

    fn make_writer(&self) -> Self::Writer {
        *self
    }
}

fn fmt_subscriber<W>(level: Level, include_color: bool, writer: W) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'writer> tracing_subscriber::fmt::MakeWriter<'writer> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_level(true)
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .with_ansi(include_color)
        .with_writer(writer)
        .finish()
}

/// Log to stdout for the rest of the process, at `level` and above.
///
/// Errors if a global subscriber has already been set.
pub fn setup_stdout_logging(level: Level) -> RResult<(), AnyErr> {
    tracing::subscriber::set_global_default(fmt_subscriber(level, true, std::io::stdout))
        .change_context(AnyErr)
        .attach_printable("A global logger has already been set.")
}

/// Run `f` with logs at `level` and above sent to `write`, uncolored.
///
/// Only applies to the current thread, the global logger is untouched.
///
/// Arguments:
/// - `level`: The minimum level to capture.
/// - `write`: Passed the raw bytes of each formatted log.
/// - `f`: The code to capture logs from.
pub fn with_tmp_logging<R>(level: Level, write: fn(&[u8]), f: impl FnOnce() -> R) -> R {
    tracing::subscriber::with_default(fmt_subscriber(level, false, CustomWriter::new(write)), f)
}
