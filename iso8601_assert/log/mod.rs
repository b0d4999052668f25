mod setup;

pub use setup::{setup_stdout_logging, with_tmp_logging, CustomWriter};

#[cfg(test)]
mod tests {
    use parking_lot::Mutex;
    use rstest::*;
    use tracing::Level;

    use super::*;
    use crate::{compare::evaluate, plugin::Iso8601Config, prelude::*};

    const Y2K: &str = "2000-01-01T00:00:00Z";

    fn run_evaluations() {
        let config = Iso8601Config::default();
        assert!(evaluate(&Y2K, (Y2K,), &config).is_ok());
        assert!(evaluate(&"#invalid#", (Y2K,), &config).is_ok());
        assert!(evaluate(&Y2K, ("foo", Y2K), &config).is_err());
    }

    #[rstest]
    fn test_engine_logs(
        #[values(Level::DEBUG, Level::WARN)] level: Level,
    ) -> RResult<(), AnyErr> {
        // Separate buffers per case as cases can run in parallel:
        static DEBUG_LOGS: Mutex<Vec<String>> = parking_lot::const_mutex(Vec::new());
        static WARN_LOGS: Mutex<Vec<String>> = parking_lot::const_mutex(Vec::new());

        let logs = if level == Level::DEBUG {
            with_tmp_logging(
                level,
                |log: &[u8]| {
                    DEBUG_LOGS
                        .lock()
                        .push(String::from_utf8_lossy(log).trim().to_string())
                },
                run_evaluations,
            );
            DEBUG_LOGS.lock().clone()
        } else {
            with_tmp_logging(
                level,
                |log: &[u8]| {
                    WARN_LOGS
                        .lock()
                        .push(String::from_utf8_lossy(log).trim().to_string())
                },
                run_evaluations,
            );
            WARN_LOGS.lock().clone()
        };

        let warned = logs
            .iter()
            .filter(|log| log.contains("iso8601 predicate called incorrectly."))
            .collect::<Vec<_>>();
        assert_eq!(warned.len(), 1, "{:?}", logs);
        assert!(warned[0].contains("WARN"));
        assert!(warned[0].contains("got \"foo\""), "{}", warned[0]);

        let debugged = logs.iter().filter(|log| log.contains("DEBUG")).count();
        if level == Level::DEBUG {
            assert!(logs
                .iter()
                .any(|log| log.contains("Compared 2000-01-01 00:00:00 +00:00 with 2000-01-01 00:00:00 +00:00.")));
            assert!(logs
                .iter()
                .any(|log| log.contains("Subject is not a valid ISO-8601 date string.")));
            assert_eq!(debugged, 2, "{:?}", logs);
        } else {
            assert_eq!(debugged, 0, "{:?}", logs);
        }
        Ok(())
    }

    #[test]
    fn test_custom_writer_passes_bytes_through() -> RResult<(), AnyErr> {
        static WRITTEN: Mutex<Vec<u8>> = parking_lot::const_mutex(Vec::new());

        let mut writer = CustomWriter::new(|bytes| WRITTEN.lock().extend_from_slice(bytes));
        std::io::Write::write_all(&mut writer, b"hello").change_context(AnyErr)?;
        assert_eq!(WRITTEN.lock().as_slice(), b"hello");
        Ok(())
    }
}
