/// A macro for building `AnyErr` reports, optionally with a formatted printable attachment.
#[macro_export]
macro_rules! anyerr {
    () => {{
        $crate::errors::error_stack::Report::new($crate::errors::AnyErr)
    }};

    ($str:expr) => {{
        $crate::errors::error_stack::Report::new($crate::errors::AnyErr).attach_printable($str)
    }};

    ($str:expr, $($arg:expr),*) => {{
        $crate::errors::error_stack::Report::new($crate::errors::AnyErr).attach_printable(format!($str, $($arg),*))
    }};
}

/// When working in a function that cannot return a result, wrap a block in this macro to panic with the formatted error if it errors.
#[macro_export]
macro_rules! panic_on_err {
    ($closure:block) => {{
        match (|| -> Result<_, $crate::errors::error_stack::Report<$crate::errors::AnyErr>> { $closure })() {
            Ok(s) => s,
            Err(e) => {
                panic!("{:?}", e);
            }
        }
    }};
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    fn fails(reason: &str) -> RResult<(), AnyErr> {
        Err(anyerr!("failed because {}", reason))
    }

    #[test]
    fn test_anyerr_attaches_message() {
        let report = fails("of reasons").unwrap_err();
        assert!(format!("{:?}", report).contains("failed because of reasons"));
        assert!(format!("{:?}", anyerr!()).contains("AnyErr"));
    }

    #[test]
    fn test_panic_on_err_passes_through_ok() {
        let val = panic_on_err!({ Ok(5) });
        assert_eq!(val, 5);
    }

    #[test]
    #[should_panic(expected = "boom")]
    fn test_panic_on_err_panics() {
        panic_on_err!({
            fails("boom")?;
            Ok(())
        })
    }
}
