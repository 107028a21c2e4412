//! Reporting macros that capture the caller's location

/// Build a [`CallSite`](crate::CallSite) for the place this macro is invoked
///
/// Captures `file!()`, `line!()` and the name of the enclosing function.
/// The function is recorded by its bare name (`run`, not `run()`), and a
/// closure or async block reports the function it is written in. Build the
/// `CallSite` by hand when another spelling is wanted.
#[macro_export]
macro_rules! call_site {
    () => {{
        fn __here() {}
        fn __type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        $crate::CallSite::new(
            file!(),
            $crate::types::enclosing_function(__type_name_of(__here)),
            line!(),
        )
    }};
}

/// Append an entry, capturing the caller's location
///
/// Pieces are any `Display` values (strings, errors, numbers) and are joined
/// with no separator. Severity defaults to `Normal`. When the logger drops
/// the severity (`Debug` outside a debug build) neither the pieces nor the
/// call site are evaluated into text.
///
/// ```no_run
/// # use applog::{report, Logger, Severity};
/// # let log = Logger::default();
/// # let err = std::io::Error::new(std::io::ErrorKind::Other, "boom");
/// report!(log, "cache warmed in ", 42, "ms");
/// report!(log, severity = Severity::Error, "upload failed: ", err);
/// ```
#[macro_export]
macro_rules! report {
    ($logger:expr, severity = $severity:expr, $($piece:expr),+ $(,)?) => {{
        let logger = &$logger;
        let severity: $crate::Severity = $severity;
        if logger.accepts(severity) {
            logger.report_pieces(
                [$($crate::Content::describe(&$piece)),+],
                severity,
                &$crate::call_site!(),
            );
        }
    }};
    ($logger:expr, $($piece:expr),+ $(,)?) => {
        $crate::report!($logger, severity = $crate::Severity::Normal, $($piece),+)
    };
}

/// `report!` with `Severity::Critical`
#[macro_export]
macro_rules! report_critical {
    ($logger:expr, $($piece:expr),+ $(,)?) => {
        $crate::report!($logger, severity = $crate::Severity::Critical, $($piece),+)
    };
}

/// `report!` with `Severity::Error`
#[macro_export]
macro_rules! report_error {
    ($logger:expr, $($piece:expr),+ $(,)?) => {
        $crate::report!($logger, severity = $crate::Severity::Error, $($piece),+)
    };
}

/// `report!` with `Severity::Debug`; dropped unless the logger is in a debug build
#[macro_export]
macro_rules! report_debug {
    ($logger:expr, $($piece:expr),+ $(,)?) => {
        $crate::report!($logger, severity = $crate::Severity::Debug, $($piece),+)
    };
}
