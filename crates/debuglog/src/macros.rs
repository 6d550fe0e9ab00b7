//! crates/debuglog/src/macros.rs
//! Call-site macros.
//!
//! The level macros capture the caller with [`caller!`](crate::caller) and
//! check the level before any argument is evaluated, so a disabled call
//! costs one threshold comparison. By default they log through the
//! process-wide [`logger()`](crate::logger); prefix the arguments with
//! `logger: <expr>;` to use a specific [`Logger`](crate::Logger) instead.

/// Captures the enclosing function as a [`CallerContext`](crate::CallerContext).
///
/// ```
/// struct Door;
///
/// impl Door {
///     fn open(&self) -> debuglog::CallerContext {
///         debuglog::caller!()
///     }
/// }
///
/// assert_eq!(Door.open().label(), "Door.open: ");
/// ```
#[macro_export]
macro_rules! caller {
    () => {{
        fn __debuglog_caller() {}
        $crate::CallerContext::from_path($crate::__private::type_name_of(__debuglog_caller))
    }};
}

/// Name of the enclosing function.
#[macro_export]
macro_rules! current_method_name {
    () => {
        $crate::caller!().method_name()
    };
}

/// `"Type.Function"` for the enclosing function.
#[macro_export]
macro_rules! current_class_and_method {
    () => {
        $crate::caller!().class_and_method()
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __log_values {
    ($logger:expr, $severity:expr; $($value:expr),*) => {{
        let logger = &$logger;
        let severity = $severity;
        if logger.enabled(severity) {
            logger.log_values(
                severity,
                &$crate::caller!(),
                &[$(&$value as &dyn $crate::Loggable),*],
            );
        }
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __log_formatted {
    ($logger:expr, $severity:expr; $template:expr $(, $arg:expr)*) => {{
        let logger = &$logger;
        let severity = $severity;
        if logger.enabled(severity) {
            logger.log_formatted(
                severity,
                &$crate::caller!(),
                $template,
                &[$(&$arg as &dyn $crate::Loggable),*],
            )
        } else {
            ::core::result::Result::<(), $crate::FormatError>::Ok(())
        }
    }};
}

/// Logs values at [`Severity::Trace`](crate::Severity::Trace).
#[macro_export]
macro_rules! trace {
    (logger: $logger:expr; $($value:expr),* $(,)?) => {
        $crate::__log_values!($logger, $crate::Severity::Trace; $($value),*)
    };
    ($($value:expr),* $(,)?) => {
        $crate::__log_values!($crate::logger(), $crate::Severity::Trace; $($value),*)
    };
}

/// Logs values at [`Severity::Info`](crate::Severity::Info).
///
/// ```
/// use std::sync::Arc;
/// use debuglog::{CaptureSink, FixedBuildMode, Logger};
///
/// let capture = Arc::new(CaptureSink::new());
/// let logger = Logger::builder()
///     .sink(Arc::clone(&capture))
///     .build_mode_source(FixedBuildMode(true))
///     .build();
///
/// fn spawn(logger: &Logger) {
///     debuglog::info!(logger: logger; "spawned", vec![1, 2]);
/// }
/// spawn(&logger);
///
/// assert!(capture.texts()[0].ends_with("spawn: spawned | [ 1, 2 ]"));
/// ```
#[macro_export]
macro_rules! info {
    (logger: $logger:expr; $($value:expr),* $(,)?) => {
        $crate::__log_values!($logger, $crate::Severity::Info; $($value),*)
    };
    ($($value:expr),* $(,)?) => {
        $crate::__log_values!($crate::logger(), $crate::Severity::Info; $($value),*)
    };
}

/// Same as [`info!`](crate::info).
#[macro_export]
macro_rules! log {
    ($($tt:tt)*) => {
        $crate::info!($($tt)*)
    };
}

/// Logs values at [`Severity::Warning`](crate::Severity::Warning).
#[macro_export]
macro_rules! warn {
    (logger: $logger:expr; $($value:expr),* $(,)?) => {
        $crate::__log_values!($logger, $crate::Severity::Warning; $($value),*)
    };
    ($($value:expr),* $(,)?) => {
        $crate::__log_values!($crate::logger(), $crate::Severity::Warning; $($value),*)
    };
}

/// Logs values at [`Severity::Error`](crate::Severity::Error).
#[macro_export]
macro_rules! error {
    (logger: $logger:expr; $($value:expr),* $(,)?) => {
        $crate::__log_values!($logger, $crate::Severity::Error; $($value),*)
    };
    ($($value:expr),* $(,)?) => {
        $crate::__log_values!($crate::logger(), $crate::Severity::Error; $($value),*)
    };
}

/// Formatted log at [`Severity::Trace`](crate::Severity::Trace).
///
/// Evaluates to `Result<(), FormatError>`.
#[macro_export]
macro_rules! trace_fmt {
    (logger: $logger:expr; $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::__log_formatted!($logger, $crate::Severity::Trace; $template $(, $arg)*)
    };
    ($template:expr $(, $arg:expr)* $(,)?) => {
        $crate::__log_formatted!($crate::logger(), $crate::Severity::Trace; $template $(, $arg)*)
    };
}

/// Formatted log at [`Severity::Info`](crate::Severity::Info).
///
/// Evaluates to `Result<(), FormatError>`; a template referring to a
/// missing argument is an error when the level is enabled.
///
/// ```
/// use std::sync::Arc;
/// use debuglog::{CaptureSink, FixedBuildMode, Logger};
///
/// let capture = Arc::new(CaptureSink::new());
/// let logger = Logger::builder()
///     .sink(Arc::clone(&capture))
///     .build_mode_source(FixedBuildMode(true))
///     .build();
///
/// debuglog::info_fmt!(logger: logger; "{0} of {1}", 3, 5)?;
/// assert!(debuglog::info_fmt!(logger: logger; "{0} of {1}", 3).is_err());
///
/// assert_eq!(capture.len(), 1);
/// assert!(capture.texts()[0].ends_with("3 of 5"));
/// # Ok::<(), debuglog::FormatError>(())
/// ```
#[macro_export]
macro_rules! info_fmt {
    (logger: $logger:expr; $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::__log_formatted!($logger, $crate::Severity::Info; $template $(, $arg)*)
    };
    ($template:expr $(, $arg:expr)* $(,)?) => {
        $crate::__log_formatted!($crate::logger(), $crate::Severity::Info; $template $(, $arg)*)
    };
}

/// Formatted log at [`Severity::Warning`](crate::Severity::Warning).
///
/// Evaluates to `Result<(), FormatError>`.
#[macro_export]
macro_rules! warn_fmt {
    (logger: $logger:expr; $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::__log_formatted!($logger, $crate::Severity::Warning; $template $(, $arg)*)
    };
    ($template:expr $(, $arg:expr)* $(,)?) => {
        $crate::__log_formatted!($crate::logger(), $crate::Severity::Warning; $template $(, $arg)*)
    };
}

/// Formatted log at [`Severity::Error`](crate::Severity::Error).
///
/// Evaluates to `Result<(), FormatError>`.
#[macro_export]
macro_rules! error_fmt {
    (logger: $logger:expr; $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::__log_formatted!($logger, $crate::Severity::Error; $template $(, $arg)*)
    };
    ($template:expr $(, $arg:expr)* $(,)?) => {
        $crate::__log_formatted!($crate::logger(), $crate::Severity::Error; $template $(, $arg)*)
    };
}
