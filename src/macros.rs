//! Logging macros for ergonomic call sites.
//!
//! The facade methods take `(message, Vec<FieldValue>)`; these macros accept
//! a variadic argument list and convert each value through
//! `FieldValue::from`.
//!
//! # Examples
//!
//! ```
//! use context_logger::prelude::*;
//! use context_logger::log;
//!
//! let logger = ContextLogger::builder("Bootstrap")
//!     .sink(Severity::Debug, MemorySink::new())
//!     .build()
//!     .unwrap();
//!
//! log!(logger, "Server listening on port %d", 8080);
//! ```

/// Log an info-level message with interpolation arguments.
///
/// ```
/// # use context_logger::prelude::*;
/// # let logger = ContextLogger::builder("App").sink(Severity::Debug, MemorySink::new()).build().unwrap();
/// use context_logger::log;
/// log!(logger, "started");
/// log!(logger, "user=%s attempts=%d", "alice", 3);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $msg:expr $(, $arg:expr)* $(,)?) => {
        $logger.log($msg, vec![$($crate::FieldValue::from($arg)),*])
    };
}

/// Log a warn-level message with interpolation arguments.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $msg:expr $(, $arg:expr)* $(,)?) => {
        $logger.warn($msg, vec![$($crate::FieldValue::from($arg)),*])
    };
}

/// Log a debug-level message with interpolation arguments.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $msg:expr $(, $arg:expr)* $(,)?) => {
        $logger.debug($msg, vec![$($crate::FieldValue::from($arg)),*])
    };
}

/// Log an error-level message, with or without a trace.
///
/// ```
/// # use context_logger::prelude::*;
/// # let logger = ContextLogger::builder("App").sink(Severity::Debug, MemorySink::new()).build().unwrap();
/// use context_logger::error;
/// error!(logger, "connection lost");
/// error!(logger, "request failed", serde_json::json!({"status": 502}));
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $msg:expr) => {
        $logger.error($msg, $crate::Trace::Absent)
    };
    ($logger:expr, $msg:expr, $trace:expr) => {
        $logger.error($msg, $crate::Trace::from($trace))
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{ContextLogger, Severity};
    use crate::sinks::MemorySink;

    fn logger_with_memory() -> (ContextLogger, MemorySink) {
        let sink = MemorySink::new();
        let logger = ContextLogger::builder("MacroTest")
            .sink(Severity::Debug, sink.clone())
            .build()
            .expect("valid context label");
        (logger, sink)
    }

    #[test]
    fn test_log_macro() {
        let (logger, sink) = logger_with_memory();
        log!(logger, "plain");
        log!(logger, "user=%s", "alice");
        log!(logger, "a=%s b=%d", "x", 2,);

        let lines = sink.lines();
        assert!(lines[0].ends_with("plain"));
        assert!(lines[1].ends_with("user=alice"));
        assert!(lines[2].ends_with("a=x b=2"));
    }

    #[test]
    fn test_warn_and_debug_macros() {
        let (logger, sink) = logger_with_memory();
        warn!(logger, "retry %d of %d", 1, 3);
        debug!(logger, "state=%s", "idle");

        let records = sink.records();
        assert_eq!(records[0].meta.level, Severity::Warn);
        assert_eq!(records[1].meta.level, Severity::Debug);
    }

    #[test]
    fn test_error_macro() {
        let (logger, sink) = logger_with_memory();
        error!(logger, "no trace");
        error!(logger, "with trace", serde_json::json!({"code": 500}));

        let lines = sink.lines();
        assert!(lines[0].contains("no trace -> (trace not provided !)"));
        assert!(lines[1].contains("\"code\": 500"));
    }
}
