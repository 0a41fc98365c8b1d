//! # Context Logger
//!
//! A contextual logging facade: every facade instance is bound to a context
//! label, stamps records at call time, renders them through one composable
//! format pipeline, and delivers them to per-severity-filtered sinks.
//!
//! ## Features
//!
//! - **Context Binding**: one facade per logical subsystem, label attached to
//!   every record
//! - **Composable Formatting**: colorize, label, timestamp, and interpolation
//!   stages applied in a fixed order
//! - **Per-Sink Filtering**: each sink carries its own minimum severity
//! - **Caller Safety**: sink failures never crash or block the logging caller
//!
//! ## Rendered line format
//!
//! ```text
//! [<ISO-8601 timestamp>]-<level> (<context>): <message>
//! ```
//!
//! Error records append ` -> (<serialized trace>)` to the message, with the
//! literal marker `trace not provided !` when no trace was supplied.

pub mod core;
pub mod format;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        global_defaults, set_global_defaults, ContextLogger, ContextLoggerBuilder, EnvLevel,
        FieldValue, FixedLevel, GlobalDefaults, LevelProvider, LogEvent, LoggerError,
        LoggerOptions, RecordMeta, RenderedLine, Result, Severity, Sink, SinkBinding, Trace,
        TRACE_NOT_PROVIDED,
    };
    pub use crate::format::{FormatStage, Pipeline, TimestampFormat};
    pub use crate::sinks::{ConsoleSink, FileSink, MemorySink};
}

pub use crate::core::{
    global_defaults, set_global_defaults, ContextLogger, ContextLoggerBuilder, EnvLevel,
    FieldValue, FixedLevel, GlobalDefaults, LevelProvider, LogEvent, LoggerError, LoggerOptions,
    RecordMeta, RenderedLine, Result, Severity, Sink, SinkBinding, Trace, TRACE_NOT_PROVIDED,
};
pub use crate::format::{FormatStage, Pipeline, TimestampFormat};
pub use crate::sinks::{ConsoleSink, FileSink, MemorySink};
