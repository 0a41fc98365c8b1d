//! Core facade types and traits

pub mod config;
pub mod error;
pub mod event;
pub mod facade;
pub mod field;
pub mod severity;
pub mod sink;
pub mod trace;

pub use config::{
    global_defaults, set_global_defaults, EnvLevel, FixedLevel, GlobalDefaults, LevelProvider,
    LoggerOptions,
};
pub use error::{LoggerError, Result};
pub use event::{LogEvent, RecordMeta, RenderedLine};
pub use facade::{ContextLogger, ContextLoggerBuilder};
pub use field::FieldValue;
pub use severity::Severity;
pub use sink::{Sink, SinkBinding};
pub use trace::{Trace, TRACE_NOT_PROVIDED};
