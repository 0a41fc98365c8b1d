//! Contextual logger facade
//!
//! The per-subsystem object applications hold. Each facade is bound to a
//! context label at construction, owns one formatter pipeline and a set of
//! sink bindings, and exposes `log`, `warn`, `debug`, and `error`. Logging
//! calls are synchronous and fire-and-forget: nothing that happens past the
//! facade boundary is allowed to crash or block the caller.

use super::config::{global_defaults, LevelProvider, LoggerOptions};
use super::error::Result;
use super::event::LogEvent;
use super::field::FieldValue;
use super::severity::Severity;
use super::sink::{Sink, SinkBinding};
use super::trace::Trace;
use crate::format::{Pipeline, TimestampFormat};
use crate::sinks::ConsoleSink;
use parking_lot::RwLock;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

/// Configuration observed as a unit by every logging call.
///
/// `override_options` swaps fields under the write lock, so an in-flight
/// call sees either the old or the new wiring in full, never a mix.
struct LoggerCore {
    pipeline: Pipeline,
    sinks: Vec<SinkBinding>,
}

pub struct ContextLogger {
    context: String,
    core: Arc<RwLock<LoggerCore>>,
}

impl ContextLogger {
    /// Create a facade with the process-wide defaults: one console sink at
    /// the default minimum severity.
    ///
    /// Fails if `context` is empty; a facade must not be constructible
    /// without a context label.
    pub fn new(context: impl Into<String>) -> Result<Self> {
        let defaults = global_defaults();
        Self::builder(context)
            .timestamp_format(defaults.timestamp_format.clone())
            .sink(
                defaults.min_severity,
                ConsoleSink::with_colors(defaults.use_colors),
            )
            .build()
    }

    /// Create a builder for a facade bound to `context`
    #[must_use]
    pub fn builder(context: impl Into<String>) -> ContextLoggerBuilder {
        ContextLoggerBuilder::new(context)
    }

    /// The context label this facade logs on behalf of
    pub fn context(&self) -> &str {
        &self.context
    }

    /// Log at Info severity.
    ///
    /// `message` may contain `%s`/`%d`/`%j` placeholders filled from `args`;
    /// leftover arguments travel as structured extras.
    pub fn log(&self, message: impl Into<String>, args: Vec<FieldValue>) {
        self.emit(Severity::Info, message, args);
    }

    /// Log at Warn severity, same shape as [`log`](Self::log)
    pub fn warn(&self, message: impl Into<String>, args: Vec<FieldValue>) {
        self.emit(Severity::Warn, message, args);
    }

    /// Log at Debug severity, same shape as [`log`](Self::log)
    pub fn debug(&self, message: impl Into<String>, args: Vec<FieldValue>) {
        self.emit(Severity::Debug, message, args);
    }

    /// Log at Error severity with an explicit trace.
    ///
    /// The rendered body is `<message> -> (<trace>)`: structured traces
    /// serialize to deterministic multi-line JSON, an absent trace renders
    /// the literal `trace not provided !` marker.
    pub fn error(&self, message: impl Into<String>, trace: Trace) {
        let body = format!(
            "{} -> ({})",
            LogEvent::sanitize_message(&message.into()),
            trace.render()
        );
        let event = LogEvent::raw(Severity::Error, body, &self.context, Vec::new());
        self.dispatch(&event);
    }

    /// Re-wire sinks and/or format settings at runtime.
    ///
    /// Applied under the write lock; concurrent overrides are
    /// last-write-wins.
    pub fn override_options(&self, options: LoggerOptions) {
        let mut core = self.core.write();
        if let Some(format) = options.timestamp_format {
            let updated = core.pipeline.clone().with_timestamp_format(format);
            core.pipeline = updated;
        }
        if let Some(sinks) = options.sinks {
            core.sinks = sinks;
        }
    }

    /// Flush every attached sink, propagating the first failure
    pub fn flush(&self) -> Result<()> {
        let mut core = self.core.write();
        for binding in core.sinks.iter_mut() {
            binding.sink.flush()?;
        }
        Ok(())
    }

    fn emit(&self, level: Severity, message: impl Into<String>, args: Vec<FieldValue>) {
        let event = LogEvent::new(level, message, &self.context, args);
        self.dispatch(&event);
    }

    /// Render once, then deliver to each passing sink independently.
    ///
    /// **Per-sink failure isolation**: a write error or panic in one sink is
    /// reported on stderr and the remaining sinks still receive the record.
    /// Nothing propagates back to the logging caller.
    fn dispatch(&self, event: &LogEvent) {
        let mut core = self.core.write();
        if !core.sinks.iter().any(|b| b.accepts(event.level)) {
            return;
        }
        let rendered = core.pipeline.run(event);

        for binding in core.sinks.iter_mut() {
            if !binding.accepts(event.level) {
                continue;
            }
            let sink: &mut Box<dyn Sink> = &mut binding.sink;
            let write_result = catch_unwind(AssertUnwindSafe(|| sink.write(&rendered)));
            match write_result {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    eprintln!("[LOGGER ERROR] Sink '{}' failed: {}", sink.name(), e);
                }
                Err(panic_info) => {
                    let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                        s.to_string()
                    } else if let Some(s) = panic_info.downcast_ref::<String>() {
                        s.clone()
                    } else {
                        "Unknown panic".to_string()
                    };
                    eprintln!(
                        "[LOGGER CRITICAL] Sink '{}' panicked: {}. \
                         Other sinks continue to function.",
                        sink.name(),
                        panic_msg
                    );
                }
            }
        }
    }
}

/// Builder for constructing a [`ContextLogger`] with a fluent API
///
/// # Example
/// ```
/// use context_logger::prelude::*;
///
/// let logger = ContextLogger::builder("AppModule")
///     .sink(Severity::Debug, ConsoleSink::new())
///     .timestamp_format(TimestampFormat::Iso8601)
///     .build()
///     .expect("non-empty context label");
/// logger.log("started", vec![]);
/// ```
pub struct ContextLoggerBuilder {
    context: String,
    timestamp_format: TimestampFormat,
    sinks: Vec<SinkBinding>,
    level_provider: Option<Box<dyn LevelProvider>>,
    use_colors: bool,
}

impl ContextLoggerBuilder {
    fn new(context: impl Into<String>) -> Self {
        Self {
            context: context.into(),
            timestamp_format: TimestampFormat::default(),
            sinks: Vec::new(),
            level_provider: None,
            use_colors: true,
        }
    }

    /// Attach a sink with its own minimum severity
    #[must_use = "builder methods return a new value"]
    pub fn sink(mut self, min_severity: Severity, sink: impl Sink + 'static) -> Self {
        self.sinks.push(SinkBinding::new(min_severity, sink));
        self
    }

    /// Set the timestamp format used by the render pipeline
    #[must_use = "builder methods return a new value"]
    pub fn timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Supply the level provider consulted when no sink was attached
    /// explicitly; the default console sink is created at its severity.
    #[must_use = "builder methods return a new value"]
    pub fn level_provider(mut self, provider: impl LevelProvider + 'static) -> Self {
        self.level_provider = Some(Box::new(provider));
        self
    }

    /// Enable or disable colors on the default console sink
    #[must_use = "builder methods return a new value"]
    pub fn colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    /// Build the facade.
    ///
    /// Fails with an `InvalidConfiguration` error if the context label is
    /// empty, before any log call can be attempted.
    pub fn build(self) -> Result<ContextLogger> {
        let pipeline = Pipeline::standard(&self.context, self.timestamp_format)?;

        let mut sinks = self.sinks;
        if sinks.is_empty() {
            let min_severity = self
                .level_provider
                .map(|p| p.min_severity())
                .unwrap_or_else(|| global_defaults().min_severity);
            sinks.push(SinkBinding::new(
                min_severity,
                ConsoleSink::with_colors(self.use_colors),
            ));
        }

        Ok(ContextLogger {
            context: self.context,
            core: Arc::new(RwLock::new(LoggerCore { pipeline, sinks })),
        })
    }
}
