//! Level providers, process-wide defaults, and runtime options
//!
//! The active minimum severity comes from an external collaborator, modeled
//! as the [`LevelProvider`] trait. Process-wide defaults are explicit,
//! set-once state: they affect facades constructed afterward and never
//! retroactively alter existing ones.

use super::severity::Severity;
use super::sink::SinkBinding;
use crate::format::TimestampFormat;
use std::sync::OnceLock;

/// External collaborator supplying the initial minimum severity
pub trait LevelProvider: Send + Sync {
    fn min_severity(&self) -> Severity;
}

/// Fixed severity, for tests and programmatic configuration
pub struct FixedLevel(pub Severity);

impl LevelProvider for FixedLevel {
    fn min_severity(&self) -> Severity {
        self.0
    }
}

/// Reads the severity from an environment variable.
///
/// An unset or unrecognized value falls back to `Info`.
pub struct EnvLevel {
    var: String,
}

impl EnvLevel {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl Default for EnvLevel {
    fn default() -> Self {
        Self::new("LOG_LEVEL")
    }
}

impl LevelProvider for EnvLevel {
    fn min_severity(&self) -> Severity {
        std::env::var(&self.var)
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }
}

/// Defaults applied to facades constructed with [`ContextLogger::new`]
///
/// [`ContextLogger::new`]: crate::core::facade::ContextLogger::new
#[derive(Debug, Clone)]
pub struct GlobalDefaults {
    pub min_severity: Severity,
    pub timestamp_format: TimestampFormat,
    pub use_colors: bool,
}

impl Default for GlobalDefaults {
    fn default() -> Self {
        Self {
            min_severity: Severity::Info,
            timestamp_format: TimestampFormat::default(),
            use_colors: true,
        }
    }
}

static GLOBAL_DEFAULTS: OnceLock<GlobalDefaults> = OnceLock::new();

/// Install process-wide defaults, once, before the first facade is built.
///
/// Returns `false` if defaults were already set; the first write wins.
pub fn set_global_defaults(defaults: GlobalDefaults) -> bool {
    GLOBAL_DEFAULTS.set(defaults).is_ok()
}

/// Current process-wide defaults (built-in values if never set)
pub fn global_defaults() -> GlobalDefaults {
    GLOBAL_DEFAULTS.get().cloned().unwrap_or_default()
}

/// Runtime re-configuration for an existing facade.
///
/// Unset fields leave the corresponding wiring untouched; set fields are
/// applied atomically relative to in-flight logging calls.
#[derive(Default)]
pub struct LoggerOptions {
    pub sinks: Option<Vec<SinkBinding>>,
    pub timestamp_format: Option<TimestampFormat>,
}

impl LoggerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the full sink wiring
    #[must_use = "builder methods return a new value"]
    pub fn with_sinks(mut self, sinks: Vec<SinkBinding>) -> Self {
        self.sinks = Some(sinks);
        self
    }

    /// Replace the timestamp format in the render pipeline
    #[must_use = "builder methods return a new value"]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = Some(format);
        self
    }
}
