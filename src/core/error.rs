//! Error types for the logging facade

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Invalid configuration with details
    ///
    /// The only error class that escapes to callers: a facade or pipeline
    /// must not be constructible in an inconsistent state.
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Sink delivery error with sink name
    #[error("Sink error in '{sink}': {message}")]
    SinkError { sink: String, message: String },

    /// Formatter error
    #[error("Formatter error: {0}")]
    FormatterError(String),
}

impl LoggerError {
    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a sink delivery error
    pub fn sink(sink: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::SinkError {
            sink: sink.into(),
            message: message.into(),
        }
    }

    /// Create a formatter error
    pub fn formatter(message: impl Into<String>) -> Self {
        LoggerError::FormatterError(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = LoggerError::config("pipeline", "context label must be non-empty");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));

        let err = LoggerError::sink("file", "disk full");
        assert!(matches!(err, LoggerError::SinkError { .. }));
    }

    #[test]
    fn test_error_display() {
        let err = LoggerError::config("facade", "no context label supplied");
        assert_eq!(
            err.to_string(),
            "Invalid configuration for facade: no context label supplied"
        );

        let err = LoggerError::sink("console", "stream closed");
        assert_eq!(err.to_string(), "Sink error in 'console': stream closed");
    }
}
