//! Formatter pipeline
//!
//! An ordered sequence of pure transforms turning a [`LogEvent`] into a
//! [`RenderedLine`]. The standard order is Colorize, Label, Timestamp,
//! Splat, with the render template applied last:
//!
//! ```text
//! [<timestamp>]-<level> (<context>): <message>
//! ```

use super::splat::interpolate;
use super::timestamp::TimestampFormat;
use crate::core::{FieldValue, LogEvent, LoggerError, RecordMeta, RenderedLine, Result};
use chrono::Utc;

/// Working state threaded through the stages of one render pass
#[derive(Debug, Clone, Default)]
pub struct RenderFrame {
    pub message: String,
    pub timestamp: Option<String>,
    pub label: Option<String>,
    pub style: Option<colored::Color>,
    pub extras: Vec<FieldValue>,
}

/// One pure transform step in the formatting sequence
#[derive(Debug, Clone)]
pub enum FormatStage {
    /// Map severity to an advisory styling hint; never touches the message
    Colorize,
    /// Inject the context label bound at pipeline construction
    Label(String),
    /// Stamp a formatted timestamp if the event does not already carry one
    Timestamp(TimestampFormat),
    /// Printf-style merge of the event's extra arguments into the message
    Splat,
}

impl FormatStage {
    fn apply(&self, frame: &mut RenderFrame, event: &LogEvent) {
        match self {
            FormatStage::Colorize => {
                frame.style = Some(event.level.color_code());
            }
            FormatStage::Label(label) => {
                frame.label = Some(label.clone());
            }
            FormatStage::Timestamp(format) => {
                if frame.timestamp.is_none() {
                    let at = event.timestamp.unwrap_or_else(Utc::now);
                    frame.timestamp = Some(format.format(&at));
                }
            }
            FormatStage::Splat => {
                let (message, extras) = interpolate(&frame.message, &event.extra);
                frame.message = message;
                frame.extras = extras;
            }
        }
    }
}

/// The composed formatting pipeline owned by a facade.
///
/// Not constructible without a non-empty context label; that is a
/// configuration error surfaced at construction, never at log time.
#[derive(Debug, Clone)]
pub struct Pipeline {
    stages: Vec<FormatStage>,
}

impl Pipeline {
    /// Build the standard five-step pipeline for a context label
    pub fn standard(label: &str, timestamp_format: TimestampFormat) -> Result<Self> {
        if label.trim().is_empty() {
            return Err(LoggerError::config(
                "pipeline",
                "context label must be non-empty",
            ));
        }
        Ok(Self {
            stages: vec![
                FormatStage::Colorize,
                FormatStage::Label(label.to_string()),
                FormatStage::Timestamp(timestamp_format),
                FormatStage::Splat,
            ],
        })
    }

    /// Replace the timestamp format while keeping the bound label.
    ///
    /// Infallible, so runtime re-configuration cannot leave the pipeline
    /// in an invalid state.
    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        for stage in &mut self.stages {
            if let FormatStage::Timestamp(f) = stage {
                *f = format.clone();
            }
        }
        self
    }

    /// Run the stages left-to-right and apply the render template
    pub fn run(&self, event: &LogEvent) -> RenderedLine {
        let mut frame = RenderFrame {
            message: event.message.clone(),
            ..RenderFrame::default()
        };
        for stage in &self.stages {
            stage.apply(&mut frame, event);
        }
        Self::render(frame, event)
    }

    /// Terminal stage: produce the final display string plus metadata
    fn render(frame: RenderFrame, event: &LogEvent) -> RenderedLine {
        let timestamp = frame.timestamp.unwrap_or_default();
        let label = frame.label.unwrap_or_else(|| event.context.clone());
        let line = format!(
            "[{}]-{} ({}): {}",
            timestamp,
            event.level.as_str(),
            label,
            frame.message
        );
        RenderedLine {
            line,
            style: frame.style,
            meta: RecordMeta {
                level: event.level,
                timestamp,
                context: event.context.clone(),
                extras: frame.extras,
            },
        }
    }
}
