//! Formatting pipeline and supporting transforms

pub mod pipeline;
pub mod splat;
pub mod timestamp;

pub use pipeline::{FormatStage, Pipeline, RenderFrame};
pub use splat::interpolate;
pub use timestamp::TimestampFormat;
