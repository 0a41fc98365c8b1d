//! Console sink implementation

use crate::core::{RenderedLine, Result, Severity, Sink};
use colored::Colorize;

/// Writes rendered lines to the terminal.
///
/// Error records go to stderr, everything else to stdout. When colors are
/// enabled the advisory styling hint from the Colorize stage is applied to
/// the whole line; the hint never changes the line's content.
pub struct ConsoleSink {
    use_colors: bool,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self { use_colors: true }
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for ConsoleSink {
    fn write(&mut self, record: &RenderedLine) -> Result<()> {
        let output = match (self.use_colors, record.style) {
            (true, Some(color)) => record.line.as_str().color(color).to_string(),
            _ => record.line.clone(),
        };

        match record.meta.level {
            Severity::Error => eprintln!("{}", output),
            _ => println!("{}", output),
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        use std::io::Write;
        // Flush both streams since we write to both
        std::io::stdout().flush()?;
        std::io::stderr().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
