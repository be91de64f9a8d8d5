//! Output sink for selected markers.

use redispatch_core::{Marker, OutputStyle, Result};
use std::io::Write;

/// Output configuration for a demo run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DemoConfig {
    style: OutputStyle,
}

impl DemoConfig {
    /// Set how markers are rendered.
    pub const fn with_style(mut self, style: OutputStyle) -> Self {
        self.style = style;
        self
    }

    /// The configured rendering style.
    pub const fn style(&self) -> OutputStyle {
        self.style
    }
}

/// Writes one marker per line to the wrapped writer.
#[derive(Debug)]
pub struct Console<W> {
    out: W,
    style: OutputStyle,
}

impl<W: Write> Console<W> {
    /// Create a console with the default plain style.
    pub fn new(out: W) -> Self {
        Self::with_config(out, DemoConfig::default())
    }

    /// Create a console rendering markers as `config` specifies.
    pub fn with_config(out: W, config: DemoConfig) -> Self {
        Self {
            out,
            style: config.style(),
        }
    }

    /// Write `marker` as a single line.
    pub fn emit(&mut self, marker: Marker) -> Result<()> {
        writeln!(self.out, "{}", marker.render(self.style))?;
        Ok(())
    }

    /// Flush the writer and hand it back.
    pub fn finish(mut self) -> Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}
