//! Markers identifying which handler operation was selected.

use std::fmt;

/// The outcome of a handler operation.
///
/// Each operation on [`Handler`](crate::Handler) selects exactly one marker,
/// so comparing markers is how callers observe which operation ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    /// The general operation, reached through `&dyn Variant`.
    Protocol,
    /// The operation specific to [`FirstVariant`](crate::FirstVariant).
    FirstClass,
    /// The operation specific to [`SecondVariant`](crate::SecondVariant).
    SecondClass,
}

impl Marker {
    /// The literal text printed for this marker.
    pub const fn as_str(self) -> &'static str {
        match self {
            Marker::Protocol => "Protocol",
            Marker::FirstClass => "First Class",
            Marker::SecondClass => "Second Class",
        }
    }

    /// Render the marker as a single output line (without the newline).
    pub fn render(self, style: OutputStyle) -> String {
        match style {
            OutputStyle::Plain => self.as_str().to_owned(),
            OutputStyle::Debug => format!("{:?}", self.as_str()),
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How markers are written to the output sink.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputStyle {
    /// The bare literal, e.g. `First Class`.
    #[default]
    Plain,
    /// A quoted string literal, e.g. `"First Class"`.
    Debug,
}
