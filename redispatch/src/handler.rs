//! The handler used by the demonstration.

use redispatch_core::{FirstVariant, Handler, Marker, SecondVariant, Variant};

/// A stateless handler with a dedicated operation for every variant.
///
/// - [`Handler::handle`] selects [`Marker::Protocol`]
/// - [`Handler::handle_first`] selects [`Marker::FirstClass`]
/// - [`Handler::handle_second`] selects [`Marker::SecondClass`]
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoHandler;

impl DemoHandler {
    /// Create a new `DemoHandler`.
    pub const fn new() -> Self {
        Self
    }
}

impl Handler for DemoHandler {
    fn handle(&self, _variant: &dyn Variant) -> Marker {
        Marker::Protocol
    }

    fn handle_first(&self, _variant: &FirstVariant) -> Marker {
        Marker::FirstClass
    }

    fn handle_second(&self, _variant: &SecondVariant) -> Marker {
        Marker::SecondClass
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abstract_reference_selects_general() {
        let handler = DemoHandler::new();
        let first: &dyn Variant = &FirstVariant;
        let second: &dyn Variant = &SecondVariant;

        assert_eq!(handler.handle(first), Marker::Protocol);
        assert_eq!(handler.handle(second), Marker::Protocol);
    }

    #[test]
    fn test_concrete_reference_selects_specific() {
        let handler = DemoHandler::new();
        assert_eq!(handler.handle_first(&FirstVariant), Marker::FirstClass);
        assert_eq!(handler.handle_second(&SecondVariant), Marker::SecondClass);
    }
}
