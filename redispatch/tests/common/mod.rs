#![allow(dead_code)]

use redispatch::{FirstVariant, Handler, Marker, SecondVariant, Variant};
use std::io::{self, Write};
use std::sync::Mutex;

// ============================================================================
// Test Variants
// ============================================================================

/// A variant with no dedicated handler operation.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThirdVariant;

impl Variant for ThirdVariant {
    fn dispatch(&self, handler: &dyn Handler) -> Marker {
        handler.handle(self)
    }
}

// ============================================================================
// Test Handlers
// ============================================================================

/// Which handler operation ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    General,
    First,
    Second,
}

/// Records every operation it runs, in call order.
#[derive(Default)]
pub struct RecordingHandler {
    pub calls: Mutex<Vec<Operation>>,
}

impl RecordingHandler {
    pub fn calls(&self) -> Vec<Operation> {
        self.calls.lock().unwrap().clone()
    }
}

impl Handler for RecordingHandler {
    fn handle(&self, _variant: &dyn Variant) -> Marker {
        self.calls.lock().unwrap().push(Operation::General);
        Marker::Protocol
    }

    fn handle_first(&self, _variant: &FirstVariant) -> Marker {
        self.calls.lock().unwrap().push(Operation::First);
        Marker::FirstClass
    }

    fn handle_second(&self, _variant: &SecondVariant) -> Marker {
        self.calls.lock().unwrap().push(Operation::Second);
        Marker::SecondClass
    }
}

/// Implements only the general operation.
pub struct GeneralOnlyHandler;

impl Handler for GeneralOnlyHandler {
    fn handle(&self, _variant: &dyn Variant) -> Marker {
        Marker::Protocol
    }
}

// ============================================================================
// Test Sinks
// ============================================================================

/// A writer that rejects every write.
pub struct BrokenPipe;

impl Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
