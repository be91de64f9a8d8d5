//! # Visitor side (Handler)
//!
//! A handler exposes one general operation and one operation per concrete
//! variant. Which one runs is decided entirely by the caller's static view
//! of the argument:
//!
//! 1. **Abstract reference**: `handler.handle(&*boxed)` only knows
//!    `&dyn Variant`, so the general operation runs.
//! 2. **Self reference**: inside [`Variant::dispatch`], `self` has its
//!    concrete type, so the variant calls its own named operation.
//!
//! # Fallback
//!
//! The specific operations default to [`Handler::handle`]. A handler that
//! only cares about the general case implements `handle` and nothing else.
//!
//! [`Variant::dispatch`]: crate::Variant::dispatch

use crate::{
    marker::Marker,
    variant::{FirstVariant, SecondVariant, Variant},
};

/// Selects an operation for a variant.
///
/// # Example
///
/// ```rust
/// use redispatch_core::{FirstVariant, Handler, Marker, Variant};
///
/// struct OnlyFirst;
///
/// impl Handler for OnlyFirst {
///     fn handle(&self, _variant: &dyn Variant) -> Marker {
///         Marker::Protocol
///     }
///
///     fn handle_first(&self, _variant: &FirstVariant) -> Marker {
///         Marker::FirstClass
///     }
/// }
///
/// let first: &dyn Variant = &FirstVariant;
/// assert_eq!(OnlyFirst.handle(first), Marker::Protocol);
/// assert_eq!(first.dispatch(&OnlyFirst), Marker::FirstClass);
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot handle variants",
    label = "missing `Handler` implementation",
    note = "Handlers must implement at least the general `handle` operation."
)]
pub trait Handler: Send + Sync + 'static {
    /// The general operation, selected for any `&dyn Variant`.
    fn handle(&self, variant: &dyn Variant) -> Marker;

    /// The operation specific to [`FirstVariant`].
    fn handle_first(&self, variant: &FirstVariant) -> Marker {
        self.handle(variant)
    }

    /// The operation specific to [`SecondVariant`].
    fn handle_second(&self, variant: &SecondVariant) -> Marker {
        self.handle(variant)
    }
}
