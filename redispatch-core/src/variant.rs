//! The dispatchable capability and its two concrete forms.

use crate::{handler::Handler, marker::Marker};
use std::fmt::Debug;

/// Something that can dispatch itself into a [`Handler`].
///
/// Implementations must call the handler operation that matches their own
/// concrete type, passing `self`. A variant without a dedicated operation
/// calls [`Handler::handle`], which is the general fallback.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a valid Variant",
    label = "missing `Variant` implementation",
    note = "Variants must implement `dispatch` by calling the handler with `self`."
)]
pub trait Variant: Debug + Send + Sync + 'static {
    /// Re-dispatch into `handler` with the concrete type of `self`.
    fn dispatch(&self, handler: &dyn Handler) -> Marker;
}

/// The first concrete variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FirstVariant;

impl Variant for FirstVariant {
    fn dispatch(&self, handler: &dyn Handler) -> Marker {
        handler.handle_first(self)
    }
}

/// The second concrete variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SecondVariant;

impl Variant for SecondVariant {
    fn dispatch(&self, handler: &dyn Handler) -> Marker {
        handler.handle_second(self)
    }
}

impl<T: Variant> Variant for Box<T> {
    fn dispatch(&self, handler: &dyn Handler) -> Marker {
        (**self).dispatch(handler)
    }
}
