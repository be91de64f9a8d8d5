//! # redispatch-core
//!
//! Core traits for the redispatch double dispatch demonstration.
//!
//! # Two Participants
//!
//! Every dispatch in redispatch involves two parties, and the operation that
//! runs depends on how each one is typed at the call site.
//!
//! ## Receiver ([`Variant`])
//!
//! The capability shared by everything a [`Handler`] can process. A
//! `&dyn Variant` erases the concrete type, so a handler given one can only
//! select its general operation.
//!
//! - **Closed set**: [`FirstVariant`] and [`SecondVariant`]
//! - **Stateless**: variants carry no data, only their type
//! - **Re-dispatch**: [`Variant::dispatch`] hands `self` back to the handler
//!   with its concrete type restored
//!
//! ## Visitor ([`Handler`])
//!
//! One general operation plus one named operation per concrete variant. The
//! specific operations fall back to the general one unless overridden.
//!
//! # Error Types
//!
//! - [`RedispatchError`] - Output failures while reporting selected operations

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod error;
mod handler;
mod marker;
mod variant;

// Re-exports
pub use error::{RedispatchError, Result};
pub use handler::Handler;
pub use marker::{Marker, OutputStyle};
pub use variant::{FirstVariant, SecondVariant, Variant};
