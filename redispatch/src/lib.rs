//! # redispatch - Single Versus Double Dispatch
//!
//! `redispatch` shows how the operation a [`Handler`] runs depends on the
//! argument's static type. It walks the same two variants twice:
//!
//! - **Single dispatch** hands each `&dyn Variant` straight to
//!   [`Handler::handle`], so the general operation wins both times.
//! - **Double dispatch** calls [`Variant::dispatch`] instead, so each variant
//!   passes itself back with its concrete type and its own operation runs.
//!
//! ## Quick Start
//!
//! ```rust
//! let out = redispatch::run(Vec::new()).unwrap();
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "Protocol\nProtocol\nFirst Class\nSecond Class\n"
//! );
//! ```

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use redispatch_core::{
    FirstVariant, Handler, Marker, OutputStyle, RedispatchError, Result, SecondVariant, Variant,
};

mod console;
mod demo;
mod handler;

pub use console::{Console, DemoConfig};
pub use demo::{
    Collection, build_collection, double_dispatch_pass, run, run_with, single_dispatch_pass,
};
pub use handler::DemoHandler;

/// Prelude module - common imports for redispatch.
///
/// # Usage
///
/// ```rust
/// use redispatch::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        Console, DemoConfig, DemoHandler, FirstVariant, Handler, Marker, OutputStyle,
        RedispatchError, SecondVariant, Variant,
    };
}
