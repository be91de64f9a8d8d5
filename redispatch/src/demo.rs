//! The two dispatch passes and the driver that runs them.

use crate::{
    console::{Console, DemoConfig},
    handler::DemoHandler,
};
use redispatch_core::{FirstVariant, Handler, Marker, Result, SecondVariant, Variant};
use std::io::Write;

/// An ordered, heterogeneous sequence of variants.
pub type Collection = Vec<Box<dyn Variant>>;

/// Build the fixed collection: one [`FirstVariant`], then one [`SecondVariant`].
pub fn build_collection() -> Collection {
    vec![Box::new(FirstVariant), Box::new(SecondVariant)]
}

/// Hand every element to the handler through its abstract type.
///
/// The handler only ever sees `&dyn Variant` here, so [`Handler::handle`] is
/// selected for every element regardless of its concrete type.
pub fn single_dispatch_pass<W: Write>(
    collection: &[Box<dyn Variant>],
    handler: &dyn Handler,
    console: &mut Console<W>,
) -> Result<Vec<Marker>> {
    #[cfg(feature = "tracing")]
    let _span = tracing::debug_span!("dispatch_pass", pass = "single").entered();

    let mut markers = Vec::with_capacity(collection.len());
    for variant in collection {
        let marker = handler.handle(variant.as_ref());

        #[cfg(feature = "tracing")]
        tracing::debug!(variant = ?variant, marker = %marker, "handled variant");

        console.emit(marker)?;
        markers.push(marker);
    }
    Ok(markers)
}

/// Let every element dispatch itself into the handler.
///
/// Each variant's [`Variant::dispatch`] passes `self` with its concrete type,
/// so the most specific handler operation is selected.
pub fn double_dispatch_pass<W: Write>(
    collection: &[Box<dyn Variant>],
    handler: &dyn Handler,
    console: &mut Console<W>,
) -> Result<Vec<Marker>> {
    #[cfg(feature = "tracing")]
    let _span = tracing::debug_span!("dispatch_pass", pass = "double").entered();

    let mut markers = Vec::with_capacity(collection.len());
    for variant in collection {
        let marker = variant.dispatch(handler);

        #[cfg(feature = "tracing")]
        tracing::debug!(variant = ?variant, marker = %marker, "handled variant");

        console.emit(marker)?;
        markers.push(marker);
    }
    Ok(markers)
}

/// Run both passes against `out` with the default configuration.
pub fn run<W: Write>(out: W) -> Result<W> {
    run_with(DemoConfig::default(), out)
}

/// Run the single pass, then the double pass, rendering as `config` specifies.
///
/// The writer is flushed and returned once both passes complete.
pub fn run_with<W: Write>(config: DemoConfig, out: W) -> Result<W> {
    let collection = build_collection();
    let handler = DemoHandler::new();
    let mut console = Console::with_config(out, config);

    single_dispatch_pass(&collection, &handler, &mut console)?;
    double_dispatch_pass(&collection, &handler, &mut console)?;

    console.finish()
}
