//! Entry point for the redispatch demonstration.

use std::io;

fn main() {
    #[cfg(feature = "tracing")]
    init_tracing();

    if let Err(e) = redispatch::run(io::stdout().lock()) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// Log to stderr so stdout carries only the dispatch output.
#[cfg(feature = "tracing")]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .init();
}
