//! Logging initialization.
//!
//! Stderr-only tracing output, filtered through `RUST_LOG`.

use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber with stderr output.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}
