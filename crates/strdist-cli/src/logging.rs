//! Logging setup.
//!
//! Log lines go to stderr so match output on stdout stays parseable.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize tracing, preferring `RUST_LOG` over `default_filter`.
pub fn init_with_filter(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}
