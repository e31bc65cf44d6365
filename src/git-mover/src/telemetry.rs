//! Tracing setup shared by the command-line programs.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting (single-line output) on stderr, so it does not
///   interleave with the per-item lines printed on stdout
/// - Log level filtering via `RUST_LOG` env var (defaults to "info")
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}
