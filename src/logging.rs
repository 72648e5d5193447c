//! Diagnostic tracing for the patrol binary.
//!
//! Answers go to stdout; tracing output goes to stderr so the two never mix.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise `default_filter` (from `config.toml`)
/// is used.
///
/// # Example
/// ```bash
/// RUST_LOG=guard_patrol=debug guard-patrol input.txt
/// ```
pub fn init(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
