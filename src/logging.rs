//! Diagnostic tracing for stepwise.
//!
//! Controlled by `RUST_LOG`, written to stderr. Rendered output goes to
//! stdout and is never affected by the log level.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG`. Defaults to `warn` if unset.
///
/// ```bash
/// RUST_LOG=stepwise=debug stepwise render chapter.json --set NAME=Albert
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
