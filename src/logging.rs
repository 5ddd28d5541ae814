//! Diagnostic tracing for the agent, written to stderr.
//!
//! Reads `RUST_LOG` when set. Otherwise defaults to `warn`, or `debug` with
//! `--verbose`. Transition-level events are logged at `trace`:
//!
//! ```bash
//! RUST_LOG=bitagent=trace bitagent 1001
//! ```

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub fn init(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
