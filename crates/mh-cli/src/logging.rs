//! Diagnostic logging for the `mh` binary.
//!
//! Game output goes to stdout. Tracing output goes to stderr, filtered by
//! `RUST_LOG` and defaulting to `warn`, e.g.
//!
//! ```bash
//! RUST_LOG=mh_core=debug mh roll Dragon
//! ```

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global tracing subscriber.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
