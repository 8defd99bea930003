//! Diagnostics setup.
//!
//! The library only emits `tracing` events; the binary decides where they
//! go by installing a stderr subscriber here.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::constants::DEFAULT_LOG_LEVEL;

/// Parse a filter directive, falling back to the default level.
pub fn filter_for(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|e| {
        eprintln!("Warning: ignoring invalid log filter '{directive}': {e}");
        EnvFilter::new(DEFAULT_LOG_LEVEL)
    })
}

/// Install the global stderr subscriber. Later calls are no-ops.
pub fn init(directive: &str) {
    let _ = tracing_subscriber::registry()
        .with(filter_for(directive))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init();
}
