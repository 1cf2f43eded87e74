//! # Observability
//!
//! Structured logging through `tracing`. Verbosity follows `RUST_LOG`
//! (default `info`). Handler events carry an upper-snake `event` field,
//! e.g. `ORDER_LOOKUP_OK`, so log lines can be grepped by outcome.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,tower_http=info";

/// Install the global fmt subscriber.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_does_not_panic() {
        init_tracing();
        init_tracing();
        tracing::info!(event = "TEST_EVENT", "tracing initialized");
    }
}
