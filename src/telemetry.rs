//! Telemetry initialization
//!
//! Sets up structured logging via tracing-subscriber. The default filter
//! level comes from configuration and can be overridden at runtime with
//! the RUST_LOG environment variable.

use std::sync::Once;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

static INIT: Once = Once::new();

/// Initialize the global tracing subscriber
///
/// Safe to call multiple times; only the first call installs the subscriber.
pub fn init(default_level: &str) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("parlor={},tower_http=debug", default_level))
        });

        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    });
}
