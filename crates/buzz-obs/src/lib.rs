//! Structured logging for the buzzer binary
//!
//! The generated report is the only thing written to stdout, so log events
//! go to stderr as JSON lines and can be piped away separately.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "info,buzz=debug";

/// Install the global subscriber. `RUST_LOG` overrides the default filter,
/// which keeps the generation steps (season, archetype, raw draws) at debug.
pub fn init(service_name: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr),
        )
        .init();

    tracing::info!(service = %service_name, "Logging initialized");
}
