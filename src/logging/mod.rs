//! Structured logging with tracing

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Error installing the global subscriber.
#[derive(Debug, thiserror::Error)]
#[error("failed to initialize tracing: {0}")]
pub struct InitError(String);

/// Install the global tracing subscriber.
///
/// The filter comes from `RUST_LOG` when set, otherwise `default_level`.
/// Returns an error if a subscriber is already installed.
pub fn init_tracing(default_level: &str) -> Result<(), InitError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .map_err(|e| InitError(e.to_string()))
}

/// Install the global tracing subscriber with JSON output, one object per line.
pub fn init_tracing_json(default_level: &str) -> Result<(), InitError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().json())
        .try_init()
        .map_err(|e| InitError(e.to_string()))
}
