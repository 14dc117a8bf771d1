//! Tracing subscriber setup for hosts embedding the workflow

use thiserror::Error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::LoggingConfig;

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("invalid log filter '{filter}': {source}")]
    InvalidFilter {
        filter: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },

    #[error("failed to install tracing subscriber: {0}")]
    Install(#[from] tracing_subscriber::util::TryInitError),
}

/// Installs a global subscriber with an `EnvFilter` and a `fmt` layer
///
/// Fails rather than panicking when a global subscriber already exists.
///
/// # Errors
///
/// - [`TelemetryError::InvalidFilter`] when the filter directives do not parse
/// - [`TelemetryError::Install`] when a global subscriber is already set
pub fn init_tracing(config: &LoggingConfig) -> Result<(), TelemetryError> {
    let filter = build_filter(&config.filter)?;
    let registry = tracing_subscriber::registry().with(filter);

    if config.json {
        registry.with(tracing_subscriber::fmt::layer().json()).try_init()?;
    } else {
        registry.with(tracing_subscriber::fmt::layer()).try_init()?;
    }

    Ok(())
}

fn build_filter(directives: &str) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_new(directives).map_err(|source| TelemetryError::InvalidFilter {
        filter: directives.to_string(),
        source,
    })
}
