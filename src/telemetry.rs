//! # Telemetry
//!
//! `tracing` subscriber setup driven by [`LogConfig`].
//!
//! Logs go to stderr so stdout carries only command output.

use crate::config::{LogConfig, LogFormat};
use thiserror::Error;
use tracing::Dispatch;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// Subscriber installation failure.
#[derive(Debug, Error)]
#[error("failed to initialise tracing: {0}")]
pub struct TelemetryError(String);

/// Builds the log filter: `RUST_LOG` wins over the configured level.
#[must_use]
pub fn env_filter(config: &LogConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level))
}

/// Builds a subscriber writing formatted events to `writer`.
#[must_use]
pub fn dispatch<W>(config: &LogConfig, writer: W) -> Dispatch
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_target(config.include_target)
        .with_writer(writer);

    match config.format {
        LogFormat::Json => Dispatch::new(builder.json().finish()),
        LogFormat::Pretty => Dispatch::new(builder.pretty().finish()),
    }
}

/// Installs the global `tracing` subscriber, writing to stderr.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init(config: &LogConfig) -> Result<(), TelemetryError> {
    tracing::dispatcher::set_global_default(dispatch(config, std::io::stderr))
        .map_err(|e| TelemetryError(e.to_string()))
}
