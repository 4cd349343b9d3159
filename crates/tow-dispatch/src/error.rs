use crate::config::ConfigError;
use crate::dispatch::DispatchServiceError;
use crate::telemetry::TelemetryError;

/// Failures surfaced by the service binary: startup plumbing plus anything
/// the dispatch facade reports when driven from the CLI.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("telemetry error: {0}")]
    Telemetry(#[from] TelemetryError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("server error: {0}")]
    Server(#[from] axum::Error),
    #[error("dispatch error: {0}")]
    Dispatch(#[from] DispatchServiceError),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
