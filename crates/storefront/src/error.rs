//! Crate-level error type.
//!
//! Cart operations never fail; this covers page setup (configuration and
//! logging) where a caller has to decide what to do.

use thiserror::Error;

use crate::config::ConfigError;
use crate::telemetry::TelemetryError;

/// Errors raised while setting up the storefront page.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Logging error: {0}")]
    Telemetry(#[from] TelemetryError),
}

/// Result alias for storefront setup.
pub type Result<T> = std::result::Result<T, Error>;
