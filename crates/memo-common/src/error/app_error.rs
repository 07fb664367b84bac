//! Startup errors
//!
//! Failures while bringing the memo stack up: reading configuration, opening
//! the pool and bootstrapping the schema. Failures of individual store calls
//! are reported by the service layer instead.

use thiserror::Error;

use crate::config::ConfigError;

/// Error raised before any store is usable
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Could not open database: {0}")]
    Connect(#[source] anyhow::Error),

    #[error("Schema bootstrap failed: {0}")]
    Schema(#[source] anyhow::Error),
}

impl AppError {
    /// Pool creation failed
    pub fn connect(err: impl Into<anyhow::Error>) -> Self {
        Self::Connect(err.into())
    }

    /// DDL failed on an open pool
    pub fn schema(err: impl Into<anyhow::Error>) -> Self {
        Self::Schema(err.into())
    }

    /// Stable code for logs and callers
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Config(_) => "CONFIG_ERROR",
            Self::Connect(_) => "CONNECT_ERROR",
            Self::Schema(_) => "SCHEMA_ERROR",
        }
    }
}

/// Result type alias for startup steps
pub type AppResult<T> = Result<T, AppError>;
