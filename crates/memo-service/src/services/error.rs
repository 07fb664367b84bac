//! Service layer error types
//!
//! Store failures (transaction lifecycle, statement execution, row decoding)
//! pass through unchanged inside `Store`. The other variants come from checks
//! the services make themselves.

use std::fmt;

use memo_common::AppError;
use memo_core::DomainError;
use thiserror::Error;
use validator::ValidationErrors;

/// Service layer error type
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Store(#[from] DomainError),

    #[error(transparent)]
    Startup(#[from] AppError),

    #[error("{resource} not found: {id}")]
    NotFound { resource: &'static str, id: String },

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Broad class of a failure, for callers deciding how to react
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A referenced record does not exist
    NotFound,
    /// The input was rejected before touching the database
    Invalid,
    /// The write collides with a stored record
    Conflict,
    /// The database or its setup failed
    Storage,
}

impl ServiceError {
    pub fn not_found(resource: &'static str, id: impl fmt::Display) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Store(e) if e.is_not_found() => ErrorKind::NotFound,
            Self::Store(e) if e.is_validation() => ErrorKind::Invalid,
            Self::Store(e) if e.is_conflict() => ErrorKind::Conflict,
            Self::Store(_) | Self::Startup(_) => ErrorKind::Storage,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Validation(_) => ErrorKind::Invalid,
        }
    }

    /// Stable code; store and startup errors keep their own
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Store(e) => e.code(),
            Self::Startup(e) => e.code(),
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
        }
    }
}

impl From<ValidationErrors> for ServiceError {
    fn from(err: ValidationErrors) -> Self {
        Self::Validation(err.to_string())
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
