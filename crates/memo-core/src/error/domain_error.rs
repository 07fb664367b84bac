//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Memo not found: {0}")]
    MemoNotFound(i64),

    #[error("Memo comment not found: {0}")]
    MemoCommentNotFound(i64),

    #[error("Reaction not found: {0}")]
    ReactionNotFound(i64),

    #[error("Nest not found: {0}")]
    NestNotFound(String),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Content too long: max {max} characters")]
    ContentTooLong { max: usize },

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Nest uid already exists: {0}")]
    NestUidExists(String),

    #[error("Reaction already exists")]
    ReactionAlreadyExists,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::MemoNotFound(_) => "UNKNOWN_MEMO",
            Self::MemoCommentNotFound(_) => "UNKNOWN_MEMO_COMMENT",
            Self::ReactionNotFound(_) => "UNKNOWN_REACTION",
            Self::NestNotFound(_) => "UNKNOWN_NEST",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::ContentTooLong { .. } => "CONTENT_TOO_LONG",

            // Conflict
            Self::NestUidExists(_) => "NEST_UID_EXISTS",
            Self::ReactionAlreadyExists => "REACTION_ALREADY_EXISTS",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::MemoNotFound(_)
                | Self::MemoCommentNotFound(_)
                | Self::ReactionNotFound(_)
                | Self::NestNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationError(_) | Self::ContentTooLong { .. })
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::NestUidExists(_) | Self::ReactionAlreadyExists)
    }
}
