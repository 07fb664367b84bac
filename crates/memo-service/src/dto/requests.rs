//! Request DTOs
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use memo_core::entities::{MemoRelationType, ReactionType};
use serde::{Deserialize, Deserializer};
use validator::{Validate, ValidationError, ValidationErrors};

/// Page size when a list request does not ask for one
pub const DEFAULT_LIST_LIMIT: i64 = 50;
/// Largest page a list request can get
pub const MAX_LIST_LIMIT: i64 = 100;
/// Maximum characters in memo and comment content
pub const MAX_CONTENT_LENGTH: u64 = 8192;

// ============================================================================
// Common Requests
// ============================================================================

/// List parameters shared by every list operation
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ListQuery {
    /// Clamped to 1..=100, defaults to 50
    pub limit: Option<i64>,

    #[validate(range(min = 0, message = "Offset must not be negative"))]
    pub offset: Option<i64>,

    /// Every term must appear in the content; ignored for nests
    #[serde(default)]
    pub search: Vec<String>,

    /// Most recently updated first instead of newest first
    #[serde(default)]
    pub order_by_updated_ts: bool,
}

impl ListQuery {
    /// Effective page size
    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_LIST_LIMIT).clamp(1, MAX_LIST_LIMIT)
    }

    /// Effective offset
    pub fn offset(&self) -> i64 {
        self.offset.unwrap_or(0).max(0)
    }
}

// ============================================================================
// Reaction Requests
// ============================================================================

/// Add reaction request
#[derive(Debug, Clone, Deserialize)]
pub struct CreateReactionRequest {
    pub creator_id: i64,

    /// Memo the reaction is attached to
    pub content_id: i64,

    /// Reaction name, e.g. `"THUMBS_UP"`
    pub reaction_type: ReactionType,
}

impl Validate for CreateReactionRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if self.reaction_type == ReactionType::Unspecified {
            let mut err = ValidationError::new("specified");
            err.message = Some("Reaction type must be specified".into());
            errors.add("reaction_type", err);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

// ============================================================================
// Memo Comment Requests
// ============================================================================

/// Create comment request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMemoCommentRequest {
    #[validate(length(min = 1, max = 64, message = "Username must be 1-64 characters"))]
    pub username: String,

    #[validate(length(min = 1, max = 8192, message = "Content must be 1-8192 characters"))]
    pub content: String,
}

/// Edit comment request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateMemoCommentRequest {
    #[validate(length(min = 1, max = 8192, message = "Content must be 1-8192 characters"))]
    pub content: Option<String>,
}

// ============================================================================
// Memo Requests
// ============================================================================

/// Create memo request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMemoRequest {
    pub creator_id: i64,

    #[validate(length(min = 1, max = 8192, message = "Content must be 1-8192 characters"))]
    pub content: String,

    /// Nest to file the memo under
    pub nest_id: Option<i64>,
}

/// Update memo request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateMemoRequest {
    #[validate(length(min = 1, max = 8192, message = "Content must be 1-8192 characters"))]
    pub content: Option<String>,

    /// Absent leaves the nest alone, `null` takes the memo out of its nest
    #[serde(default, deserialize_with = "present_or_null")]
    pub nest_id: Option<Option<i64>>,
}

/// Distinguishes an explicit `null` from an absent field
fn present_or_null<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

// ============================================================================
// Memo Relation Requests
// ============================================================================

/// Relation from the memo in the path to another memo
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct MemoRelationRequest {
    pub related_memo_id: i64,

    /// Relation name, e.g. `"REFERENCE"`
    pub relation_type: MemoRelationType,
}

impl Validate for MemoRelationRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if self.relation_type == MemoRelationType::Unspecified {
            let mut err = ValidationError::new("specified");
            err.message = Some("Relation type must be specified".into());
            errors.add("relation_type", err);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

// ============================================================================
// Nest Requests
// ============================================================================

/// Create nest request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateNestRequest {
    pub creator_id: i64,

    #[validate(length(min = 1, max = 100, message = "Nest name must be 1-100 characters"))]
    pub name: String,
}

/// Rename nest request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateNestRequest {
    #[validate(length(min = 1, max = 100, message = "Nest name must be 1-100 characters"))]
    pub name: Option<String>,
}
