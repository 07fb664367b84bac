//! Response DTOs
//!
//! All response DTOs implement `Serialize` for JSON output.

use serde::Serialize;

// ============================================================================
// Common Response Types
// ============================================================================

/// One page of a list
#[derive(Debug, Serialize)]
pub struct PageResponse<T> {
    pub data: Vec<T>,
    pub pagination: PageMeta,
}

impl<T> PageResponse<T> {
    /// Build a page from up to `limit + 1` fetched rows
    ///
    /// The extra row only signals that another page exists and is dropped.
    pub fn from_overfetch(mut data: Vec<T>, limit: i64, offset: i64) -> Self {
        let page_size = usize::try_from(limit).unwrap_or(0);
        let has_more = data.len() > page_size;
        data.truncate(page_size);
        Self {
            data,
            pagination: PageMeta {
                limit,
                offset,
                has_more,
            },
        }
    }
}

/// Offset pagination metadata
#[derive(Debug, Serialize)]
pub struct PageMeta {
    pub limit: i64,
    pub offset: i64,
    pub has_more: bool,
}

// ============================================================================
// Entity Responses
// ============================================================================

/// Reaction response
#[derive(Debug, Clone, Serialize)]
pub struct ReactionResponse {
    pub id: i64,
    pub creator_id: i64,
    pub content_id: i64,
    /// Reaction name, e.g. `"LIKE"`
    pub reaction_type: String,
    pub created_ts: i64,
}

/// Memo comment response
#[derive(Debug, Clone, Serialize)]
pub struct MemoCommentResponse {
    pub id: i64,
    pub memo_id: i64,
    pub username: String,
    pub content: String,
    pub created_ts: i64,
    pub updated_ts: i64,
    pub edited: bool,
}

/// Memo response
#[derive(Debug, Clone, Serialize)]
pub struct MemoResponse {
    pub id: i64,
    pub creator_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nest_id: Option<i64>,
    pub content: String,
    pub created_ts: i64,
    pub updated_ts: i64,
}

/// Memo relation response
#[derive(Debug, Clone, Serialize)]
pub struct MemoRelationResponse {
    pub memo_id: i64,
    pub related_memo_id: i64,
    /// Relation name, e.g. `"REFERENCE"`
    pub relation_type: String,
}

/// Nest response
#[derive(Debug, Clone, Serialize)]
pub struct NestResponse {
    pub id: i64,
    pub uid: String,
    pub name: String,
    pub creator_id: i64,
    pub created_ts: i64,
    pub updated_ts: i64,
}
