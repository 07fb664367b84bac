//! Test fixtures and data generators
//!
//! Provides reusable request data for integration tests.

use std::sync::atomic::{AtomicU64, Ordering};

use memo_core::entities::{MemoRelationType, ReactionType};
use memo_service::dto::{
    CreateMemoCommentRequest, CreateMemoRequest, CreateNestRequest, CreateReactionRequest,
    MemoRelationRequest,
};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Creator id used when a test does not care who owns a record
pub const TEST_CREATOR: i64 = 1;

/// Memo with unique content
pub fn memo_request() -> CreateMemoRequest {
    CreateMemoRequest {
        creator_id: TEST_CREATOR,
        content: format!("memo {}", unique_suffix()),
        nest_id: None,
    }
}

/// Memo filed under a nest
pub fn memo_in_nest(nest_id: i64) -> CreateMemoRequest {
    CreateMemoRequest {
        nest_id: Some(nest_id),
        ..memo_request()
    }
}

/// Comment by `username`
pub fn comment_request(username: &str, content: &str) -> CreateMemoCommentRequest {
    CreateMemoCommentRequest {
        username: username.to_string(),
        content: content.to_string(),
    }
}

/// Nest with a unique name
pub fn nest_request() -> CreateNestRequest {
    CreateNestRequest {
        creator_id: TEST_CREATOR,
        name: format!("nest {}", unique_suffix()),
    }
}

/// Reaction on a memo
pub fn reaction_request(
    creator_id: i64,
    memo_id: i64,
    reaction_type: ReactionType,
) -> CreateReactionRequest {
    CreateReactionRequest {
        creator_id,
        content_id: memo_id,
        reaction_type,
    }
}

/// Reference to another memo
pub fn reference_to(related_memo_id: i64) -> MemoRelationRequest {
    MemoRelationRequest {
        related_memo_id,
        relation_type: MemoRelationType::Reference,
    }
}
