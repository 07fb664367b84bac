//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use memo_core::entities::{Memo, MemoComment, MemoRelation, Nest, Reaction};

use super::responses::{
    MemoCommentResponse, MemoRelationResponse, MemoResponse, NestResponse, ReactionResponse,
};

// ============================================================================
// Reaction Mappers
// ============================================================================

impl From<&Reaction> for ReactionResponse {
    fn from(reaction: &Reaction) -> Self {
        Self {
            id: reaction.id,
            creator_id: reaction.creator_id,
            content_id: reaction.content_id,
            reaction_type: reaction.reaction_type.as_str().to_string(),
            created_ts: reaction.created_ts,
        }
    }
}

impl From<Reaction> for ReactionResponse {
    fn from(reaction: Reaction) -> Self {
        Self::from(&reaction)
    }
}

// ============================================================================
// Memo Comment Mappers
// ============================================================================

impl From<MemoComment> for MemoCommentResponse {
    fn from(comment: MemoComment) -> Self {
        let edited = comment.is_edited();
        Self {
            id: comment.id,
            memo_id: comment.memo_id,
            username: comment.username,
            content: comment.content,
            created_ts: comment.created_ts,
            updated_ts: comment.updated_ts,
            edited,
        }
    }
}

// ============================================================================
// Memo Mappers
// ============================================================================

impl From<Memo> for MemoResponse {
    fn from(memo: Memo) -> Self {
        Self {
            id: memo.id,
            creator_id: memo.creator_id,
            nest_id: memo.nest_id,
            content: memo.content,
            created_ts: memo.created_ts,
            updated_ts: memo.updated_ts,
        }
    }
}

impl From<MemoRelation> for MemoRelationResponse {
    fn from(relation: MemoRelation) -> Self {
        Self {
            memo_id: relation.memo_id,
            related_memo_id: relation.related_memo_id,
            relation_type: relation.relation_type.as_str().to_string(),
        }
    }
}

// ============================================================================
// Nest Mappers
// ============================================================================

impl From<Nest> for NestResponse {
    fn from(nest: Nest) -> Self {
        Self {
            id: nest.id,
            uid: nest.uid,
            name: nest.name,
            creator_id: nest.creator_id,
            created_ts: nest.created_ts,
            updated_ts: nest.updated_ts,
        }
    }
}
