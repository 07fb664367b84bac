//! Filter objects - optional-field structs describing a store query
//!
//! Every field is optional. An absent field places no constraint on the
//! result; present fields are ANDed together by the store.

use crate::entities::{MemoRelation, MemoRelationType};

// ============================================================================
// Reaction Filters
// ============================================================================

/// Conjunctive filter over reactions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FindReaction {
    pub id: Option<i64>,
    pub creator_id: Option<i64>,
    pub content_id: Option<i64>,
}

impl FindReaction {
    /// Match all reactions on a piece of content
    pub fn by_content(content_id: i64) -> Self {
        Self {
            content_id: Some(content_id),
            ..Default::default()
        }
    }
}

/// Identity of a reaction to delete
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteReaction {
    pub id: i64,
}

// ============================================================================
// Memo Comment Filters
// ============================================================================

/// Conjunctive filter over memo comments
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FindMemoComment {
    pub id: Option<i64>,
    pub memo_id: Option<i64>,
    /// Each term must occur somewhere in the comment content
    pub content_search: Vec<String>,
    pub limit: Option<i64>,
    /// Ignored unless `limit` is set
    pub offset: Option<i64>,
    pub order_by_updated_ts: bool,
}

impl FindMemoComment {
    /// Match all comments on a memo
    pub fn by_memo(memo_id: i64) -> Self {
        Self {
            memo_id: Some(memo_id),
            ..Default::default()
        }
    }
}

/// Partial update of a memo comment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateMemoComment {
    pub id: i64,
    /// Defaults to the current time when absent
    pub updated_ts: Option<i64>,
    pub content: Option<String>,
}

/// Identity of a memo comment to delete
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteMemoComment {
    pub id: i64,
    pub memo_id: i64,
}

// ============================================================================
// Memo Filters
// ============================================================================

/// Conjunctive filter over memos
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FindMemo {
    pub id: Option<i64>,
    pub creator_id: Option<i64>,
    pub nest_id: Option<i64>,
    pub content_search: Vec<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    pub order_by_updated_ts: bool,
}

/// Partial update of a memo
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateMemo {
    pub id: i64,
    pub updated_ts: Option<i64>,
    pub content: Option<String>,
    /// `Some(None)` takes the memo out of its nest
    pub nest_id: Option<Option<i64>>,
}

/// Identity of a memo to delete
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteMemo {
    pub id: i64,
}

// ============================================================================
// Memo Relation Filters
// ============================================================================

/// Conjunctive filter over memo relations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FindMemoRelation {
    pub memo_id: Option<i64>,
    pub related_memo_id: Option<i64>,
    pub relation_type: Option<MemoRelationType>,
}

impl FindMemoRelation {
    /// Match all relations going out of a memo
    pub fn by_memo(memo_id: i64) -> Self {
        Self {
            memo_id: Some(memo_id),
            ..Default::default()
        }
    }
}

/// Relations to delete; absent fields match any value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeleteMemoRelation {
    pub memo_id: Option<i64>,
    pub related_memo_id: Option<i64>,
    pub relation_type: Option<MemoRelationType>,
}

impl From<MemoRelation> for DeleteMemoRelation {
    fn from(relation: MemoRelation) -> Self {
        Self {
            memo_id: Some(relation.memo_id),
            related_memo_id: Some(relation.related_memo_id),
            relation_type: Some(relation.relation_type),
        }
    }
}

// ============================================================================
// Nest Filters
// ============================================================================

/// Conjunctive filter over nests
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FindNest {
    pub id: Option<i64>,
    pub uid: Option<String>,
    pub creator_id: Option<i64>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Partial update of a nest
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateNest {
    pub id: i64,
    pub updated_ts: Option<i64>,
    pub name: Option<String>,
}

/// Identity of a nest to delete
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteNest {
    pub id: i64,
}
