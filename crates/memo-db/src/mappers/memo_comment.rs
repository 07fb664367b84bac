//! Memo comment entity <-> model mapper

use memo_core::entities::MemoComment;

use super::timestamp_or_now;
use crate::models::MemoCommentModel;

/// Convert MemoCommentModel to MemoComment entity
impl From<MemoCommentModel> for MemoComment {
    fn from(model: MemoCommentModel) -> Self {
        MemoComment {
            id: model.id,
            created_ts: model.created_ts,
            updated_ts: model.updated_ts,
            content: model.content,
            username: model.username,
            memo_id: model.memo_id,
        }
    }
}

/// Column values for inserting a comment
pub struct MemoCommentInsert<'a> {
    pub created_ts: i64,
    pub updated_ts: i64,
    pub content: &'a str,
    pub username: &'a str,
    pub memo_id: i64,
}

impl<'a> MemoCommentInsert<'a> {
    /// Unset timestamps default to now; `updated_ts` defaults to `created_ts`
    pub fn new(comment: &'a MemoComment) -> Self {
        let created_ts = timestamp_or_now(comment.created_ts);
        let updated_ts = if comment.updated_ts == 0 {
            created_ts
        } else {
            comment.updated_ts
        };
        Self {
            created_ts,
            updated_ts,
            content: &comment.content,
            username: &comment.username,
            memo_id: comment.memo_id,
        }
    }
}
