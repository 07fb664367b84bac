//! Memo entity <-> model mapper

use memo_core::entities::Memo;

use super::timestamp_or_now;
use crate::models::MemoModel;

/// Convert MemoModel to Memo entity
impl From<MemoModel> for Memo {
    fn from(model: MemoModel) -> Self {
        Memo {
            id: model.id,
            created_ts: model.created_ts,
            updated_ts: model.updated_ts,
            creator_id: model.creator_id,
            nest_id: model.nest_id,
            content: model.content,
        }
    }
}

/// Column values for inserting a memo
pub struct MemoInsert<'a> {
    pub created_ts: i64,
    pub updated_ts: i64,
    pub creator_id: i64,
    pub nest_id: Option<i64>,
    pub content: &'a str,
}

impl<'a> MemoInsert<'a> {
    pub fn new(memo: &'a Memo) -> Self {
        let created_ts = timestamp_or_now(memo.created_ts);
        Self {
            created_ts,
            updated_ts: if memo.updated_ts == 0 { created_ts } else { memo.updated_ts },
            creator_id: memo.creator_id,
            nest_id: memo.nest_id,
            content: &memo.content,
        }
    }
}
