//! Memo relation database model

use sqlx::FromRow;

/// Database model for memo_relation table
#[derive(Debug, Clone, FromRow)]
pub struct MemoRelationModel {
    pub memo_id: i64,
    pub related_memo_id: i64,
    pub relation_type: String,
}

impl MemoRelationModel {
    pub const COLUMNS: &'static str = "memo_id, related_memo_id, relation_type";
}
