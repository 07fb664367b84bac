//! Memo database model

use sqlx::FromRow;

/// Database model for memo table
#[derive(Debug, Clone, FromRow)]
pub struct MemoModel {
    pub id: i64,
    pub created_ts: i64,
    pub updated_ts: i64,
    pub creator_id: i64,
    pub nest_id: Option<i64>,
    pub content: String,
}

impl MemoModel {
    pub const COLUMNS: &'static str = "id, created_ts, updated_ts, creator_id, nest_id, content";
}
