//! Memo comment database model

use sqlx::FromRow;

/// Database model for memo_comment table
#[derive(Debug, Clone, FromRow)]
pub struct MemoCommentModel {
    pub id: i64,
    pub created_ts: i64,
    pub updated_ts: i64,
    pub content: String,
    pub username: String,
    pub memo_id: i64,
}

impl MemoCommentModel {
    pub const COLUMNS: &'static str = "id, created_ts, updated_ts, content, username, memo_id";
}
