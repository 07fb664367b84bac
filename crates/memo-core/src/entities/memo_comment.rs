//! Memo comment entity - a user comment attached to a memo

/// Memo comment entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoComment {
    pub id: i64,
    pub created_ts: i64,
    pub updated_ts: i64,
    pub content: String,
    /// Author username
    pub username: String,
    pub memo_id: i64,
}

impl MemoComment {
    /// Create a new, not yet persisted comment
    pub fn new(memo_id: i64, username: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: 0,
            created_ts: 0,
            updated_ts: 0,
            content: content.into(),
            username: username.into(),
            memo_id,
        }
    }

    /// Whether the comment was edited after creation
    #[inline]
    pub fn is_edited(&self) -> bool {
        self.updated_ts > self.created_ts
    }
}
