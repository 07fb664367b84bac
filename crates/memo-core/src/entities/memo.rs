//! Memo entity - a user-authored note

/// Memo entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Memo {
    pub id: i64,
    pub created_ts: i64,
    pub updated_ts: i64,
    pub creator_id: i64,
    /// Nest the memo is filed under, if any
    pub nest_id: Option<i64>,
    pub content: String,
}

impl Memo {
    /// Create a new, not yet persisted memo
    pub fn new(creator_id: i64, content: impl Into<String>) -> Self {
        Self {
            id: 0,
            created_ts: 0,
            updated_ts: 0,
            creator_id,
            nest_id: None,
            content: content.into(),
        }
    }

    /// File the memo under a nest
    #[must_use]
    pub fn in_nest(mut self, nest_id: i64) -> Self {
        self.nest_id = Some(nest_id);
        self
    }
}
