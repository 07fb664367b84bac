//! Nest entity - a named workspace grouping memos

/// Nest entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nest {
    pub id: i64,
    /// Public identifier, unique across nests
    pub uid: String,
    pub created_ts: i64,
    pub updated_ts: i64,
    pub creator_id: i64,
    pub name: String,
}

impl Nest {
    /// Create a new, not yet persisted nest
    pub fn new(creator_id: i64, uid: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: 0,
            uid: uid.into(),
            created_ts: 0,
            updated_ts: 0,
            creator_id,
            name: name.into(),
        }
    }
}
