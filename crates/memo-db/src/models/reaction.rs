//! Reaction database model

use sqlx::FromRow;

/// Database model for reaction table
#[derive(Debug, Clone, FromRow)]
pub struct ReactionModel {
    pub id: i64,
    pub created_ts: i64,
    pub creator_id: i64,
    pub content_id: i64,
    /// Persisted enum name, e.g. `LIKE`
    pub reaction_type: String,
}

impl ReactionModel {
    pub const COLUMNS: &'static str = "id, created_ts, creator_id, content_id, reaction_type";
}
