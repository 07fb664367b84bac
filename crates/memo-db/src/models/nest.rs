//! Nest database model

use sqlx::FromRow;

/// Database model for nest table
#[derive(Debug, Clone, FromRow)]
pub struct NestModel {
    pub id: i64,
    pub uid: String,
    pub created_ts: i64,
    pub updated_ts: i64,
    pub creator_id: i64,
    pub name: String,
}

impl NestModel {
    pub const COLUMNS: &'static str = "id, uid, created_ts, updated_ts, creator_id, name";
}
