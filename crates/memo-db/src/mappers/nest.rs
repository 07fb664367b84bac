//! Nest entity <-> model mapper

use memo_core::entities::Nest;

use super::timestamp_or_now;
use crate::models::NestModel;

/// Convert NestModel to Nest entity
impl From<NestModel> for Nest {
    fn from(model: NestModel) -> Self {
        Nest {
            id: model.id,
            uid: model.uid,
            created_ts: model.created_ts,
            updated_ts: model.updated_ts,
            creator_id: model.creator_id,
            name: model.name,
        }
    }
}

/// Column values for inserting a nest
pub struct NestInsert<'a> {
    pub uid: &'a str,
    pub created_ts: i64,
    pub updated_ts: i64,
    pub creator_id: i64,
    pub name: &'a str,
}

impl<'a> NestInsert<'a> {
    pub fn new(nest: &'a Nest) -> Self {
        let created_ts = timestamp_or_now(nest.created_ts);
        Self {
            uid: &nest.uid,
            created_ts,
            updated_ts: if nest.updated_ts == 0 { created_ts } else { nest.updated_ts },
            creator_id: nest.creator_id,
            name: &nest.name,
        }
    }
}
