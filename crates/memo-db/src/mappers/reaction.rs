//! Reaction entity <-> model mapper

use memo_core::entities::{Reaction, ReactionType};

use crate::models::ReactionModel;

/// Convert ReactionModel to Reaction entity
impl From<ReactionModel> for Reaction {
    fn from(model: ReactionModel) -> Self {
        Reaction {
            id: model.id,
            created_ts: model.created_ts,
            creator_id: model.creator_id,
            content_id: model.content_id,
            reaction_type: ReactionType::from_name(&model.reaction_type),
        }
    }
}

/// Column values for inserting a reaction; id and created_ts come from the database
pub struct ReactionInsert {
    pub creator_id: i64,
    pub content_id: i64,
    pub reaction_type: &'static str,
}

impl ReactionInsert {
    pub fn new(reaction: &Reaction) -> Self {
        Self {
            creator_id: reaction.creator_id,
            content_id: reaction.content_id,
            reaction_type: reaction.reaction_type.as_str(),
        }
    }
}
