//! MemoRelation entity <-> model mapper

use memo_core::entities::{MemoRelation, MemoRelationType};

use crate::models::MemoRelationModel;

impl From<MemoRelationModel> for MemoRelation {
    fn from(model: MemoRelationModel) -> Self {
        MemoRelation {
            memo_id: model.memo_id,
            related_memo_id: model.related_memo_id,
            relation_type: MemoRelationType::from_name(&model.relation_type),
        }
    }
}
