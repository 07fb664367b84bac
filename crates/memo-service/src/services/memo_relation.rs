//! Memo relation service
//!
//! Links memos to each other and lists or removes those links.

use memo_core::entities::MemoRelation;
use memo_core::filters::{DeleteMemoRelation, FindMemo, FindMemoRelation};
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::{MemoRelationRequest, MemoRelationResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Memo relation service
pub struct MemoRelationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MemoRelationService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Relate `memo_id` to another memo; relating twice is not an error
    #[instrument(skip(self))]
    pub async fn create_relation(
        &self,
        memo_id: i64,
        request: MemoRelationRequest,
    ) -> ServiceResult<MemoRelationResponse> {
        request.validate()?;
        if memo_id == request.related_memo_id {
            return Err(ServiceError::validation("A memo cannot relate to itself"));
        }
        self.require_memo(memo_id).await?;
        self.require_memo(request.related_memo_id).await?;

        let relation = self
            .ctx
            .memo_relation_store()
            .upsert(MemoRelation::new(memo_id, request.related_memo_id, request.relation_type))
            .await?;

        info!(
            memo_id,
            related_memo_id = relation.related_memo_id,
            relation_type = %relation.relation_type,
            "Memo relation created"
        );
        Ok(MemoRelationResponse::from(relation))
    }

    /// Relations going out of a memo
    #[instrument(skip(self))]
    pub async fn list_relations(&self, memo_id: i64) -> ServiceResult<Vec<MemoRelationResponse>> {
        let relations = self
            .ctx
            .memo_relation_store()
            .list(&FindMemoRelation::by_memo(memo_id))
            .await?;

        Ok(relations.into_iter().map(MemoRelationResponse::from).collect())
    }

    /// Remove one relation
    #[instrument(skip(self))]
    pub async fn delete_relation(&self, memo_id: i64, request: MemoRelationRequest) -> ServiceResult<()> {
        request.validate()?;
        let relation = MemoRelation::new(memo_id, request.related_memo_id, request.relation_type);
        let find = FindMemoRelation {
            memo_id: Some(relation.memo_id),
            related_memo_id: Some(relation.related_memo_id),
            relation_type: Some(relation.relation_type),
        };
        if self.ctx.memo_relation_store().list(&find).await?.is_empty() {
            return Err(ServiceError::not_found(
                "Memo relation",
                format!("{memo_id} -> {}", relation.related_memo_id),
            ));
        }

        self.ctx
            .memo_relation_store()
            .delete(&DeleteMemoRelation::from(relation))
            .await?;

        info!(memo_id, related_memo_id = relation.related_memo_id, "Memo relation deleted");
        Ok(())
    }

    async fn require_memo(&self, memo_id: i64) -> ServiceResult<()> {
        let find = FindMemo {
            id: Some(memo_id),
            ..Default::default()
        };
        match self.ctx.memo_store().get(&find).await? {
            Some(_) => Ok(()),
            None => Err(ServiceError::not_found("Memo", memo_id)),
        }
    }
}
