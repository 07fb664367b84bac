//! Memo service
//!
//! Handles memo creation, editing, deletion, and queries.

use memo_core::entities::Memo;
use memo_core::filters::{DeleteMemo, FindMemo, FindNest, UpdateMemo};
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::{CreateMemoRequest, ListQuery, MemoResponse, PageResponse, UpdateMemoRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Memo service
pub struct MemoService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MemoService<'a> {
    /// Create a new MemoService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a memo, optionally filed under a nest
    #[instrument(skip(self, request))]
    pub async fn create_memo(&self, request: CreateMemoRequest) -> ServiceResult<MemoResponse> {
        request.validate()?;
        if let Some(nest_id) = request.nest_id {
            self.require_nest(nest_id).await?;
        }

        let mut memo = Memo::new(request.creator_id, request.content);
        memo.nest_id = request.nest_id;
        let memo = self.ctx.memo_store().create(memo).await?;

        info!(memo_id = memo.id, creator_id = memo.creator_id, "Memo created");
        Ok(MemoResponse::from(memo))
    }

    /// Get a memo by id
    #[instrument(skip(self))]
    pub async fn get_memo(&self, memo_id: i64) -> ServiceResult<MemoResponse> {
        let find = FindMemo {
            id: Some(memo_id),
            ..Default::default()
        };
        self.ctx
            .memo_store()
            .get(&find)
            .await?
            .map(MemoResponse::from)
            .ok_or_else(|| ServiceError::not_found("Memo", memo_id))
    }

    /// List memos, optionally by creator and nest
    #[instrument(skip(self))]
    pub async fn list_memos(
        &self,
        creator_id: Option<i64>,
        nest_id: Option<i64>,
        query: ListQuery,
    ) -> ServiceResult<PageResponse<MemoResponse>> {
        query.validate()?;
        let limit = query.limit();
        let offset = query.offset();

        let find = FindMemo {
            creator_id,
            nest_id,
            content_search: query.search,
            limit: Some(limit + 1),
            offset: Some(offset),
            order_by_updated_ts: query.order_by_updated_ts,
            ..Default::default()
        };
        let memos = self.ctx.memo_store().list(&find).await?;

        Ok(PageResponse::from_overfetch(
            memos.into_iter().map(MemoResponse::from).collect(),
            limit,
            offset,
        ))
    }

    /// Edit a memo, move it to another nest or out of its nest
    #[instrument(skip(self, request))]
    pub async fn update_memo(
        &self,
        memo_id: i64,
        request: UpdateMemoRequest,
    ) -> ServiceResult<MemoResponse> {
        request.validate()?;
        if let Some(Some(nest_id)) = request.nest_id {
            self.require_nest(nest_id).await?;
        }

        let update = UpdateMemo {
            id: memo_id,
            updated_ts: None,
            content: request.content,
            nest_id: request.nest_id,
        };
        let memo = self.ctx.memo_store().update(&update).await.map_err(|e| {
            if e.is_not_found() {
                ServiceError::not_found("Memo", memo_id)
            } else {
                e.into()
            }
        })?;

        Ok(MemoResponse::from(memo))
    }

    /// Delete a memo along with its comments, reactions and relations
    #[instrument(skip(self))]
    pub async fn delete_memo(&self, memo_id: i64) -> ServiceResult<()> {
        self.get_memo(memo_id).await?;
        self.ctx.memo_store().delete(&DeleteMemo { id: memo_id }).await?;

        info!(memo_id, "Memo deleted");
        Ok(())
    }

    async fn require_nest(&self, nest_id: i64) -> ServiceResult<()> {
        let find = FindNest {
            id: Some(nest_id),
            ..Default::default()
        };
        match self.ctx.nest_store().get(&find).await? {
            Some(_) => Ok(()),
            None => Err(ServiceError::not_found("Nest", nest_id)),
        }
    }
}
