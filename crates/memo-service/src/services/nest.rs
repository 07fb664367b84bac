//! Nest service
//!
//! Handles nests: named groups of memos with a public uid.

use memo_core::entities::Nest;
use memo_core::filters::{DeleteNest, FindNest, UpdateNest};
use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

use crate::dto::{CreateNestRequest, ListQuery, NestResponse, PageResponse, UpdateNestRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Nest service
pub struct NestService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> NestService<'a> {
    /// Create a new NestService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a nest with a freshly generated uid
    #[instrument(skip(self, request))]
    pub async fn create_nest(&self, request: CreateNestRequest) -> ServiceResult<NestResponse> {
        request.validate()?;

        let uid = Uuid::new_v4().simple().to_string();
        let nest = self
            .ctx
            .nest_store()
            .create(Nest::new(request.creator_id, uid, request.name))
            .await?;

        info!(nest_id = nest.id, uid = %nest.uid, "Nest created");
        Ok(NestResponse::from(nest))
    }

    /// Get a nest by id
    #[instrument(skip(self))]
    pub async fn get_nest(&self, nest_id: i64) -> ServiceResult<NestResponse> {
        let find = FindNest {
            id: Some(nest_id),
            ..Default::default()
        };
        self.find_one(&find, nest_id).await
    }

    /// Get a nest by its public uid
    #[instrument(skip(self))]
    pub async fn get_nest_by_uid(&self, uid: &str) -> ServiceResult<NestResponse> {
        let find = FindNest {
            uid: Some(uid.to_string()),
            ..Default::default()
        };
        self.find_one(&find, uid).await
    }

    /// List nests, optionally by creator
    #[instrument(skip(self))]
    pub async fn list_nests(
        &self,
        creator_id: Option<i64>,
        query: ListQuery,
    ) -> ServiceResult<PageResponse<NestResponse>> {
        query.validate()?;
        let limit = query.limit();
        let offset = query.offset();

        let find = FindNest {
            creator_id,
            limit: Some(limit + 1),
            offset: Some(offset),
            ..Default::default()
        };
        let nests = self.ctx.nest_store().list(&find).await?;

        Ok(PageResponse::from_overfetch(
            nests.into_iter().map(NestResponse::from).collect(),
            limit,
            offset,
        ))
    }

    /// Rename a nest
    #[instrument(skip(self, request))]
    pub async fn update_nest(
        &self,
        nest_id: i64,
        request: UpdateNestRequest,
    ) -> ServiceResult<NestResponse> {
        request.validate()?;

        let update = UpdateNest {
            id: nest_id,
            updated_ts: None,
            name: request.name,
        };
        let nest = self.ctx.nest_store().update(&update).await.map_err(|e| {
            if e.is_not_found() {
                ServiceError::not_found("Nest", nest_id)
            } else {
                e.into()
            }
        })?;

        Ok(NestResponse::from(nest))
    }

    /// Delete a nest and every memo filed under it
    #[instrument(skip(self))]
    pub async fn delete_nest(&self, nest_id: i64) -> ServiceResult<()> {
        self.get_nest(nest_id).await?;
        self.ctx.nest_store().delete(&DeleteNest { id: nest_id }).await?;

        info!(nest_id, "Nest deleted");
        Ok(())
    }

    async fn find_one(&self, find: &FindNest, key: impl std::fmt::Display) -> ServiceResult<NestResponse> {
        self.ctx
            .nest_store()
            .get(find)
            .await?
            .map(NestResponse::from)
            .ok_or_else(|| ServiceError::not_found("Nest", key))
    }
}
