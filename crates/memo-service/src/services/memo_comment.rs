//! Memo comment service
//!
//! Handles comment creation, editing, deletion, and queries.

use memo_core::entities::MemoComment;
use memo_core::filters::{DeleteMemoComment, FindMemo, FindMemoComment, UpdateMemoComment};
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::{
    CreateMemoCommentRequest, ListQuery, MemoCommentResponse, PageResponse,
    UpdateMemoCommentRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Memo comment service
pub struct MemoCommentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MemoCommentService<'a> {
    /// Create a new MemoCommentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Comment on a memo
    #[instrument(skip(self, request))]
    pub async fn create_comment(
        &self,
        memo_id: i64,
        request: CreateMemoCommentRequest,
    ) -> ServiceResult<MemoCommentResponse> {
        request.validate()?;
        self.require_memo(memo_id).await?;

        let comment = self
            .ctx
            .memo_comment_store()
            .create(MemoComment::new(memo_id, request.username, request.content))
            .await?;

        info!(comment_id = comment.id, memo_id, "Comment created");
        Ok(MemoCommentResponse::from(comment))
    }

    /// List a memo's comments
    #[instrument(skip(self))]
    pub async fn list_comments(
        &self,
        memo_id: i64,
        query: ListQuery,
    ) -> ServiceResult<PageResponse<MemoCommentResponse>> {
        query.validate()?;
        let limit = query.limit();
        let offset = query.offset();

        let find = FindMemoComment {
            memo_id: Some(memo_id),
            content_search: query.search,
            limit: Some(limit + 1),
            offset: Some(offset),
            order_by_updated_ts: query.order_by_updated_ts,
            ..Default::default()
        };
        let comments = self.ctx.memo_comment_store().list(&find).await?;

        Ok(PageResponse::from_overfetch(
            comments.into_iter().map(MemoCommentResponse::from).collect(),
            limit,
            offset,
        ))
    }

    /// Edit a comment
    #[instrument(skip(self, request))]
    pub async fn update_comment(
        &self,
        comment_id: i64,
        request: UpdateMemoCommentRequest,
    ) -> ServiceResult<MemoCommentResponse> {
        request.validate()?;

        let update = UpdateMemoComment {
            id: comment_id,
            updated_ts: None,
            content: request.content,
        };
        let comment = self
            .ctx
            .memo_comment_store()
            .update(&update)
            .await
            .map_err(|e| {
                if e.is_not_found() {
                    ServiceError::not_found("Comment", comment_id)
                } else {
                    e.into()
                }
            })?;

        Ok(MemoCommentResponse::from(comment))
    }

    /// Delete a comment from a memo
    #[instrument(skip(self))]
    pub async fn delete_comment(&self, memo_id: i64, comment_id: i64) -> ServiceResult<()> {
        let find = FindMemoComment {
            id: Some(comment_id),
            memo_id: Some(memo_id),
            ..Default::default()
        };
        if self.ctx.memo_comment_store().get(&find).await?.is_none() {
            return Err(ServiceError::not_found("Comment", comment_id));
        }

        self.ctx
            .memo_comment_store()
            .delete(&DeleteMemoComment {
                id: comment_id,
                memo_id,
            })
            .await?;

        info!(comment_id, memo_id, "Comment deleted");
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
