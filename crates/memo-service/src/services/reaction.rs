//! Reaction service
//!
//! Handles reactions on memos (add, list, remove).

use memo_core::entities::Reaction;
use memo_core::filters::{DeleteReaction, FindMemo, FindReaction};
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::{CreateReactionRequest, ReactionResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Reaction service
pub struct ReactionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReactionService<'a> {
    /// Create a new ReactionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Add a reaction to a memo
    #[instrument(skip(self))]
    pub async fn add_reaction(&self, request: CreateReactionRequest) -> ServiceResult<ReactionResponse> {
        request.validate()?;
        self.require_memo(request.content_id).await?;

        let reaction = self
            .ctx
            .reaction_store()
            .create(Reaction::new(request.creator_id, request.content_id, request.reaction_type))
            .await?;

        info!(
            reaction_id = reaction.id,
            content_id = reaction.content_id,
            reaction_type = %reaction.reaction_type,
            "Reaction added"
        );

        Ok(ReactionResponse::from(reaction))
    }

    /// List reactions on a memo, newest first
    #[instrument(skip(self))]
    pub async fn list_reactions(&self, content_id: i64) -> ServiceResult<Vec<ReactionResponse>> {
        let reactions = self
            .ctx
            .reaction_store()
            .list(&FindReaction::by_content(content_id))
            .await?;

        Ok(reactions.into_iter().map(ReactionResponse::from).collect())
    }

    /// Remove a reaction
    #[instrument(skip(self))]
    pub async fn remove_reaction(&self, reaction_id: i64) -> ServiceResult<()> {
        let find = FindReaction {
            id: Some(reaction_id),
            ..Default::default()
        };
        if self.ctx.reaction_store().get(&find).await?.is_none() {
            return Err(ServiceError::not_found("Reaction", reaction_id));
        }

        self.ctx
            .reaction_store()
            .delete(&DeleteReaction { id: reaction_id })
            .await?;

        info!(reaction_id, "Reaction removed");
        Ok(())
    }

    async fn require_memo(&self, memo_id: i64) -> ServiceResult<()> {
        let find = FindMemo {
            id: Some(memo_id),
            ..Default::default()
        };
        self.ctx
            .memo_store()
            .get(&find)
            .await?
            .map(|_| ())
            .ok_or_else(|| ServiceError::not_found("Memo", memo_id))
    }
}
