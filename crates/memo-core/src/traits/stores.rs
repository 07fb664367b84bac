//! Store traits (ports) - define the interface for record access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Stores are parameterized only by records and
//! filter objects, never by raw SQL.

use async_trait::async_trait;

use crate::entities::{Memo, MemoComment, MemoRelation, Nest, Reaction};
use crate::error::DomainError;
use crate::filters::{
    DeleteMemo, DeleteMemoComment, DeleteMemoRelation, DeleteNest, DeleteReaction, FindMemo,
    FindMemoComment, FindMemoRelation, FindNest, FindReaction, UpdateMemo, UpdateMemoComment,
    UpdateNest,
};

/// Result type for store operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Reaction Store
// ============================================================================

#[async_trait]
pub trait ReactionStore: Send + Sync {
    /// Insert a reaction; id and created_ts are filled in from the database
    async fn create(&self, reaction: Reaction) -> RepoResult<Reaction>;

    /// List reactions matching the filter, newest first
    async fn list(&self, find: &FindReaction) -> RepoResult<Vec<Reaction>>;

    /// Get the first reaction matching the filter
    async fn get(&self, find: &FindReaction) -> RepoResult<Option<Reaction>> {
        Ok(self.list(find).await?.into_iter().next())
    }

    /// Delete a reaction; deleting a missing reaction is not an error
    async fn delete(&self, delete: &DeleteReaction) -> RepoResult<()>;
}

// ============================================================================
// Memo Comment Store
// ============================================================================

#[async_trait]
pub trait MemoCommentStore: Send + Sync {
    /// Insert a comment; id and timestamps are filled in from the database
    async fn create(&self, comment: MemoComment) -> RepoResult<MemoComment>;

    /// List comments matching the filter
    async fn list(&self, find: &FindMemoComment) -> RepoResult<Vec<MemoComment>>;

    /// Get the first comment matching the filter
    async fn get(&self, find: &FindMemoComment) -> RepoResult<Option<MemoComment>> {
        let mut find = find.clone();
        find.limit = Some(1);
        Ok(self.list(&find).await?.into_iter().next())
    }

    /// Apply a partial update and return the stored comment
    async fn update(&self, update: &UpdateMemoComment) -> RepoResult<MemoComment>;

    /// Delete a comment and vacuum dependent rows in one transaction
    async fn delete(&self, delete: &DeleteMemoComment) -> RepoResult<()>;
}

// ============================================================================
// Memo Store
// ============================================================================

#[async_trait]
pub trait MemoStore: Send + Sync {
    /// Insert a memo; id and timestamps are filled in from the database
    async fn create(&self, memo: Memo) -> RepoResult<Memo>;

    /// List memos matching the filter
    async fn list(&self, find: &FindMemo) -> RepoResult<Vec<Memo>>;

    /// Get the first memo matching the filter
    async fn get(&self, find: &FindMemo) -> RepoResult<Option<Memo>> {
        let mut find = find.clone();
        find.limit = Some(1);
        Ok(self.list(&find).await?.into_iter().next())
    }

    /// Apply a partial update and return the stored memo
    async fn update(&self, update: &UpdateMemo) -> RepoResult<Memo>;

    /// Delete a memo and vacuum its comments, reactions and relations in one transaction
    async fn delete(&self, delete: &DeleteMemo) -> RepoResult<()>;
}

// ============================================================================
// Memo Relation Store
// ============================================================================

#[async_trait]
pub trait MemoRelationStore: Send + Sync {
    /// Insert a relation; storing an existing relation again is not an error
    async fn upsert(&self, relation: MemoRelation) -> RepoResult<MemoRelation>;

    /// List relations matching the filter
    async fn list(&self, find: &FindMemoRelation) -> RepoResult<Vec<MemoRelation>>;

    /// Delete every relation matching the filter
    async fn delete(&self, delete: &DeleteMemoRelation) -> RepoResult<()>;
}

// ============================================================================
// Nest Store
// ============================================================================

#[async_trait]
pub trait NestStore: Send + Sync {
    /// Insert a nest; id and timestamps are filled in from the database
    async fn create(&self, nest: Nest) -> RepoResult<Nest>;

    /// List nests matching the filter, newest first
    async fn list(&self, find: &FindNest) -> RepoResult<Vec<Nest>>;

    /// Get the first nest matching the filter
    async fn get(&self, find: &FindNest) -> RepoResult<Option<Nest>> {
        let mut find = find.clone();
        find.limit = Some(1);
        Ok(self.list(&find).await?.into_iter().next())
    }

    /// Apply a partial update and return the stored nest
    async fn update(&self, update: &UpdateNest) -> RepoResult<Nest>;

    /// Delete a nest and vacuum the memos filed under it in one transaction
    async fn delete(&self, delete: &DeleteNest) -> RepoResult<()>;
}
