//! # memo-core
//!
//! Domain layer containing entities, filter objects, store traits, and domain errors.
//! This crate has zero dependencies on infrastructure (database, transport, etc.).

pub mod entities;
pub mod error;
pub mod filters;
pub mod traits;

// Re-export commonly used types at crate root
pub use entities::{
    Memo, MemoComment, MemoRelation, MemoRelationType, Nest, Reaction, ReactionType,
};
pub use error::DomainError;
pub use filters::{
    DeleteMemo, DeleteMemoComment, DeleteMemoRelation, DeleteNest, DeleteReaction, FindMemo,
    FindMemoComment, FindMemoRelation, FindNest, FindReaction, UpdateMemo, UpdateMemoComment,
    UpdateNest,
};
pub use traits::{
    MemoCommentStore, MemoRelationStore, MemoStore, NestStore, ReactionStore, RepoResult,
};
