//! Service layer - use cases over the stores

mod context;
mod error;
mod memo;
mod memo_comment;
mod memo_relation;
mod nest;
mod reaction;

pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ErrorKind, ServiceError, ServiceResult};
pub use memo::MemoService;
pub use memo_comment::MemoCommentService;
pub use memo_relation::MemoRelationService;
pub use nest::NestService;
pub use reaction::ReactionService;
