//! Database models - row shapes decoded with SQLx `FromRow`

mod memo;
mod memo_comment;
mod memo_relation;
mod nest;
mod reaction;

pub use memo::MemoModel;
pub use memo_comment::MemoCommentModel;
pub use memo_relation::MemoRelationModel;
pub use nest::NestModel;
pub use reaction::ReactionModel;
