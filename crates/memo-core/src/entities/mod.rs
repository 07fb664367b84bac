//! Domain entities - core business objects

mod memo;
mod memo_comment;
mod memo_relation;
mod nest;
mod reaction;

pub use memo::Memo;
pub use memo_comment::MemoComment;
pub use memo_relation::{MemoRelation, MemoRelationType};
pub use nest::Nest;
pub use reaction::{Reaction, ReactionType};
