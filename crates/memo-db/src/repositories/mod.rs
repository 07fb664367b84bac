//! Store implementations over the shared `Database` handle

mod error;
mod memo;
mod memo_comment;
mod memo_relation;
mod nest;
mod reaction;

pub use error::{map_db_error, map_unique_violation};
pub use memo::SqlMemoStore;
pub use memo_comment::SqlMemoCommentStore;
pub use memo_relation::SqlMemoRelationStore;
pub use nest::SqlNestStore;
pub use reaction::SqlReactionStore;
