//! Store traits (ports)

mod stores;

pub use stores::{
    MemoCommentStore, MemoRelationStore, MemoStore, NestStore, ReactionStore, RepoResult,
};
