//! Entity <-> Model mappers
//!
//! `From<Model>` impls turn decoded rows into domain entities; the `*Insert`
//! structs borrow an entity and hold the column values for an INSERT.

mod memo;
mod memo_comment;
mod memo_relation;
mod nest;
mod reaction;

pub use memo::MemoInsert;
pub use memo_comment::MemoCommentInsert;
pub use nest::NestInsert;
pub use reaction::ReactionInsert;

/// Caller-provided timestamp, or now when unset
pub(crate) fn timestamp_or_now(ts: i64) -> i64 {
    if ts == 0 {
        chrono::Utc::now().timestamp()
    } else {
        ts
    }
}
