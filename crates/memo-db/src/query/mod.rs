//! Query building
//!
//! Filter objects become a WHERE clause seeded with `1 = 1` plus a
//! positional argument list whose placeholders follow the store's dialect.

mod args;
mod filters;
mod statement;
mod where_clause;

pub use args::{Args, SqlArg};
pub use filters::FilterQuery;
pub use statement::Statement;
pub use where_clause::{Pagination, WhereClause, BASE_PREDICATE};
