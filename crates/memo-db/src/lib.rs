//! # memo-db
//!
//! Database layer implementing the memo-core store traits with SQLx.
//!
//! ## Overview
//!
//! Stores run on the sqlx `Any` driver against PostgreSQL or SQLite. The
//! crate provides:
//!
//! - Connection pool management and dialect detection
//! - A filter -> WHERE clause builder with dialect-aware placeholders
//! - A write-transaction coordinator with scoped vacuum for deletes
//! - Schema bootstrap
//! - Database models with SQLx `FromRow` derives and entity mappers
//! - Store implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use memo_db::pool::{create_pool, DatabaseConfig};
//! use memo_db::repositories::SqlMemoCommentStore;
//! use memo_core::traits::MemoCommentStore;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let db = create_pool(&DatabaseConfig::from_env()).await?;
//!     memo_db::schema::apply(&db).await?;
//!     let comments = SqlMemoCommentStore::new(db);
//!
//!     // Use the store...
//!     Ok(())
//! }
//! ```

pub mod dialect;
pub mod mappers;
pub mod models;
pub mod pool;
pub mod query;
pub mod repositories;
pub mod schema;
pub mod tx;

// Re-export commonly used types
pub use dialect::{Dialect, UnsupportedDialect};
pub use pool::{create_pool, create_pool_from_env, Database, DatabaseConfig};
pub use repositories::{
    SqlMemoCommentStore, SqlMemoRelationStore, SqlMemoStore, SqlNestStore, SqlReactionStore,
};
pub use tx::{OrphanVacuum, TxPhase, Vacuum, VacuumScope, WriteTransaction};
