//! Database connection pool management

mod any;

pub use any::{create_pool, create_pool_from_env, Database, DatabaseConfig};

// Re-export AnyPool for convenience
pub use sqlx::AnyPool;
