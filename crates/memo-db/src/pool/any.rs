//! Connection pool over the sqlx `Any` driver

use std::time::Duration;

use sqlx::any::{install_default_drivers, AnyPoolOptions};
use sqlx::AnyPool;
use tracing::info;

use crate::dialect::Dialect;

/// Database configuration for connection pool
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// `postgres://...` or `sqlite:...` connection URL
    pub url: String,
    /// Maximum number of connections in the pool
    pub max_connections: u32,
    /// Minimum number of connections to maintain
    pub min_connections: u32,
    /// Maximum time to wait for a connection
    pub acquire_timeout: Duration,
    /// Maximum idle time before a connection is closed
    pub idle_timeout: Option<Duration>,
    /// Maximum lifetime of a connection
    pub max_lifetime: Option<Duration>,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::from("sqlite::memory:"),
            max_connections: 10,
            min_connections: 1,
            acquire_timeout: Duration::from_secs(10),
            idle_timeout: Some(Duration::from_secs(300)),
            max_lifetime: Some(Duration::from_secs(1800)),
        }
    }
}

impl DatabaseConfig {
    /// Config for a URL with default pool settings
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Create config from environment variables
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("DATABASE_URL") {
            config.url = url;
        }

        if let Some(max) = std::env::var("DATABASE_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config.max_connections = max;
        }

        if let Some(min) = std::env::var("DATABASE_MIN_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config.min_connections = min;
        }

        config
    }

    /// In-memory SQLite databases live and die with their connection
    pub fn is_in_memory(&self) -> bool {
        self.url.starts_with("sqlite:") && (self.url.contains(":memory:") || self.url.contains("mode=memory"))
    }
}

/// Shared pool plus the dialect its SQL must be written in
#[derive(Debug, Clone)]
pub struct Database {
    pool: AnyPool,
    dialect: Dialect,
}

impl Database {
    pub fn new(pool: AnyPool, dialect: Dialect) -> Self {
        Self { pool, dialect }
    }

    pub fn pool(&self) -> &AnyPool {
        &self.pool
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Close every connection in the pool
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

/// Create a new connection pool
///
/// The dialect comes from the URL scheme. An in-memory SQLite URL gets a
/// single connection that is never closed or recycled, otherwise every new
/// connection would see an empty database.
pub async fn create_pool(config: &DatabaseConfig) -> Result<Database, sqlx::Error> {
    let dialect =
        Dialect::from_url(&config.url).map_err(|e| sqlx::Error::Configuration(Box::new(e)))?;

    install_default_drivers();

    let options = AnyPoolOptions::new().acquire_timeout(config.acquire_timeout);
    let options = if config.is_in_memory() {
        options
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        options
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .idle_timeout(config.idle_timeout)
            .max_lifetime(config.max_lifetime)
    };

    let pool = options.connect(&config.url).await?;
    info!(%dialect, "database pool ready");

    Ok(Database::new(pool, dialect))
}

/// Create a connection pool from the DATABASE_URL environment variable
pub async fn create_pool_from_env() -> Result<Database, sqlx::Error> {
    let config = DatabaseConfig::from_env();
    create_pool(&config).await
}
