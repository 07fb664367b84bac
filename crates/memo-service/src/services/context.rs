//! Service context - dependency container for services
//!
//! Holds the database handle and the stores services operate on.

use std::sync::Arc;

use memo_common::{AppConfig, AppError};
use memo_core::traits::{
    MemoCommentStore, MemoRelationStore, MemoStore, NestStore, ReactionStore,
};
use memo_db::{
    create_pool, schema, Database, DatabaseConfig, SqlMemoCommentStore, SqlMemoRelationStore,
    SqlMemoStore, SqlNestStore, SqlReactionStore,
};
use tracing::{info, instrument};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    // Database
    db: Database,

    // Stores
    reaction_store: Arc<dyn ReactionStore>,
    memo_comment_store: Arc<dyn MemoCommentStore>,
    memo_store: Arc<dyn MemoStore>,
    memo_relation_store: Arc<dyn MemoRelationStore>,
    nest_store: Arc<dyn NestStore>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        db: Database,
        reaction_store: Arc<dyn ReactionStore>,
        memo_comment_store: Arc<dyn MemoCommentStore>,
        memo_store: Arc<dyn MemoStore>,
        memo_relation_store: Arc<dyn MemoRelationStore>,
        nest_store: Arc<dyn NestStore>,
    ) -> Self {
        Self {
            db,
            reaction_store,
            memo_comment_store,
            memo_store,
            memo_relation_store,
            nest_store,
        }
    }

    /// Wire the SQL stores onto an existing database handle
    pub fn from_database(db: Database) -> Self {
        Self::new(
            db.clone(),
            Arc::new(SqlReactionStore::new(db.clone())),
            Arc::new(SqlMemoCommentStore::new(db.clone())),
            Arc::new(SqlMemoStore::new(db.clone())),
            Arc::new(SqlMemoRelationStore::new(db.clone())),
            Arc::new(SqlNestStore::new(db)),
        )
    }

    /// Open the pool, bootstrap the schema and wire the stores
    #[instrument(skip(config), fields(app = %config.app.name))]
    pub async fn connect(config: &AppConfig) -> ServiceResult<Self> {
        let db_config = DatabaseConfig {
            url: config.database.url.clone(),
            max_connections: config.database.max_connections,
            min_connections: config.database.min_connections,
            ..Default::default()
        };

        let db = create_pool(&db_config).await.map_err(AppError::connect)?;
        schema::apply(&db).await.map_err(AppError::schema)?;

        info!(dialect = %db.dialect(), "service context ready");
        Ok(Self::from_database(db))
    }

    /// Load `AppConfig` from the environment and `connect`
    pub async fn from_env() -> ServiceResult<Self> {
        let config = AppConfig::from_env().map_err(AppError::from)?;
        Self::connect(&config).await
    }

    // === Database ===

    /// Get the database handle
    pub fn db(&self) -> &Database {
        &self.db
    }

    // === Stores ===

    /// Get the reaction store
    pub fn reaction_store(&self) -> &dyn ReactionStore {
        self.reaction_store.as_ref()
    }

    /// Get the memo comment store
    pub fn memo_comment_store(&self) -> &dyn MemoCommentStore {
        self.memo_comment_store.as_ref()
    }

    /// Get the memo store
    pub fn memo_store(&self) -> &dyn MemoStore {
        self.memo_store.as_ref()
    }

    /// Get the memo relation store
    pub fn memo_relation_store(&self) -> &dyn MemoRelationStore {
        self.memo_relation_store.as_ref()
    }

    /// Get the nest store
    pub fn nest_store(&self) -> &dyn NestStore {
        self.nest_store.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("dialect", &self.db.dialect())
            .field("stores", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext with custom stores
///
/// Stores that are not set fall back to the SQL implementation.
#[derive(Default)]
pub struct ServiceContextBuilder {
    db: Option<Database>,
    reaction_store: Option<Arc<dyn ReactionStore>>,
    memo_comment_store: Option<Arc<dyn MemoCommentStore>>,
    memo_store: Option<Arc<dyn MemoStore>>,
    memo_relation_store: Option<Arc<dyn MemoRelationStore>>,
    nest_store: Option<Arc<dyn NestStore>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn db(mut self, db: Database) -> Self {
        self.db = Some(db);
        self
    }

    pub fn reaction_store(mut self, store: Arc<dyn ReactionStore>) -> Self {
        self.reaction_store = Some(store);
        self
    }

    pub fn memo_comment_store(mut self, store: Arc<dyn MemoCommentStore>) -> Self {
        self.memo_comment_store = Some(store);
        self
    }

    pub fn memo_store(mut self, store: Arc<dyn MemoStore>) -> Self {
        self.memo_store = Some(store);
        self
    }

    pub fn memo_relation_store(mut self, store: Arc<dyn MemoRelationStore>) -> Self {
        self.memo_relation_store = Some(store);
        self
    }

    pub fn nest_store(mut self, store: Arc<dyn NestStore>) -> Self {
        self.nest_store = Some(store);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if the database is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        let db = self
            .db
            .ok_or_else(|| ServiceError::validation("db is required"))?;

        Ok(ServiceContext::new(
            db.clone(),
            self.reaction_store
                .unwrap_or_else(|| Arc::new(SqlReactionStore::new(db.clone()))),
            self.memo_comment_store
                .unwrap_or_else(|| Arc::new(SqlMemoCommentStore::new(db.clone()))),
            self.memo_store
                .unwrap_or_else(|| Arc::new(SqlMemoStore::new(db.clone()))),
            self.memo_relation_store
                .unwrap_or_else(|| Arc::new(SqlMemoRelationStore::new(db.clone()))),
            self.nest_store
                .unwrap_or_else(|| Arc::new(SqlNestStore::new(db))),
        ))
    }
}
