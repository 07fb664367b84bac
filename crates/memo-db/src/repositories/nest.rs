//! SQL implementation of NestStore

use std::sync::Arc;

use async_trait::async_trait;
use tracing::instrument;

use memo_core::entities::Nest;
use memo_core::error::DomainError;
use memo_core::filters::{DeleteNest, FindNest, UpdateNest};
use memo_core::traits::{NestStore, RepoResult};

use crate::mappers::NestInsert;
use crate::models::NestModel;
use crate::pool::Database;
use crate::query::{Args, FilterQuery, Statement, WhereClause};
use crate::tx::{OrphanVacuum, Vacuum, VacuumScope, WriteTransaction};

use super::error::{map_db_error, map_unique_violation};

/// SQL implementation of NestStore
#[derive(Clone)]
pub struct SqlNestStore {
    db: Database,
    vacuum: Arc<dyn Vacuum>,
}

impl SqlNestStore {
    /// Create a new SqlNestStore; deleting a nest vacuums the memos filed under it
    pub fn new(db: Database) -> Self {
        let vacuum = Arc::new(OrphanVacuum::new(db.dialect()));
        Self::with_vacuum(db, vacuum)
    }

    pub fn with_vacuum(db: Database, vacuum: Arc<dyn Vacuum>) -> Self {
        Self { db, vacuum }
    }
}

#[async_trait]
impl NestStore for SqlNestStore {
    #[instrument(skip(self))]
    async fn create(&self, nest: Nest) -> RepoResult<Nest> {
        let insert = NestInsert::new(&nest);
        let mut args = Args::new(self.db.dialect());
        let uid = args.push(insert.uid);
        let created_ts = args.push(insert.created_ts);
        let updated_ts = args.push(insert.updated_ts);
        let creator_id = args.push(insert.creator_id);
        let name = args.push(insert.name);

        let stmt = Statement::with_args(
            format!(
                "INSERT INTO nest (uid, created_ts, updated_ts, creator_id, name) \
                 VALUES ({uid}, {created_ts}, {updated_ts}, {creator_id}, {name}) \
                 RETURNING {}",
                NestModel::COLUMNS
            ),
            args,
        );

        let model = stmt
            .query_as::<NestModel>()
            .fetch_one(self.db.pool())
            .await
            .map_err(|e| map_unique_violation(e, || DomainError::NestUidExists(nest.uid.clone())))?;

        Ok(Nest::from(model))
    }

    #[instrument(skip(self))]
    async fn list(&self, find: &FindNest) -> RepoResult<Vec<Nest>> {
        let stmt = Statement::filtered(
            &format!("SELECT {} FROM nest", NestModel::COLUMNS),
            find.where_clause(self.db.dialect()),
            &find.tail(),
        );

        let results = stmt
            .query_as::<NestModel>()
            .fetch_all(self.db.pool())
            .await
            .map_err(map_db_error)?;

        Ok(results.into_iter().map(Nest::from).collect())
    }

    #[instrument(skip(self))]
    async fn update(&self, update: &UpdateNest) -> RepoResult<Nest> {
        let mut args = Args::new(self.db.dialect());
        let updated_ts = update
            .updated_ts
            .unwrap_or_else(|| chrono::Utc::now().timestamp());
        let mut sets = vec![format!("updated_ts = {}", args.push(updated_ts))];
        if let Some(name) = &update.name {
            sets.push(format!("name = {}", args.push(name.as_str())));
        }

        let mut clause = WhereClause::with_args(args);
        clause.and_eq("id", update.id);
        let stmt = Statement::filtered(
            &format!("UPDATE nest SET {}", sets.join(", ")),
            clause,
            &format!(" RETURNING {}", NestModel::COLUMNS),
        );

        let model = stmt
            .query_as::<NestModel>()
            .fetch_optional(self.db.pool())
            .await
            .map_err(map_db_error)?
            .ok_or_else(|| DomainError::NestNotFound(update.id.to_string()))?;

        Ok(Nest::from(model))
    }

    #[instrument(skip(self))]
    async fn delete(&self, delete: &DeleteNest) -> RepoResult<()> {
        let mut clause = WhereClause::new(self.db.dialect());
        clause.and_eq("id", delete.id);
        let stmt = Statement::filtered("DELETE FROM nest", clause, "");

        let mut tx = WriteTransaction::begin(self.db.pool(), "delete_nest")
            .await
            .map_err(map_db_error)?;
        tx.mutate(&stmt).await.map_err(map_db_error)?;
        tx.cleanup(self.vacuum.as_ref(), VacuumScope::Nest(delete.id))
            .await
            .map_err(map_db_error)?;
        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }
}
