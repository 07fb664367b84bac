//! SQL implementation of MemoStore

use std::sync::Arc;

use async_trait::async_trait;
use tracing::instrument;

use memo_core::entities::Memo;
use memo_core::error::DomainError;
use memo_core::filters::{DeleteMemo, FindMemo, UpdateMemo};
use memo_core::traits::{MemoStore, RepoResult};

use crate::mappers::MemoInsert;
use crate::models::MemoModel;
use crate::pool::Database;
use crate::query::{Args, FilterQuery, Statement, WhereClause};
use crate::tx::{OrphanVacuum, Vacuum, VacuumScope, WriteTransaction};

use super::error::map_db_error;

/// SQL implementation of MemoStore
#[derive(Clone)]
pub struct SqlMemoStore {
    db: Database,
    vacuum: Arc<dyn Vacuum>,
}

impl SqlMemoStore {
    /// Create a new SqlMemoStore that vacuums comments, reactions and relations on delete
    pub fn new(db: Database) -> Self {
        let vacuum = Arc::new(OrphanVacuum::new(db.dialect()));
        Self::with_vacuum(db, vacuum)
    }

    pub fn with_vacuum(db: Database, vacuum: Arc<dyn Vacuum>) -> Self {
        Self { db, vacuum }
    }
}

#[async_trait]
impl MemoStore for SqlMemoStore {
    #[instrument(skip(self))]
    async fn create(&self, memo: Memo) -> RepoResult<Memo> {
        let insert = MemoInsert::new(&memo);
        let mut args = Args::new(self.db.dialect());
        let created_ts = args.push(insert.created_ts);
        let updated_ts = args.push(insert.updated_ts);
        let creator_id = args.push(insert.creator_id);
        let nest_id = args.push_nullable(insert.nest_id);
        let content = args.push(insert.content);

        let stmt = Statement::with_args(
            format!(
                "INSERT INTO memo (created_ts, updated_ts, creator_id, nest_id, content) \
                 VALUES ({created_ts}, {updated_ts}, {creator_id}, {nest_id}, {content}) \
                 RETURNING {}",
                MemoModel::COLUMNS
            ),
            args,
        );

        let model = stmt
            .query_as::<MemoModel>()
            .fetch_one(self.db.pool())
            .await
            .map_err(map_db_error)?;

        Ok(Memo::from(model))
    }

    #[instrument(skip(self))]
    async fn list(&self, find: &FindMemo) -> RepoResult<Vec<Memo>> {
        let stmt = Statement::filtered(
            &format!("SELECT {} FROM memo", MemoModel::COLUMNS),
            find.where_clause(self.db.dialect()),
            &find.tail(),
        );

        let results = stmt
            .query_as::<MemoModel>()
            .fetch_all(self.db.pool())
            .await
            .map_err(map_db_error)?;

        Ok(results.into_iter().map(Memo::from).collect())
    }

    #[instrument(skip(self))]
    async fn update(&self, update: &UpdateMemo) -> RepoResult<Memo> {
        let mut args = Args::new(self.db.dialect());
        let updated_ts = update
            .updated_ts
            .unwrap_or_else(|| chrono::Utc::now().timestamp());
        let mut sets = vec![format!("updated_ts = {}", args.push(updated_ts))];
        if let Some(content) = &update.content {
            sets.push(format!("content = {}", args.push(content.as_str())));
        }
        if let Some(nest_id) = update.nest_id {
            sets.push(format!("nest_id = {}", args.push_nullable(nest_id)));
        }

        let mut clause = WhereClause::with_args(args);
        clause.and_eq("id", update.id);
        let stmt = Statement::filtered(
            &format!("UPDATE memo SET {}", sets.join(", ")),
            clause,
            &format!(" RETURNING {}", MemoModel::COLUMNS),
        );

        let model = stmt
            .query_as::<MemoModel>()
            .fetch_optional(self.db.pool())
            .await
            .map_err(map_db_error)?
            .ok_or(DomainError::MemoNotFound(update.id))?;

        Ok(Memo::from(model))
    }

    #[instrument(skip(self))]
    async fn delete(&self, delete: &DeleteMemo) -> RepoResult<()> {
        let mut clause = WhereClause::new(self.db.dialect());
        clause.and_eq("id", delete.id);
        let stmt = Statement::filtered("DELETE FROM memo", clause, "");

        let mut tx = WriteTransaction::begin(self.db.pool(), "delete_memo")
            .await
            .map_err(map_db_error)?;
        tx.mutate(&stmt).await.map_err(map_db_error)?;
        tx.cleanup(self.vacuum.as_ref(), VacuumScope::Memo(delete.id))
            .await
            .map_err(map_db_error)?;
        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }
}
