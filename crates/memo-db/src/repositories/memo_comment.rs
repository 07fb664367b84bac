//! SQL implementation of MemoCommentStore

use std::sync::Arc;

use async_trait::async_trait;
use tracing::instrument;

use memo_core::entities::MemoComment;
use memo_core::error::DomainError;
use memo_core::filters::{DeleteMemoComment, FindMemoComment, UpdateMemoComment};
use memo_core::traits::{MemoCommentStore, RepoResult};

use crate::mappers::MemoCommentInsert;
use crate::models::MemoCommentModel;
use crate::pool::Database;
use crate::query::{Args, FilterQuery, Statement, WhereClause};
use crate::tx::{OrphanVacuum, Vacuum, VacuumScope, WriteTransaction};

use super::error::map_db_error;

/// SQL implementation of MemoCommentStore
#[derive(Clone)]
pub struct SqlMemoCommentStore {
    db: Database,
    vacuum: Arc<dyn Vacuum>,
}

impl SqlMemoCommentStore {
    /// Create a new SqlMemoCommentStore
    pub fn new(db: Database) -> Self {
        let vacuum = Arc::new(OrphanVacuum::new(db.dialect()));
        Self::with_vacuum(db, vacuum)
    }

    /// Create a store with a custom delete cleanup
    pub fn with_vacuum(db: Database, vacuum: Arc<dyn Vacuum>) -> Self {
        Self { db, vacuum }
    }
}

#[async_trait]
impl MemoCommentStore for SqlMemoCommentStore {
    #[instrument(skip(self))]
    async fn create(&self, comment: MemoComment) -> RepoResult<MemoComment> {
        let insert = MemoCommentInsert::new(&comment);
        let mut args = Args::new(self.db.dialect());
        let created_ts = args.push(insert.created_ts);
        let updated_ts = args.push(insert.updated_ts);
        let content = args.push(insert.content);
        let username = args.push(insert.username);
        let memo_id = args.push(insert.memo_id);

        let stmt = Statement::with_args(
            format!(
                "INSERT INTO memo_comment (created_ts, updated_ts, content, username, memo_id) \
                 VALUES ({created_ts}, {updated_ts}, {content}, {username}, {memo_id}) \
                 RETURNING {}",
                MemoCommentModel::COLUMNS
            ),
            args,
        );

        let model = stmt
            .query_as::<MemoCommentModel>()
            .fetch_one(self.db.pool())
            .await
            .map_err(map_db_error)?;

        Ok(MemoComment::from(model))
    }

    #[instrument(skip(self))]
    async fn list(&self, find: &FindMemoComment) -> RepoResult<Vec<MemoComment>> {
        let stmt = Statement::filtered(
            &format!("SELECT {} FROM memo_comment", MemoCommentModel::COLUMNS),
            find.where_clause(self.db.dialect()),
            &find.tail(),
        );

        let results = stmt
            .query_as::<MemoCommentModel>()
            .fetch_all(self.db.pool())
            .await
            .map_err(map_db_error)?;

        Ok(results.into_iter().map(MemoComment::from).collect())
    }

    #[instrument(skip(self))]
    async fn update(&self, update: &UpdateMemoComment) -> RepoResult<MemoComment> {
        let mut args = Args::new(self.db.dialect());
        let updated_ts = update
            .updated_ts
            .unwrap_or_else(|| chrono::Utc::now().timestamp());
        let mut sets = vec![format!("updated_ts = {}", args.push(updated_ts))];
        if let Some(content) = &update.content {
            sets.push(format!("content = {}", args.push(content.as_str())));
        }

        let mut clause = WhereClause::with_args(args);
        clause.and_eq("id", update.id);
        let stmt = Statement::filtered(
            &format!("UPDATE memo_comment SET {}", sets.join(", ")),
            clause,
            &format!(" RETURNING {}", MemoCommentModel::COLUMNS),
        );

        let model = stmt
            .query_as::<MemoCommentModel>()
            .fetch_optional(self.db.pool())
            .await
            .map_err(map_db_error)?
            .ok_or(DomainError::MemoCommentNotFound(update.id))?;

        Ok(MemoComment::from(model))
    }

    #[instrument(skip(self))]
    async fn delete(&self, delete: &DeleteMemoComment) -> RepoResult<()> {
        let mut clause = WhereClause::new(self.db.dialect());
        clause.and_eq("id", delete.id).and_eq("memo_id", delete.memo_id);
        let stmt = Statement::filtered("DELETE FROM memo_comment", clause, "");

        let mut tx = WriteTransaction::begin(self.db.pool(), "delete_memo_comment")
            .await
            .map_err(map_db_error)?;
        tx.mutate(&stmt).await.map_err(map_db_error)?;
        tx.cleanup(self.vacuum.as_ref(), VacuumScope::MemoComment(delete.id))
            .await
            .map_err(map_db_error)?;
        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }
}
