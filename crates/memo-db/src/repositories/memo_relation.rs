//! SQL implementation of MemoRelationStore

use async_trait::async_trait;
use tracing::instrument;

use memo_core::entities::MemoRelation;
use memo_core::filters::{DeleteMemoRelation, FindMemoRelation};
use memo_core::traits::{MemoRelationStore, RepoResult};

use crate::models::MemoRelationModel;
use crate::pool::Database;
use crate::query::{Args, FilterQuery, Statement};
use crate::tx::WriteTransaction;

use super::error::map_db_error;

/// SQL implementation of MemoRelationStore
#[derive(Clone)]
pub struct SqlMemoRelationStore {
    db: Database,
}

impl SqlMemoRelationStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MemoRelationStore for SqlMemoRelationStore {
    #[instrument(skip(self))]
    async fn upsert(&self, relation: MemoRelation) -> RepoResult<MemoRelation> {
        let mut args = Args::new(self.db.dialect());
        let memo_id = args.push(relation.memo_id);
        let related_memo_id = args.push(relation.related_memo_id);
        let relation_type = args.push(relation.relation_type.as_str());

        // The no-op update makes RETURNING yield the existing row on conflict.
        let stmt = Statement::with_args(
            format!(
                "INSERT INTO memo_relation (memo_id, related_memo_id, relation_type) \
                 VALUES ({memo_id}, {related_memo_id}, {relation_type}) \
                 ON CONFLICT (memo_id, related_memo_id, relation_type) \
                 DO UPDATE SET relation_type = excluded.relation_type \
                 RETURNING {}",
                MemoRelationModel::COLUMNS
            ),
            args,
        );

        let model = stmt
            .query_as::<MemoRelationModel>()
            .fetch_one(self.db.pool())
            .await
            .map_err(map_db_error)?;

        Ok(MemoRelation::from(model))
    }

    #[instrument(skip(self))]
    async fn list(&self, find: &FindMemoRelation) -> RepoResult<Vec<MemoRelation>> {
        let stmt = Statement::filtered(
            &format!("SELECT {} FROM memo_relation", MemoRelationModel::COLUMNS),
            find.where_clause(self.db.dialect()),
            &find.tail(),
        );

        let results = stmt
            .query_as::<MemoRelationModel>()
            .fetch_all(self.db.pool())
            .await
            .map_err(map_db_error)?;

        Ok(results.into_iter().map(MemoRelation::from).collect())
    }

    #[instrument(skip(self))]
    async fn delete(&self, delete: &DeleteMemoRelation) -> RepoResult<()> {
        let stmt = Statement::filtered(
            "DELETE FROM memo_relation",
            delete.where_clause(self.db.dialect()),
            &delete.tail(),
        );

        let mut tx = WriteTransaction::begin(self.db.pool(), "delete_memo_relation")
            .await
            .map_err(map_db_error)?;
        tx.mutate(&stmt).await.map_err(map_db_error)?;
        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }
}
