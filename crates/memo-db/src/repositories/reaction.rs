//! SQL implementation of ReactionStore

use async_trait::async_trait;
use tracing::instrument;

use memo_core::entities::Reaction;
use memo_core::error::DomainError;
use memo_core::filters::{DeleteReaction, FindReaction};
use memo_core::traits::{ReactionStore, RepoResult};

use crate::mappers::ReactionInsert;
use crate::models::ReactionModel;
use crate::pool::Database;
use crate::query::{Args, FilterQuery, Statement, WhereClause};
use crate::tx::WriteTransaction;

use super::error::{map_db_error, map_unique_violation};

/// SQL implementation of ReactionStore
#[derive(Clone)]
pub struct SqlReactionStore {
    db: Database,
}

impl SqlReactionStore {
    /// Create a new SqlReactionStore
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReactionStore for SqlReactionStore {
    #[instrument(skip(self))]
    async fn create(&self, reaction: Reaction) -> RepoResult<Reaction> {
        let insert = ReactionInsert::new(&reaction);
        let mut args = Args::new(self.db.dialect());
        let creator_id = args.push(insert.creator_id);
        let content_id = args.push(insert.content_id);
        let reaction_type = args.push(insert.reaction_type);

        let stmt = Statement::with_args(
            format!(
                "INSERT INTO reaction (creator_id, content_id, reaction_type) \
                 VALUES ({creator_id}, {content_id}, {reaction_type}) \
                 RETURNING {}",
                ReactionModel::COLUMNS
            ),
            args,
        );

        let model = stmt
            .query_as::<ReactionModel>()
            .fetch_one(self.db.pool())
            .await
            .map_err(|e| map_unique_violation(e, || DomainError::ReactionAlreadyExists))?;

        Ok(Reaction::from(model))
    }

    #[instrument(skip(self))]
    async fn list(&self, find: &FindReaction) -> RepoResult<Vec<Reaction>> {
        let stmt = Statement::filtered(
            &format!("SELECT {} FROM reaction", ReactionModel::COLUMNS),
            find.where_clause(self.db.dialect()),
            &find.tail(),
        );

        let results = stmt
            .query_as::<ReactionModel>()
            .fetch_all(self.db.pool())
            .await
            .map_err(map_db_error)?;

        Ok(results.into_iter().map(Reaction::from).collect())
    }

    #[instrument(skip(self))]
    async fn delete(&self, delete: &DeleteReaction) -> RepoResult<()> {
        let mut clause = WhereClause::new(self.db.dialect());
        clause.and_eq("id", delete.id);
        let stmt = Statement::filtered("DELETE FROM reaction", clause, "");

        let mut tx = WriteTransaction::begin(self.db.pool(), "delete_reaction")
            .await
            .map_err(map_db_error)?;
        tx.mutate(&stmt).await.map_err(map_db_error)?;
        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }
}
