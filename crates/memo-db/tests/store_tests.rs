//! Store behavior against a real database
//!
//! Runs on in-memory SQLite. Set `MEMO_TEST_POSTGRES_URL` to also run the
//! Postgres smoke test against an empty database.

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use sqlx::AnyConnection;

use memo_core::entities::{
    Memo, MemoComment, MemoRelation, MemoRelationType, Nest, Reaction, ReactionType,
};
use memo_core::error::DomainError;
use memo_core::filters::{
    DeleteMemo, DeleteMemoComment, DeleteMemoRelation, DeleteNest, DeleteReaction, FindMemo,
    FindMemoComment, FindMemoRelation, FindNest, FindReaction, UpdateMemo, UpdateMemoComment,
    UpdateNest,
};
use memo_core::traits::{
    MemoCommentStore, MemoRelationStore, MemoStore, NestStore, ReactionStore,
};
use memo_db::query::{Statement, WhereClause};
use memo_db::{
    create_pool, schema, Database, DatabaseConfig, SqlMemoCommentStore, SqlMemoRelationStore,
    SqlMemoStore, SqlNestStore, SqlReactionStore, TxPhase, Vacuum, VacuumScope,
    WriteTransaction,
};

async fn sqlite() -> Database {
    let db = create_pool(&DatabaseConfig::with_url("sqlite::memory:"))
        .await
        .expect("in-memory pool");
    schema::apply(&db).await.expect("schema");
    db
}

async fn seed_memo(db: &Database) -> Memo {
    SqlMemoStore::new(db.clone())
        .create(Memo::new(1, "a memo"))
        .await
        .expect("memo")
}

struct FailingVacuum;

#[async_trait]
impl Vacuum for FailingVacuum {
    async fn vacuum(&self, _conn: &mut AnyConnection, _scope: VacuumScope) -> Result<(), sqlx::Error> {
        Err(sqlx::Error::Protocol("vacuum failed".into()))
    }
}

// ============================================================================
// Memo comments
// ============================================================================

#[tokio::test]
async fn test_comment_create_list_delete() {
    let db = sqlite().await;
    let memo = seed_memo(&db).await;
    let store = SqlMemoCommentStore::new(db.clone());

    let created = store
        .create(MemoComment::new(memo.id, "alice", "hello"))
        .await
        .unwrap();
    assert!(created.id > 0);
    assert!(created.created_ts > 0);
    assert_eq!(created.updated_ts, created.created_ts);

    let listed = store.list(&FindMemoComment::by_memo(memo.id)).await.unwrap();
    assert_eq!(listed, vec![created.clone()]);

    store
        .delete(&DeleteMemoComment { id: created.id, memo_id: memo.id })
        .await
        .unwrap();
    assert!(store.list(&FindMemoComment::by_memo(memo.id)).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_comment_delete_requires_matching_memo() {
    let db = sqlite().await;
    let memo = seed_memo(&db).await;
    let store = SqlMemoCommentStore::new(db);

    let created = store.create(MemoComment::new(memo.id, "alice", "hi")).await.unwrap();
    store
        .delete(&DeleteMemoComment { id: created.id, memo_id: memo.id + 1 })
        .await
        .unwrap();

    assert_eq!(store.list(&FindMemoComment::default()).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_empty_list_is_empty_vec() {
    let db = sqlite().await;
    let comments = SqlMemoCommentStore::new(db.clone());
    let reactions = SqlReactionStore::new(db);

    assert!(comments.list(&FindMemoComment::by_memo(42)).await.unwrap().is_empty());
    assert!(reactions.list(&FindReaction::by_content(42)).await.unwrap().is_empty());
    assert!(comments.get(&FindMemoComment::by_memo(42)).await.unwrap().is_none());
}

#[tokio::test]
async fn test_comment_pagination_newest_first() {
    let db = sqlite().await;
    let memo = seed_memo(&db).await;
    let store = SqlMemoCommentStore::new(db);

    let mut ids = Vec::new();
    for i in 0..5 {
        let comment = store
            .create(MemoComment::new(memo.id, "alice", format!("comment {i}")))
            .await
            .unwrap();
        ids.push(comment.id);
    }
    ids.reverse();

    let mut find = FindMemoComment::by_memo(memo.id);
    find.limit = Some(2);
    let page: Vec<_> = store.list(&find).await.unwrap().iter().map(|c| c.id).collect();
    assert_eq!(page, ids[..2]);

    find.offset = Some(2);
    let page: Vec<_> = store.list(&find).await.unwrap().iter().map(|c| c.id).collect();
    assert_eq!(page, ids[2..4]);

    find.limit = None;
    assert_eq!(store.list(&find).await.unwrap().len(), 5);
}

#[tokio::test]
async fn test_comment_content_search_requires_every_term() {
    let db = sqlite().await;
    let memo = seed_memo(&db).await;
    let store = SqlMemoCommentStore::new(db);

    store.create(MemoComment::new(memo.id, "alice", "hello world")).await.unwrap();
    store.create(MemoComment::new(memo.id, "bob", "hello there")).await.unwrap();

    let find = FindMemoComment {
        content_search: vec!["hello".to_string()],
        ..Default::default()
    };
    assert_eq!(store.list(&find).await.unwrap().len(), 2);

    let find = FindMemoComment {
        content_search: vec!["hello".to_string(), "world".to_string()],
        ..Default::default()
    };
    let found = store.list(&find).await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].username, "alice");
}

#[tokio::test]
async fn test_comment_update() {
    let db = sqlite().await;
    let memo = seed_memo(&db).await;
    let store = SqlMemoCommentStore::new(db);

    let mut comment = MemoComment::new(memo.id, "alice", "first");
    comment.created_ts = 1_000;
    let created = store.create(comment).await.unwrap();

    let updated = store
        .update(&UpdateMemoComment {
            id: created.id,
            updated_ts: Some(2_000),
            content: Some("second".to_string()),
        })
        .await
        .unwrap();
    assert_eq!(updated.content, "second");
    assert_eq!(updated.updated_ts, 2_000);
    assert!(updated.is_edited());

    let err = store
        .update(&UpdateMemoComment { id: created.id + 100, ..Default::default() })
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::MemoCommentNotFound(_)));
}

#[tokio::test]
async fn test_comment_order_by_updated_ts() {
    let db = sqlite().await;
    let memo = seed_memo(&db).await;
    let store = SqlMemoCommentStore::new(db);

    let older = store.create(MemoComment::new(memo.id, "alice", "older")).await.unwrap();
    let newer = store.create(MemoComment::new(memo.id, "alice", "newer")).await.unwrap();
    store
        .update(&UpdateMemoComment {
            id: older.id,
            updated_ts: Some(newer.updated_ts + 60),
            content: None,
        })
        .await
        .unwrap();

    let mut find = FindMemoComment::by_memo(memo.id);
    find.order_by_updated_ts = true;
    let ids: Vec<_> = store.list(&find).await.unwrap().iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![older.id, newer.id]);
}

// ============================================================================
// Reactions
// ============================================================================

#[tokio::test]
async fn test_reaction_like() {
    let db = sqlite().await;
    let memo = seed_memo(&db).await;
    let store = SqlReactionStore::new(db);

    let created = store
        .create(Reaction::new(2, memo.id, ReactionType::Like))
        .await
        .unwrap();
    assert!(created.id > 0);
    assert!(created.created_ts > 0);

    let listed = store.list(&FindReaction::by_content(memo.id)).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].reaction_type, ReactionType::Like);
    assert_eq!(listed[0].creator_id, 2);

    store.delete(&DeleteReaction { id: created.id }).await.unwrap();
    assert!(store.get(&FindReaction::by_content(memo.id)).await.unwrap().is_none());
}

#[tokio::test]
async fn test_every_reaction_type_survives_storage() {
    let db = sqlite().await;
    let memo = seed_memo(&db).await;
    let store = SqlReactionStore::new(db);

    for reaction_type in ReactionType::ALL {
        store.create(Reaction::new(1, memo.id, reaction_type)).await.unwrap();
    }

    let stored: HashSet<_> = store
        .list(&FindReaction::by_content(memo.id))
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.reaction_type)
        .collect();
    assert_eq!(stored, ReactionType::ALL.into_iter().collect());
}

#[tokio::test]
async fn test_unknown_reaction_name_decodes_to_unspecified() {
    let db = sqlite().await;
    let memo = seed_memo(&db).await;

    let sql = format!(
        "INSERT INTO reaction (creator_id, content_id, reaction_type) VALUES (1, {}, 'SHRUG')",
        db.dialect().placeholder(1)
    );
    sqlx::query(&sql).bind(memo.id).execute(db.pool()).await.unwrap();

    let store = SqlReactionStore::new(db);
    let reaction = store.get(&FindReaction::by_content(memo.id)).await.unwrap().unwrap();
    assert_eq!(reaction.reaction_type, ReactionType::Unspecified);
}

#[tokio::test]
async fn test_duplicate_reaction_is_a_conflict() {
    let db = sqlite().await;
    let memo = seed_memo(&db).await;
    let store = SqlReactionStore::new(db);

    store.create(Reaction::new(1, memo.id, ReactionType::Heart)).await.unwrap();
    let err = store
        .create(Reaction::new(1, memo.id, ReactionType::Heart))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::ReactionAlreadyExists));
}

#[tokio::test]
async fn test_reaction_list_newest_first_and_filtered() {
    let db = sqlite().await;
    let memo = seed_memo(&db).await;
    let store = SqlReactionStore::new(db);

    let first = store.create(Reaction::new(1, memo.id, ReactionType::Fire)).await.unwrap();
    let second = store.create(Reaction::new(2, memo.id, ReactionType::Fire)).await.unwrap();

    let ids: Vec<_> = store
        .list(&FindReaction::by_content(memo.id))
        .await
        .unwrap()
        .iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(ids, vec![second.id, first.id]);

    let find = FindReaction { creator_id: Some(1), ..FindReaction::by_content(memo.id) };
    assert_eq!(store.list(&find).await.unwrap(), vec![first]);
}

#[tokio::test]
async fn test_deleting_a_missing_reaction_is_not_an_error() {
    let db = sqlite().await;
    let store = SqlReactionStore::new(db);
    store.delete(&DeleteReaction { id: 999 }).await.unwrap();
}

// ============================================================================
// Memos, nests and vacuum
// ============================================================================

#[tokio::test]
async fn test_memo_delete_vacuums_comments_and_reactions() {
    let db = sqlite().await;
    let memos = SqlMemoStore::new(db.clone());
    let comments = SqlMemoCommentStore::new(db.clone());
    let reactions = SqlReactionStore::new(db);

    let doomed = memos.create(Memo::new(1, "doomed")).await.unwrap();
    let kept = memos.create(Memo::new(1, "kept")).await.unwrap();
    for memo in [&doomed, &kept] {
        comments.create(MemoComment::new(memo.id, "alice", "hi")).await.unwrap();
        reactions.create(Reaction::new(1, memo.id, ReactionType::Eyes)).await.unwrap();
    }

    memos.delete(&DeleteMemo { id: doomed.id }).await.unwrap();

    assert!(comments.list(&FindMemoComment::by_memo(doomed.id)).await.unwrap().is_empty());
    assert!(reactions.list(&FindReaction::by_content(doomed.id)).await.unwrap().is_empty());
    assert_eq!(comments.list(&FindMemoComment::by_memo(kept.id)).await.unwrap().len(), 1);
    assert_eq!(reactions.list(&FindReaction::by_content(kept.id)).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_nest_delete_cascades_through_memos() {
    let db = sqlite().await;
    let nests = SqlNestStore::new(db.clone());
    let memos = SqlMemoStore::new(db.clone());
    let comments = SqlMemoCommentStore::new(db.clone());
    let reactions = SqlReactionStore::new(db);

    let nest = nests.create(Nest::new(1, "work", "Work")).await.unwrap();
    let filed = memos.create(Memo::new(1, "filed").in_nest(nest.id)).await.unwrap();
    let loose = memos.create(Memo::new(1, "loose")).await.unwrap();
    comments.create(MemoComment::new(filed.id, "alice", "hi")).await.unwrap();
    reactions.create(Reaction::new(1, filed.id, ReactionType::Rocket)).await.unwrap();

    nests.delete(&DeleteNest { id: nest.id }).await.unwrap();

    let remaining: Vec<_> = memos.list(&FindMemo::default()).await.unwrap();
    assert_eq!(remaining, vec![loose]);
    assert!(comments.list(&FindMemoComment::default()).await.unwrap().is_empty());
    assert!(reactions.list(&FindReaction::default()).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_failing_vacuum_rolls_back_the_delete() {
    let db = sqlite().await;
    let memo = seed_memo(&db).await;
    let store = SqlMemoCommentStore::with_vacuum(db, Arc::new(FailingVacuum));

    let created = store.create(MemoComment::new(memo.id, "alice", "keep me")).await.unwrap();
    let err = store
        .delete(&DeleteMemoComment { id: created.id, memo_id: memo.id })
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::DatabaseError(ref msg) if msg.contains("vacuum failed")));
    assert_eq!(store.list(&FindMemoComment::by_memo(memo.id)).await.unwrap(), vec![created]);
}

#[tokio::test]
async fn test_memos_filter_by_nest() {
    let db = sqlite().await;
    let memos = SqlMemoStore::new(db);

    memos.create(Memo::new(1, "one").in_nest(7)).await.unwrap();
    memos.create(Memo::new(1, "two")).await.unwrap();

    let find = FindMemo { nest_id: Some(7), ..Default::default() };
    let found = memos.list(&find).await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].nest_id, Some(7));
    assert_eq!(memos.list(&FindMemo::default()).await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_nest_uid_is_unique() {
    let db = sqlite().await;
    let nests = SqlNestStore::new(db);

    nests.create(Nest::new(1, "inbox", "Inbox")).await.unwrap();
    let err = nests.create(Nest::new(2, "inbox", "Other")).await.unwrap_err();
    assert!(matches!(err, DomainError::NestUidExists(ref uid) if uid == "inbox"));
}

#[tokio::test]
async fn test_nest_get_by_uid_and_rename() {
    let db = sqlite().await;
    let nests = SqlNestStore::new(db);

    let nest = nests.create(Nest::new(1, "inbox", "Inbox")).await.unwrap();
    let found = nests
        .get(&FindNest { uid: Some("inbox".to_string()), ..Default::default() })
        .await
        .unwrap();
    assert_eq!(found, Some(nest.clone()));

    let renamed = nests
        .update(&UpdateNest { id: nest.id, updated_ts: None, name: Some("Later".to_string()) })
        .await
        .unwrap();
    assert_eq!(renamed.name, "Later");
    assert_eq!(renamed.uid, "inbox");
}

#[tokio::test]
async fn test_comment_delete_leaves_unrelated_rows_alone() {
    let db = sqlite().await;
    let memo = seed_memo(&db).await;
    let comments = SqlMemoCommentStore::new(db.clone());
    let reactions = SqlReactionStore::new(db);

    reactions.create(Reaction::new(1, 5, ReactionType::Like)).await.unwrap();
    let elsewhere = comments.create(MemoComment::new(1000, "bob", "elsewhere")).await.unwrap();
    let doomed = comments.create(MemoComment::new(memo.id, "alice", "bye")).await.unwrap();

    comments
        .delete(&DeleteMemoComment { id: doomed.id, memo_id: memo.id })
        .await
        .unwrap();

    assert_eq!(reactions.list(&FindReaction::by_content(5)).await.unwrap().len(), 1);
    assert_eq!(comments.list(&FindMemoComment::by_memo(1000)).await.unwrap(), vec![elsewhere]);
}

#[tokio::test]
async fn test_memo_delete_only_vacuums_its_own_dependents() {
    let db = sqlite().await;
    let memo = seed_memo(&db).await;
    let reactions = SqlReactionStore::new(db.clone());
    let comments = SqlMemoCommentStore::new(db.clone());

    reactions.create(Reaction::new(1, 5, ReactionType::Like)).await.unwrap();
    comments.create(MemoComment::new(1000, "bob", "elsewhere")).await.unwrap();

    SqlMemoStore::new(db).delete(&DeleteMemo { id: memo.id }).await.unwrap();

    assert_eq!(reactions.list(&FindReaction::by_content(5)).await.unwrap().len(), 1);
    assert_eq!(comments.list(&FindMemoComment::by_memo(1000)).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_memo_moves_out_of_its_nest() {
    let db = sqlite().await;
    let memos = SqlMemoStore::new(db);

    let memo = memos.create(Memo::new(1, "filed").in_nest(3)).await.unwrap();
    let moved = memos
        .update(&UpdateMemo { id: memo.id, nest_id: Some(Some(4)), ..Default::default() })
        .await
        .unwrap();
    assert_eq!(moved.nest_id, Some(4));

    let untouched = memos
        .update(&UpdateMemo { id: memo.id, content: Some("edited".to_string()), ..Default::default() })
        .await
        .unwrap();
    assert_eq!(untouched.nest_id, Some(4));

    let loose = memos
        .update(&UpdateMemo { id: memo.id, nest_id: Some(None), ..Default::default() })
        .await
        .unwrap();
    assert_eq!(loose.nest_id, None);
}

// ============================================================================
// Memo relations
// ============================================================================

#[tokio::test]
async fn test_relation_create_list_delete() {
    let db = sqlite().await;
    let memos = SqlMemoStore::new(db.clone());
    let relations = SqlMemoRelationStore::new(db);

    let memo = memos.create(Memo::new(1, "test memo")).await.unwrap();
    let referred = memos.create(Memo::new(1, "refer memo")).await.unwrap();

    let relation = relations
        .upsert(MemoRelation::new(memo.id, referred.id, MemoRelationType::Reference))
        .await
        .unwrap();
    assert_eq!(relation.memo_id, memo.id);
    assert_eq!(relation.related_memo_id, referred.id);
    assert_eq!(relation.relation_type, MemoRelationType::Reference);

    let listed = relations.list(&FindMemoRelation::by_memo(memo.id)).await.unwrap();
    assert_eq!(listed, vec![relation]);
    assert!(relations.list(&FindMemoRelation::by_memo(referred.id)).await.unwrap().is_empty());

    relations.delete(&DeleteMemoRelation::from(relation)).await.unwrap();
    assert!(relations.list(&FindMemoRelation::by_memo(memo.id)).await.unwrap().is_empty());
    assert_eq!(memos.list(&FindMemo::default()).await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_relation_upsert_is_idempotent() {
    let db = sqlite().await;
    let relations = SqlMemoRelationStore::new(db);

    let relation = MemoRelation::new(1, 2, MemoRelationType::Reference);
    relations.upsert(relation).await.unwrap();
    assert_eq!(relations.upsert(relation).await.unwrap(), relation);
    relations
        .upsert(MemoRelation::new(1, 2, MemoRelationType::Additional))
        .await
        .unwrap();

    assert_eq!(relations.list(&FindMemoRelation::by_memo(1)).await.unwrap().len(), 2);
    let find = FindMemoRelation {
        relation_type: Some(MemoRelationType::Additional),
        ..FindMemoRelation::by_memo(1)
    };
    assert_eq!(relations.list(&find).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_relation_delete_needs_the_matching_type() {
    let db = sqlite().await;
    let relations = SqlMemoRelationStore::new(db);

    relations.upsert(MemoRelation::new(1, 2, MemoRelationType::Reference)).await.unwrap();
    relations
        .delete(&DeleteMemoRelation::from(MemoRelation::new(1, 2, MemoRelationType::Additional)))
        .await
        .unwrap();
    assert_eq!(relations.list(&FindMemoRelation::by_memo(1)).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_memo_delete_vacuums_relations_both_ways() {
    let db = sqlite().await;
    let memos = SqlMemoStore::new(db.clone());
    let relations = SqlMemoRelationStore::new(db);

    let a = memos.create(Memo::new(1, "a")).await.unwrap();
    let b = memos.create(Memo::new(1, "b")).await.unwrap();
    let c = memos.create(Memo::new(1, "c")).await.unwrap();
    relations.upsert(MemoRelation::new(a.id, b.id, MemoRelationType::Reference)).await.unwrap();
    relations.upsert(MemoRelation::new(c.id, a.id, MemoRelationType::Reference)).await.unwrap();
    let kept = relations
        .upsert(MemoRelation::new(c.id, b.id, MemoRelationType::Reference))
        .await
        .unwrap();

    memos.delete(&DeleteMemo { id: a.id }).await.unwrap();

    let remaining = relations.list(&FindMemoRelation::default()).await.unwrap();
    assert_eq!(remaining, vec![kept]);
}

#[tokio::test]
async fn test_nest_delete_vacuums_relations_of_filed_memos() {
    let db = sqlite().await;
    let nests = SqlNestStore::new(db.clone());
    let memos = SqlMemoStore::new(db.clone());
    let relations = SqlMemoRelationStore::new(db);

    let nest = nests.create(Nest::new(1, "work", "Work")).await.unwrap();
    let filed = memos.create(Memo::new(1, "filed").in_nest(nest.id)).await.unwrap();
    let loose = memos.create(Memo::new(1, "loose")).await.unwrap();
    relations
        .upsert(MemoRelation::new(loose.id, filed.id, MemoRelationType::Reference))
        .await
        .unwrap();

    nests.delete(&DeleteNest { id: nest.id }).await.unwrap();

    assert!(relations.list(&FindMemoRelation::default()).await.unwrap().is_empty());
    assert_eq!(memos.list(&FindMemo::default()).await.unwrap(), vec![loose]);
}

// ============================================================================
// Write transactions
// ============================================================================

#[tokio::test]
async fn test_failed_mutation_rolls_back_earlier_statements() {
    let db = sqlite().await;
    let memo = seed_memo(&db).await;

    let mut clause = WhereClause::new(db.dialect());
    clause.and_eq("id", memo.id);
    let delete = Statement::filtered("DELETE FROM memo", clause, "");

    let mut tx = WriteTransaction::begin(db.pool(), "test").await.unwrap();
    assert_eq!(tx.mutate(&delete).await.unwrap(), 1);
    let err = tx
        .mutate(&Statement::new("DELETE FROM no_such_table", Vec::new()))
        .await
        .unwrap_err();
    assert!(err.as_database_error().is_some());
    assert_eq!(tx.phase(), TxPhase::Rollback);
    drop(tx);

    let memos = SqlMemoStore::new(db);
    assert_eq!(memos.list(&FindMemo::default()).await.unwrap(), vec![memo]);
}

#[tokio::test]
async fn test_dropping_before_commit_rolls_back() {
    let db = sqlite().await;
    let memo = seed_memo(&db).await;

    let mut clause = WhereClause::new(db.dialect());
    clause.and_eq("id", memo.id);
    let delete = Statement::filtered("DELETE FROM memo", clause, "");

    {
        let mut tx = WriteTransaction::begin(db.pool(), "test").await.unwrap();
        tx.mutate(&delete).await.unwrap();
    }

    let memos = SqlMemoStore::new(db);
    assert_eq!(memos.list(&FindMemo::default()).await.unwrap(), vec![memo]);
}

#[tokio::test]
async fn test_commit_without_mutation_is_rejected() {
    let db = sqlite().await;
    let mut tx = WriteTransaction::begin(db.pool(), "test").await.unwrap();
    assert!(tx.commit().await.is_err());
    assert_eq!(tx.phase(), TxPhase::Begin);
}

#[tokio::test]
async fn test_commit_reaches_commit_phase() {
    let db = sqlite().await;
    let memo = seed_memo(&db).await;

    let mut clause = WhereClause::new(db.dialect());
    clause.and_eq("id", memo.id);
    let delete = Statement::filtered("DELETE FROM memo", clause, "");

    let mut tx = WriteTransaction::begin(db.pool(), "test").await.unwrap();
    tx.mutate(&delete).await.unwrap();
    tx.commit().await.unwrap();
    assert_eq!(tx.phase(), TxPhase::Commit);
    assert!(tx.commit().await.is_err());
}

#[tokio::test]
async fn test_rejected_commit_ends_in_rollback() {
    let db = sqlite().await;
    for ddl in [
        "CREATE TABLE parent (id INTEGER PRIMARY KEY)",
        "CREATE TABLE child (parent_id INTEGER REFERENCES parent (id) DEFERRABLE INITIALLY DEFERRED)",
    ] {
        sqlx::query(ddl).execute(db.pool()).await.unwrap();
    }

    let mut tx = WriteTransaction::begin(db.pool(), "test").await.unwrap();
    tx.mutate(&Statement::new("INSERT INTO child (parent_id) VALUES (42)", Vec::new()))
        .await
        .unwrap();
    assert!(tx.commit().await.is_err());
    assert_eq!(tx.phase(), TxPhase::Rollback);
    drop(tx);

    let rows = sqlx::query("SELECT parent_id FROM child").fetch_all(db.pool()).await.unwrap();
    assert!(rows.is_empty());
}

// ============================================================================
// Postgres
// ============================================================================

#[tokio::test]
async fn test_postgres_smoke() {
    let Ok(url) = std::env::var("MEMO_TEST_POSTGRES_URL") else {
        return;
    };
    let db = create_pool(&DatabaseConfig::with_url(url)).await.unwrap();
    schema::apply(&db).await.unwrap();

    let memo = seed_memo(&db).await;
    let comments = SqlMemoCommentStore::new(db.clone());
    let reactions = SqlReactionStore::new(db.clone());

    let comment = comments.create(MemoComment::new(memo.id, "alice", "hello")).await.unwrap();
    reactions.create(Reaction::new(2, memo.id, ReactionType::Like)).await.unwrap();
    assert_eq!(comments.list(&FindMemoComment::by_memo(memo.id)).await.unwrap(), vec![comment]);

    SqlMemoStore::new(db).delete(&DeleteMemo { id: memo.id }).await.unwrap();
    assert!(reactions.list(&FindReaction::by_content(memo.id)).await.unwrap().is_empty());
}
