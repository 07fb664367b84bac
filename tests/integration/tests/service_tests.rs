//! Service scenarios end to end
//!
//! Each test gets its own in-memory SQLite database.
//!
//! Run with: cargo test -p integration-tests --test service_tests

use integration_tests::{assert_error, fixtures::*, to_json, TestContext};
use memo_core::entities::{MemoRelationType, ReactionType};
use memo_service::dto::{ListQuery, UpdateMemoCommentRequest, UpdateMemoRequest, UpdateNestRequest};
use memo_service::ErrorKind;

// ============================================================================
// Comment Tests
// ============================================================================

#[tokio::test]
async fn test_comment_lifecycle() {
    let t = TestContext::start().await.unwrap();
    let memo = t.memos().create_memo(memo_request()).await.unwrap();

    let comment = t
        .comments()
        .create_comment(memo.id, comment_request("alice", "hello"))
        .await
        .unwrap();
    assert!(comment.id > 0);
    assert!(!comment.edited);

    let page = t.comments().list_comments(memo.id, ListQuery::default()).await.unwrap();
    assert_eq!(page.data.len(), 1);
    assert_eq!(page.data[0].content, "hello");
    assert!(!page.pagination.has_more);

    t.comments().delete_comment(memo.id, comment.id).await.unwrap();
    let page = t.comments().list_comments(memo.id, ListQuery::default()).await.unwrap();
    assert!(page.data.is_empty());
}

#[tokio::test]
async fn test_comment_on_missing_memo() {
    let t = TestContext::start().await.unwrap();
    let result = t.comments().create_comment(404, comment_request("alice", "hi")).await;
    assert_error(result, ErrorKind::NotFound, "NOT_FOUND").unwrap();
}

#[tokio::test]
async fn test_comment_validation() {
    let t = TestContext::start().await.unwrap();
    let memo = t.memos().create_memo(memo_request()).await.unwrap();

    let result = t.comments().create_comment(memo.id, comment_request("alice", "")).await;
    assert_error(result, ErrorKind::Invalid, "VALIDATION_ERROR").unwrap();
}

#[tokio::test]
async fn test_comment_edit_marks_edited() {
    let t = TestContext::start().await.unwrap();
    let memo = t.memos().create_memo(memo_request()).await.unwrap();
    let comment = t
        .comments()
        .create_comment(memo.id, comment_request("alice", "typo"))
        .await
        .unwrap();

    let request = UpdateMemoCommentRequest { content: Some("fixed".to_string()) };
    let updated = t.comments().update_comment(comment.id, request).await.unwrap();
    assert_eq!(updated.content, "fixed");
    assert!(updated.updated_ts >= comment.updated_ts);

    let result = t.comments().update_comment(9_999, UpdateMemoCommentRequest::default()).await;
    assert_error(result, ErrorKind::NotFound, "NOT_FOUND").unwrap();
}

#[tokio::test]
async fn test_comment_paging_and_search() {
    let t = TestContext::start().await.unwrap();
    let memo = t.memos().create_memo(memo_request()).await.unwrap();
    for i in 0..3 {
        t.comments()
            .create_comment(memo.id, comment_request("alice", &format!("note {i}")))
            .await
            .unwrap();
    }
    t.comments()
        .create_comment(memo.id, comment_request("bob", "something else"))
        .await
        .unwrap();

    let query = ListQuery { limit: Some(2), ..Default::default() };
    let page = t.comments().list_comments(memo.id, query).await.unwrap();
    assert_eq!(page.data.len(), 2);
    assert!(page.pagination.has_more);
    assert_eq!(page.data[0].content, "something else");

    let query = ListQuery { search: vec!["note".to_string()], ..Default::default() };
    let page = t.comments().list_comments(memo.id, query).await.unwrap();
    assert_eq!(page.data.len(), 3);
    assert!(page.data.iter().all(|c| c.username == "alice"));
}

#[tokio::test]
async fn test_deleting_comment_from_wrong_memo() {
    let t = TestContext::start().await.unwrap();
    let memo = t.memos().create_memo(memo_request()).await.unwrap();
    let other = t.memos().create_memo(memo_request()).await.unwrap();
    let comment = t
        .comments()
        .create_comment(memo.id, comment_request("alice", "hi"))
        .await
        .unwrap();

    let result = t.comments().delete_comment(other.id, comment.id).await;
    assert_error(result, ErrorKind::NotFound, "NOT_FOUND").unwrap();
}

// ============================================================================
// Reaction Tests
// ============================================================================

#[tokio::test]
async fn test_like_a_memo() {
    let t = TestContext::start().await.unwrap();
    let memo = t.memos().create_memo(memo_request()).await.unwrap();

    let reaction = t
        .reactions()
        .add_reaction(reaction_request(2, memo.id, ReactionType::Like))
        .await
        .unwrap();
    assert_eq!(reaction.reaction_type, "LIKE");

    let listed = t.reactions().list_reactions(memo.id).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(to_json(&listed[0]).unwrap()["reaction_type"], "LIKE");

    t.reactions().remove_reaction(reaction.id).await.unwrap();
    assert!(t.reactions().list_reactions(memo.id).await.unwrap().is_empty());
    assert_error(t.reactions().remove_reaction(reaction.id).await, ErrorKind::NotFound, "NOT_FOUND").unwrap();
}

#[tokio::test]
async fn test_duplicate_reaction_conflicts() {
    let t = TestContext::start().await.unwrap();
    let memo = t.memos().create_memo(memo_request()).await.unwrap();

    t.reactions()
        .add_reaction(reaction_request(2, memo.id, ReactionType::Heart))
        .await
        .unwrap();
    let result = t
        .reactions()
        .add_reaction(reaction_request(2, memo.id, ReactionType::Heart))
        .await;
    assert_error(result, ErrorKind::Conflict, "REACTION_ALREADY_EXISTS").unwrap();

    // A different type from the same user is fine
    t.reactions()
        .add_reaction(reaction_request(2, memo.id, ReactionType::Fire))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_unspecified_reaction_is_rejected() {
    let t = TestContext::start().await.unwrap();
    let memo = t.memos().create_memo(memo_request()).await.unwrap();
    let result = t
        .reactions()
        .add_reaction(reaction_request(2, memo.id, ReactionType::Unspecified))
        .await;
    assert_error(result, ErrorKind::Invalid, "VALIDATION_ERROR").unwrap();
}

// ============================================================================
// Memo and Nest Tests
// ============================================================================

#[tokio::test]
async fn test_memo_delete_removes_comments_and_reactions() {
    let t = TestContext::start().await.unwrap();
    let memo = t.memos().create_memo(memo_request()).await.unwrap();
    t.comments()
        .create_comment(memo.id, comment_request("alice", "hi"))
        .await
        .unwrap();
    t.reactions()
        .add_reaction(reaction_request(2, memo.id, ReactionType::Rocket))
        .await
        .unwrap();

    t.memos().delete_memo(memo.id).await.unwrap();

    assert_error(t.memos().get_memo(memo.id).await, ErrorKind::NotFound, "NOT_FOUND").unwrap();
    assert!(t.reactions().list_reactions(memo.id).await.unwrap().is_empty());
    let page = t.comments().list_comments(memo.id, ListQuery::default()).await.unwrap();
    assert!(page.data.is_empty());
}

#[tokio::test]
async fn test_nest_lifecycle() {
    let t = TestContext::start().await.unwrap();
    let nest = t.nests().create_nest(nest_request()).await.unwrap();
    assert_eq!(nest.uid.len(), 32);

    let by_uid = t.nests().get_nest_by_uid(&nest.uid).await.unwrap();
    assert_eq!(by_uid.id, nest.id);

    let request = UpdateNestRequest { name: Some("Renamed".to_string()) };
    let renamed = t.nests().update_nest(nest.id, request).await.unwrap();
    assert_eq!(renamed.name, "Renamed");

    let filed = t.memos().create_memo(memo_in_nest(nest.id)).await.unwrap();
    let loose = t.memos().create_memo(memo_request()).await.unwrap();

    t.nests().delete_nest(nest.id).await.unwrap();

    assert_error(t.nests().get_nest(nest.id).await, ErrorKind::NotFound, "NOT_FOUND").unwrap();
    assert_error(t.memos().get_memo(filed.id).await, ErrorKind::NotFound, "NOT_FOUND").unwrap();
    assert_eq!(t.memos().get_memo(loose.id).await.unwrap().id, loose.id);
}

#[tokio::test]
async fn test_memo_in_missing_nest() {
    let t = TestContext::start().await.unwrap();
    let result = t.memos().create_memo(memo_in_nest(77)).await;
    assert_error(result, ErrorKind::NotFound, "NOT_FOUND").unwrap();

    let memo = t.memos().create_memo(memo_request()).await.unwrap();
    let request = UpdateMemoRequest { nest_id: Some(Some(77)), ..Default::default() };
    let result = t.memos().update_memo(memo.id, request).await;
    assert_error(result, ErrorKind::NotFound, "NOT_FOUND").unwrap();
}

#[tokio::test]
async fn test_memo_leaves_its_nest() {
    let t = TestContext::start().await.unwrap();
    let nest = t.nests().create_nest(nest_request()).await.unwrap();
    let memo = t.memos().create_memo(memo_in_nest(nest.id)).await.unwrap();
    assert_eq!(memo.nest_id, Some(nest.id));

    let request = UpdateMemoRequest { nest_id: Some(None), ..Default::default() };
    let memo = t.memos().update_memo(memo.id, request).await.unwrap();
    assert_eq!(memo.nest_id, None);

    t.nests().delete_nest(nest.id).await.unwrap();
    assert_eq!(t.memos().get_memo(memo.id).await.unwrap().id, memo.id);
}

#[tokio::test]
async fn test_list_memos_by_nest() {
    let t = TestContext::start().await.unwrap();
    let nest = t.nests().create_nest(nest_request()).await.unwrap();
    let filed = t.memos().create_memo(memo_in_nest(nest.id)).await.unwrap();
    t.memos().create_memo(memo_request()).await.unwrap();

    let page = t
        .memos()
        .list_memos(None, Some(nest.id), ListQuery::default())
        .await
        .unwrap();
    assert_eq!(page.data.len(), 1);
    assert_eq!(page.data[0].id, filed.id);

    let page = t
        .memos()
        .list_memos(Some(TEST_CREATOR), None, ListQuery::default())
        .await
        .unwrap();
    assert_eq!(page.data.len(), 2);
}

#[tokio::test]
async fn test_list_nests_limit_is_clamped() {
    let t = TestContext::start().await.unwrap();
    t.nests().create_nest(nest_request()).await.unwrap();

    let query = ListQuery { limit: Some(1_000), ..Default::default() };
    let page = t.nests().list_nests(Some(TEST_CREATOR), query).await.unwrap();
    assert_eq!(page.pagination.limit, 100);
    assert_eq!(page.data.len(), 1);
}

// ============================================================================
// Memo Relation Tests
// ============================================================================

#[tokio::test]
async fn test_memo_reference_lifecycle() {
    let t = TestContext::start().await.unwrap();
    let memo = t.memos().create_memo(memo_request()).await.unwrap();
    let referred = t.memos().create_memo(memo_request()).await.unwrap();

    let relation = t
        .relations()
        .create_relation(memo.id, reference_to(referred.id))
        .await
        .unwrap();
    assert_eq!(relation.memo_id, memo.id);
    assert_eq!(relation.related_memo_id, referred.id);
    assert_eq!(relation.relation_type, "REFERENCE");

    let relations = t.relations().list_relations(memo.id).await.unwrap();
    assert_eq!(relations.len(), 1);

    t.relations()
        .delete_relation(memo.id, reference_to(referred.id))
        .await
        .unwrap();
    assert!(t.relations().list_relations(memo.id).await.unwrap().is_empty());

    let page = t.memos().list_memos(None, None, ListQuery::default()).await.unwrap();
    assert_eq!(page.data.len(), 2);
}

#[tokio::test]
async fn test_relation_needs_both_memos() {
    let t = TestContext::start().await.unwrap();
    let memo = t.memos().create_memo(memo_request()).await.unwrap();

    let result = t.relations().create_relation(memo.id, reference_to(999)).await;
    assert_error(result, ErrorKind::NotFound, "NOT_FOUND").unwrap();

    let result = t.relations().create_relation(memo.id, reference_to(memo.id)).await;
    assert_error(result, ErrorKind::Invalid, "VALIDATION_ERROR").unwrap();

    let mut request = reference_to(memo.id);
    request.relation_type = MemoRelationType::Unspecified;
    let result = t.relations().create_relation(memo.id, request).await;
    assert_error(result, ErrorKind::Invalid, "VALIDATION_ERROR").unwrap();
}

#[tokio::test]
async fn test_deleting_a_missing_relation_is_not_found() {
    let t = TestContext::start().await.unwrap();
    let memo = t.memos().create_memo(memo_request()).await.unwrap();
    let other = t.memos().create_memo(memo_request()).await.unwrap();

    let result = t.relations().delete_relation(memo.id, reference_to(other.id)).await;
    assert_error(result, ErrorKind::NotFound, "NOT_FOUND").unwrap();
}

#[tokio::test]
async fn test_deleting_a_memo_drops_relations_to_it() {
    let t = TestContext::start().await.unwrap();
    let memo = t.memos().create_memo(memo_request()).await.unwrap();
    let referred = t.memos().create_memo(memo_request()).await.unwrap();
    t.relations()
        .create_relation(memo.id, reference_to(referred.id))
        .await
        .unwrap();

    t.memos().delete_memo(referred.id).await.unwrap();

    assert!(t.relations().list_relations(memo.id).await.unwrap().is_empty());
    let json = to_json(&t.memos().get_memo(memo.id).await.unwrap()).unwrap();
    assert_eq!(json["id"], memo.id);
}
