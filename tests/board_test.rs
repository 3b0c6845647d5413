//! Board operation tests
//!
//! Exercises message creation, comment association and the aggregate read
//! against the in-memory store, including injected store failures.

#[macro_use]
mod common;

use assert_matches::assert_matches;
use common::FlakyStore;
use msgboard::backend::error::{BackendError, WriteStage};
use msgboard::backend::store::{BoardStore, MemoryStore};
use msgboard::backend::{load_all_messages_with_comments, reconcile_orphans, submit_comment};
use msgboard::shared::NewComment;
use pretty_assertions::assert_eq;
use uuid::Uuid;

#[tokio::test]
async fn test_message_round_trip() {
    let store = MemoryStore::new();
    assert_ok!(store.create_message(Some("A".into()), Some("hello".into())).await);

    let views = assert_ok!(load_all_messages_with_comments(&store).await);
    assert_eq!(views.len(), 1);
    assert_eq!(views[0].name.as_deref(), Some("A"));
    assert_eq!(views[0].message.as_deref(), Some("hello"));
    assert!(views[0].comments.is_empty());
}

#[tokio::test]
async fn test_comment_association() {
    let store = MemoryStore::new();
    let m = assert_ok!(store.create_message(Some("A".into()), Some("hi".into())).await);

    assert_ok!(submit_comment(&store, m.id, NewComment::new("B", "hey")).await);

    let views = assert_ok!(load_all_messages_with_comments(&store).await);
    let view = views.iter().find(|v| v.id == m.id).expect("message should be listed");
    assert_eq!(view.comments.len(), 1);
    assert_eq!(view.comments[0].name.as_deref(), Some("B"));
    assert_eq!(view.comments[0].comment.as_deref(), Some("hey"));
    assert_eq!(view.comments[0].message_ref, Some(m.id));
}

#[tokio::test]
async fn test_order_preservation() {
    let store = MemoryStore::new();
    let m = assert_ok!(store.create_message(None, None).await);

    let c1 = assert_ok!(submit_comment(&store, m.id, NewComment::new("1", "first")).await);
    let c2 = assert_ok!(submit_comment(&store, m.id, NewComment::new("2", "second")).await);

    let stored = assert_ok!(store.find_message_by_id(m.id).await).unwrap();
    assert_eq!(stored.comment_refs, vec![c1.id, c2.id]);

    let views = assert_ok!(load_all_messages_with_comments(&store).await);
    let order: Vec<Uuid> = views[0].comments.iter().map(|c| c.id).collect();
    assert_eq!(order, vec![c1.id, c2.id]);
}

#[tokio::test]
async fn test_missing_target() {
    let store = MemoryStore::new();
    assert_ok!(store.create_message(None, None).await);

    let result = submit_comment(&store, Uuid::new_v4(), NewComment::new("B", "hey")).await;

    assert_matches!(result, Err(BackendError::NotFound { entity: "message", .. }));
    assert!(assert_ok!(store.find_all_comments().await).is_empty());
}

#[tokio::test]
async fn test_idempotent_read() {
    let store = MemoryStore::new();
    let m = assert_ok!(store.create_message(Some("A".into()), Some("hi".into())).await);
    assert_ok!(submit_comment(&store, m.id, NewComment::new("B", "hey")).await);

    let first = assert_ok!(load_all_messages_with_comments(&store).await);
    let second = assert_ok!(load_all_messages_with_comments(&store).await);
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_alice_bob_carl_scenario() {
    let store = MemoryStore::new();
    let m1 = assert_ok!(store.create_message(Some("Alice".into()), Some("Hi".into())).await);
    assert_ok!(store.create_message(Some("Bob".into()), Some("Yo".into())).await);
    assert_ok!(submit_comment(&store, m1.id, NewComment::new("Carl", "nice")).await);

    let views = assert_ok!(load_all_messages_with_comments(&store).await);
    let summary: Vec<(Option<&str>, Option<&str>, Vec<(Option<&str>, Option<&str>)>)> = views
        .iter()
        .map(|v| {
            (
                v.name.as_deref(),
                v.message.as_deref(),
                v.comments
                    .iter()
                    .map(|c| (c.name.as_deref(), c.comment.as_deref()))
                    .collect(),
            )
        })
        .collect();

    assert_eq!(
        summary,
        vec![
            (Some("Alice"), Some("Hi"), vec![(Some("Carl"), Some("nice"))]),
            (Some("Bob"), Some("Yo"), vec![]),
        ]
    );
}

#[tokio::test]
async fn test_comment_write_failure_leaves_parent_untouched() {
    let store = FlakyStore::new();
    let m = assert_ok!(store.create_message(None, None).await);
    store.set(|f| &f.create_comment, true);

    let result = submit_comment(&store, m.id, NewComment::new("B", "hey")).await;

    let error = result.expect_err("comment write should fail");
    assert_eq!(error.write_stage(), Some(WriteStage::Comment));
    let stored = assert_ok!(store.find_message_by_id(m.id).await).unwrap();
    assert!(stored.comment_refs.is_empty());
    assert!(assert_ok!(store.find_all_comments().await).is_empty());
}

#[tokio::test]
async fn test_parent_update_failure_orphans_comment_until_reconciled() {
    let store = FlakyStore::new();
    let m = assert_ok!(store.create_message(Some("A".into()), None).await);
    store.set(|f| &f.append_comment_ref, true);

    let error = submit_comment(&store, m.id, NewComment::new("B", "hey"))
        .await
        .expect_err("parent update should fail");
    assert_eq!(error.write_stage(), Some(WriteStage::ParentUpdate));

    // The comment exists but the view does not show it.
    let orphans = assert_ok!(store.find_all_comments().await);
    assert_eq!(orphans.len(), 1);
    assert_eq!(orphans[0].message_ref, Some(m.id));
    let views = assert_ok!(load_all_messages_with_comments(&store).await);
    assert!(views[0].comments.is_empty());

    store.set(|f| &f.append_comment_ref, false);
    let report = assert_ok!(reconcile_orphans(&store).await);
    assert_eq!(report.repaired, vec![orphans[0].id]);

    let views = assert_ok!(load_all_messages_with_comments(&store).await);
    assert_eq!(views[0].comments, orphans);
}

#[tokio::test]
async fn test_read_failure_reports_store_read() {
    let store = FlakyStore::new();
    assert_ok!(store.create_message(None, None).await);
    store.set(|f| &f.reads, true);

    let result = load_all_messages_with_comments(&store).await;
    assert_matches!(result, Err(BackendError::StoreRead { .. }));

    let result = submit_comment(&store, Uuid::new_v4(), NewComment::new("B", "hey")).await;
    assert_matches!(result, Err(BackendError::StoreRead { .. }));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_submissions_keep_every_comment() {
    let store = MemoryStore::new();
    let m = assert_ok!(store.create_message(None, None).await);

    let handles: Vec<_> = (0..20)
        .map(|i| {
            let store = store.clone();
            tokio::spawn(async move {
                submit_comment(&store, m.id, NewComment::new(format!("n{}", i), "c")).await
            })
        })
        .collect();

    for handle in handles {
        assert_ok!(handle.await.expect("task should not panic"));
    }

    let stored = assert_ok!(store.find_message_by_id(m.id).await).unwrap();
    assert_eq!(stored.comment_refs.len(), 20);
    let views = assert_ok!(load_all_messages_with_comments(&store).await);
    assert_eq!(views[0].comments.len(), 20);
}
