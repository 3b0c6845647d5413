/**
 * Orphan Reconciliation
 *
 * A comment submission that fails between its two writes leaves a comment
 * that no message lists. This sweep finds such comments through their
 * `message_ref` back-pointer and appends them to their message, in comment
 * creation order. Comments whose message is missing (or that have no
 * `message_ref`) cannot be repaired and are reported as dangling.
 *
 * Appends are idempotent, so a sweep racing an in-flight submission never
 * produces a duplicate reference. The creation-order guarantee only holds
 * for orphans at rest. A sweep can pick up a comment whose submission is
 * still between its two writes and append it first, leaving the
 * submission's own append a no-op; that comment's position then follows
 * whichever append ran first, not its creation time.
 */

use std::collections::HashSet;

use uuid::Uuid;

use crate::backend::error::{BackendError, WriteStage};
use crate::backend::store::BoardStore;

/// Outcome of one reconciliation sweep
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcileReport {
    /// Comments appended to their message's `comment_refs`
    pub repaired: Vec<Uuid>,
    /// Orphans whose message could not be found
    pub dangling: Vec<Uuid>,
}

impl ReconcileReport {
    pub fn is_clean(&self) -> bool {
        self.repaired.is_empty() && self.dangling.is_empty()
    }
}

/// Find orphaned comments and link them back to their messages
pub async fn reconcile_orphans(store: &dyn BoardStore) -> Result<ReconcileReport, BackendError> {
    let messages = store
        .find_all_messages()
        .await
        .map_err(|e| BackendError::store_read("find all messages", e))?;
    let comments = store
        .find_all_comments()
        .await
        .map_err(|e| BackendError::store_read("find all comments", e))?;

    let linked: HashSet<Uuid> = messages
        .iter()
        .flat_map(|message| message.comment_refs.iter().copied())
        .collect();
    let known: HashSet<Uuid> = messages.iter().map(|message| message.id).collect();

    let mut report = ReconcileReport::default();
    for comment in comments.into_iter().filter(|c| !linked.contains(&c.id)) {
        match comment.message_ref {
            Some(message_id) if known.contains(&message_id) => {
                store
                    .append_comment_ref(message_id, comment.id)
                    .await
                    .map_err(|e| BackendError::store_write(WriteStage::Repair, e))?;
                tracing::info!(comment_id = %comment.id, message_id = %message_id, "Repaired orphaned comment");
                report.repaired.push(comment.id);
            }
            _ => {
                tracing::warn!(comment_id = %comment.id, "Orphaned comment has no message to attach to");
                report.dangling.push(comment.id);
            }
        }
    }

    Ok(report)
}
