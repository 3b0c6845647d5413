/**
 * Association Writer
 *
 * Links a newly submitted comment to its parent message.
 *
 * # Write Protocol
 *
 * 1. Look up the parent message; a miss aborts with `NotFound` before
 *    anything is written
 * 2. Persist the comment with `message_ref` set to the parent's id
 * 3. Append the comment id to the parent's `comment_refs`
 *
 * The comment is written before the parent is updated, so the parent update
 * is what makes the comment visible. The two writes are not atomic: if the
 * second one fails the comment is left orphaned until the reconciliation
 * sweep repairs it.
 */

use uuid::Uuid;

use crate::backend::error::{BackendError, WriteStage};
use crate::backend::store::BoardStore;
use crate::shared::{Comment, NewComment};

/// Create a comment on `target_message_id` and link it to the message
pub async fn submit_comment(
    store: &dyn BoardStore,
    target_message_id: Uuid,
    fields: NewComment,
) -> Result<Comment, BackendError> {
    let parent = store
        .find_message_by_id(target_message_id)
        .await
        .map_err(|e| BackendError::store_read("find message", e))?
        .ok_or_else(|| BackendError::not_found("message", target_message_id))?;

    let comment = store
        .create_comment(fields.attached_to(parent.id))
        .await
        .map_err(|e| BackendError::store_write(WriteStage::Comment, e))?;

    if let Err(e) = store.append_comment_ref(parent.id, comment.id).await {
        tracing::warn!(
            comment_id = %comment.id,
            message_id = %parent.id,
            "Comment persisted but not linked to its message"
        );
        return Err(BackendError::store_write(WriteStage::ParentUpdate, e));
    }

    tracing::debug!(comment_id = %comment.id, message_id = %parent.id, "Comment linked");
    Ok(comment)
}
