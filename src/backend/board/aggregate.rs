//! Aggregate Reader
//!
//! Builds the nested view of every message with its comments. All comment
//! references are resolved in one batch, then each message takes its
//! comments back out in `comment_refs` order, since batch resolution does not
//! preserve order.

use std::collections::HashMap;

use crate::backend::error::BackendError;
use crate::backend::store::BoardStore;
use crate::shared::MessageView;

/// Load every message with its comments resolved
///
/// Messages come back in store order. Any read failure fails the whole
/// operation; no partial view is returned.
pub async fn load_all_messages_with_comments(
    store: &dyn BoardStore,
) -> Result<Vec<MessageView>, BackendError> {
    let messages = store
        .find_all_messages()
        .await
        .map_err(|e| BackendError::store_read("find all messages", e))?;

    let refs: Vec<_> = messages
        .iter()
        .flat_map(|message| message.comment_refs.iter().copied())
        .collect();

    let mut resolved: HashMap<_, _> = store
        .resolve_comment_refs(&refs)
        .await
        .map_err(|e| BackendError::store_read("resolve comment refs", e))?
        .into_iter()
        .map(|comment| (comment.id, comment))
        .collect();

    let views: Vec<MessageView> = messages
        .into_iter()
        .map(|message| MessageView::assemble(message, &mut resolved))
        .collect();

    tracing::debug!("Loaded {} messages with {} comment refs", views.len(), refs.len());
    Ok(views)
}
