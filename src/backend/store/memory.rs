//! In-memory board store.
//!
//! Records live in insertion-ordered vectors with an id index, behind a
//! single `tokio::sync::RwLock`. Contents are lost when the process exits.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{BoardStore, StoreError, StoreResult};
use crate::shared::{Comment, Message, NewComment};

/// Thread-safe in-memory board store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: Arc<RwLock<BoardState>>,
}

#[derive(Debug, Default)]
struct BoardState {
    messages: Vec<Message>,
    message_index: HashMap<Uuid, usize>,
    comments: Vec<Comment>,
    comment_index: HashMap<Uuid, usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BoardStore for MemoryStore {
    async fn create_message(
        &self,
        name: Option<String>,
        message: Option<String>,
    ) -> StoreResult<Message> {
        let record = Message {
            id: Uuid::new_v4(),
            name,
            message,
            comment_refs: Vec::new(),
        };

        let mut state = self.state.write().await;
        let position = state.messages.len();
        state.message_index.insert(record.id, position);
        state.messages.push(record.clone());
        Ok(record)
    }

    async fn create_comment(&self, payload: NewComment) -> StoreResult<Comment> {
        let record = payload.into_comment(Uuid::new_v4());

        let mut state = self.state.write().await;
        let position = state.comments.len();
        state.comment_index.insert(record.id, position);
        state.comments.push(record.clone());
        Ok(record)
    }

    async fn find_message_by_id(&self, id: Uuid) -> StoreResult<Option<Message>> {
        let state = self.state.read().await;
        Ok(state
            .message_index
            .get(&id)
            .map(|&position| state.messages[position].clone()))
    }

    async fn find_all_messages(&self) -> StoreResult<Vec<Message>> {
        Ok(self.state.read().await.messages.clone())
    }

    async fn resolve_comment_refs(&self, ids: &[Uuid]) -> StoreResult<Vec<Comment>> {
        let state = self.state.read().await;
        Ok(ids
            .iter()
            .filter_map(|id| state.comment_index.get(id))
            .map(|&position| state.comments[position].clone())
            .collect())
    }

    async fn append_comment_ref(&self, message_id: Uuid, comment_id: Uuid) -> StoreResult<()> {
        let mut state = self.state.write().await;
        let position = *state
            .message_index
            .get(&message_id)
            .ok_or_else(|| StoreError::missing_message(message_id))?;

        let refs = &mut state.messages[position].comment_refs;
        if !refs.contains(&comment_id) {
            refs.push(comment_id);
        }
        Ok(())
    }

    async fn find_all_comments(&self) -> StoreResult<Vec<Comment>> {
        Ok(self.state.read().await.comments.clone())
    }
}
