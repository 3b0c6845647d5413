//! Fault-injecting store
//!
//! `FlakyStore` delegates to a `MemoryStore` and fails selected operations
//! with `StoreError::Unavailable` while the matching switch is on.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use msgboard::backend::store::{BoardStore, MemoryStore, StoreError, StoreResult};
use msgboard::shared::{Comment, Message, NewComment};
use uuid::Uuid;

#[derive(Debug, Default)]
pub struct Faults {
    pub create_message: AtomicBool,
    pub create_comment: AtomicBool,
    pub append_comment_ref: AtomicBool,
    pub reads: AtomicBool,
}

/// Store whose operations can be made to fail
#[derive(Debug, Clone, Default)]
pub struct FlakyStore {
    pub inner: MemoryStore,
    pub faults: Arc<Faults>,
}

impl FlakyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, fault: impl Fn(&Faults) -> &AtomicBool, on: bool) {
        fault(&self.faults).store(on, Ordering::SeqCst);
    }

    fn check(&self, fault: &AtomicBool, operation: &str) -> StoreResult<()> {
        if fault.load(Ordering::SeqCst) {
            Err(StoreError::unavailable(format!("injected failure in {}", operation)))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl BoardStore for FlakyStore {
    async fn create_message(
        &self,
        name: Option<String>,
        message: Option<String>,
    ) -> StoreResult<Message> {
        self.check(&self.faults.create_message, "create_message")?;
        self.inner.create_message(name, message).await
    }

    async fn create_comment(&self, payload: NewComment) -> StoreResult<Comment> {
        self.check(&self.faults.create_comment, "create_comment")?;
        self.inner.create_comment(payload).await
    }

    async fn find_message_by_id(&self, id: Uuid) -> StoreResult<Option<Message>> {
        self.check(&self.faults.reads, "find_message_by_id")?;
        self.inner.find_message_by_id(id).await
    }

    async fn find_all_messages(&self) -> StoreResult<Vec<Message>> {
        self.check(&self.faults.reads, "find_all_messages")?;
        self.inner.find_all_messages().await
    }

    async fn resolve_comment_refs(&self, ids: &[Uuid]) -> StoreResult<Vec<Comment>> {
        self.check(&self.faults.reads, "resolve_comment_refs")?;
        self.inner.resolve_comment_refs(ids).await
    }

    async fn append_comment_ref(&self, message_id: Uuid, comment_id: Uuid) -> StoreResult<()> {
        self.check(&self.faults.append_comment_ref, "append_comment_ref")?;
        self.inner.append_comment_ref(message_id, comment_id).await
    }

    async fn find_all_comments(&self) -> StoreResult<Vec<Comment>> {
        self.check(&self.faults.reads, "find_all_comments")?;
        self.inner.find_all_comments().await
    }
}
