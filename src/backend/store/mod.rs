//! Board Store
//!
//! The persistence boundary for messages and comments. Two adapters
//! implement [`BoardStore`]:
//!
//! - **`memory`** - `MemoryStore`, an in-process store used when no database
//!   is configured and in tests
//! - **`postgres`** - `PgStore`, backed by a `sqlx` PostgreSQL pool
//!
//! Both behave like a document store with reference-based joins: messages
//! hold an array of comment ids, and resolution of those ids into comment
//! records is a separate batch lookup.
//!
//! # Module Structure
//!
//! ```text
//! store/
//! ├── mod.rs       - BoardStore trait and StoreError
//! ├── memory.rs    - In-memory adapter
//! └── postgres.rs  - PostgreSQL adapter
//! ```

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::shared::{Comment, Message, NewComment};

/// In-memory adapter
pub mod memory;

/// PostgreSQL adapter
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence contract for the board
///
/// Every method is a single store round trip. None of them validate the
/// content of `name`, `message` or `comment`; absent fields are stored
/// as absent.
#[async_trait]
pub trait BoardStore: Send + Sync {
    /// Persist a new message with a fresh id and no comments
    async fn create_message(
        &self,
        name: Option<String>,
        message: Option<String>,
    ) -> StoreResult<Message>;

    /// Persist a new comment with a fresh id, copying every payload field
    async fn create_comment(&self, payload: NewComment) -> StoreResult<Comment>;

    /// Point lookup of a message
    async fn find_message_by_id(&self, id: Uuid) -> StoreResult<Option<Message>>;

    /// All messages, in store-native (insertion) order
    async fn find_all_messages(&self) -> StoreResult<Vec<Message>>;

    /// Resolve comment ids into records
    ///
    /// The result order is unspecified. Ids with no record are skipped.
    async fn resolve_comment_refs(&self, ids: &[Uuid]) -> StoreResult<Vec<Comment>>;

    /// Append `comment_id` to the message's `comment_refs`
    ///
    /// Atomic with respect to other appends on the same message, and
    /// idempotent: appending an id that is already present is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::MissingRecord`] when the message does not exist.
    async fn append_comment_ref(&self, message_id: Uuid, comment_id: Uuid) -> StoreResult<()>;

    /// All comments, in creation order
    async fn find_all_comments(&self) -> StoreResult<Vec<Comment>>;

    /// Release the store's resources at shutdown
    async fn close(&self) {}
}

/// Errors returned by store adapters
#[derive(Debug, Error)]
pub enum StoreError {
    /// The database rejected or failed the query
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A record the operation requires does not exist
    #[error("{collection} record not found: {id}")]
    MissingRecord {
        /// Logical collection name (`messages` or `comments`)
        collection: &'static str,
        id: Uuid,
    },

    /// The store cannot serve requests
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    pub fn missing_message(id: Uuid) -> Self {
        Self::MissingRecord {
            collection: "messages",
            id,
        }
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }
}
