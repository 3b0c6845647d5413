/**
 * PostgreSQL Board Store
 *
 * This module persists messages and comments to PostgreSQL. The schema
 * mirrors a document store: each message row carries a `UUID[]` of comment
 * ids, and each comment row carries the id of its message without a foreign
 * key. Joins are performed by the caller through `resolve_comment_refs`.
 *
 * # Ordering
 *
 * Both tables have a `seq BIGSERIAL` column, so full scans come back in
 * insertion order. `resolve_comment_refs` uses `= ANY($1)` and makes no
 * ordering promise.
 */

use std::time::Duration;

use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use uuid::Uuid;

use super::{BoardStore, StoreError, StoreResult};
use crate::shared::{Comment, Message, NewComment};

/// Board store backed by a PostgreSQL pool
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

#[derive(sqlx::FromRow)]
struct MessageRow {
    id: Uuid,
    name: Option<String>,
    message: Option<String>,
    comment_refs: Vec<Uuid>,
}

impl From<MessageRow> for Message {
    fn from(row: MessageRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            message: row.message,
            comment_refs: row.comment_refs,
        }
    }
}

#[derive(sqlx::FromRow)]
struct CommentRow {
    id: Uuid,
    message_ref: Option<Uuid>,
    name: Option<String>,
    comment: Option<String>,
}

impl From<CommentRow> for Comment {
    fn from(row: CommentRow) -> Self {
        Self {
            id: row.id,
            message_ref: row.message_ref,
            name: row.name,
            comment: row.comment,
        }
    }
}

impl PgStore {
    /// Wrap an existing pool. Migrations are not run.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect to `database_url` and bring the schema up to date
    ///
    /// Gives up with [`StoreError::Database`] if no connection is made
    /// within `acquire_timeout`. A failed migration is logged and the store
    /// is still returned, since the schema may already be current.
    pub async fn connect(database_url: &str, acquire_timeout: Duration) -> StoreResult<Self> {
        tracing::info!("Connecting to database...");
        let pool = PgPoolOptions::new()
            .acquire_timeout(acquire_timeout)
            .connect(database_url)
            .await?;
        tracing::info!("Database connection pool created successfully");

        match sqlx::migrate!().run(&pool).await {
            Ok(_) => tracing::info!("Database migrations completed successfully"),
            Err(e) => {
                tracing::error!("Failed to run database migrations: {}", e);
                tracing::warn!("Continuing without migrations - database might not be up to date");
            }
        }

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl BoardStore for PgStore {
    async fn create_message(
        &self,
        name: Option<String>,
        message: Option<String>,
    ) -> StoreResult<Message> {
        let id = Uuid::new_v4();

        sqlx::query(
            r#"
            INSERT INTO messages (id, name, message, comment_refs)
            VALUES ($1, $2, $3, '{}')
            "#,
        )
        .bind(id)
        .bind(&name)
        .bind(&message)
        .execute(&self.pool)
        .await?;

        Ok(Message {
            id,
            name,
            message,
            comment_refs: Vec::new(),
        })
    }

    async fn create_comment(&self, payload: NewComment) -> StoreResult<Comment> {
        let comment = payload.into_comment(Uuid::new_v4());

        sqlx::query(
            r#"
            INSERT INTO comments (id, message_ref, name, comment)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(comment.id)
        .bind(comment.message_ref)
        .bind(&comment.name)
        .bind(&comment.comment)
        .execute(&self.pool)
        .await?;

        Ok(comment)
    }

    async fn find_message_by_id(&self, id: Uuid) -> StoreResult<Option<Message>> {
        let row = sqlx::query_as::<_, MessageRow>(
            r#"
            SELECT id, name, message, comment_refs
            FROM messages
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Message::from))
    }

    async fn find_all_messages(&self) -> StoreResult<Vec<Message>> {
        let rows = sqlx::query_as::<_, MessageRow>(
            r#"
            SELECT id, name, message, comment_refs
            FROM messages
            ORDER BY seq ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Message::from).collect())
    }

    async fn resolve_comment_refs(&self, ids: &[Uuid]) -> StoreResult<Vec<Comment>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = sqlx::query_as::<_, CommentRow>(
            r#"
            SELECT id, message_ref, name, comment
            FROM comments
            WHERE id = ANY($1)
            "#,
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Comment::from).collect())
    }

    async fn append_comment_ref(&self, message_id: Uuid, comment_id: Uuid) -> StoreResult<()> {
        // Single-statement append: the row lock serializes concurrent appends.
        let result = sqlx::query(
            r#"
            UPDATE messages
            SET comment_refs = array_append(comment_refs, $2)
            WHERE id = $1 AND NOT ($2 = ANY(comment_refs))
            "#,
        )
        .bind(message_id)
        .bind(comment_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() > 0 {
            return Ok(());
        }

        // Nothing updated: either already present or no such message.
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM messages WHERE id = $1)")
            .bind(message_id)
            .fetch_one(&self.pool)
            .await?;

        if exists {
            Ok(())
        } else {
            Err(StoreError::missing_message(message_id))
        }
    }

    async fn find_all_comments(&self) -> StoreResult<Vec<Comment>> {
        let rows = sqlx::query_as::<_, CommentRow>(
            r#"
            SELECT id, message_ref, name, comment
            FROM comments
            ORDER BY seq ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Comment::from).collect())
    }

    async fn close(&self) {
        tracing::info!("Closing database connection pool");
        self.pool.close().await;
    }
}
