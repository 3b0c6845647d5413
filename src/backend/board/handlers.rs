//! Board HTTP Handlers
//!
//! This module contains the handlers behind the board's four routes. Write
//! handlers answer with a redirect to `/` whether they succeed or fail;
//! failures are only visible in the logs.

use std::sync::Arc;

use axum::{
    extract::{rejection::FormRejection, State},
    http::StatusCode,
    response::{Html, Redirect},
    Form,
};
use serde::Deserialize;
use uuid::Uuid;

use super::aggregate::load_all_messages_with_comments;
use super::association::submit_comment;
use super::view::BoardView;
use crate::backend::error::{BackendError, WriteStage};
use crate::backend::store::BoardStore;
use crate::shared::NewComment;

/// Form body of `POST /message`
#[derive(Debug, Deserialize)]
pub struct MessageForm {
    pub name: Option<String>,
    pub message: Option<String>,
}

/// Form body of `POST /comment`
#[derive(Debug, Deserialize)]
pub struct CommentForm {
    /// Id of the message being commented on
    pub id: Option<String>,
    pub name: Option<String>,
    pub comment: Option<String>,
}

/// `GET /` sends the browser to the board page
pub async fn redirect_to_board() -> Redirect {
    Redirect::to("/main")
}

/// `GET /main` renders every message with its comments
///
/// If the board cannot be loaded the page is rendered empty with a notice
/// and a 503, instead of redirecting to `/` (which would loop back here).
pub async fn show_board(
    State(store): State<Arc<dyn BoardStore>>,
    State(view): State<Arc<BoardView>>,
) -> Result<(StatusCode, Html<String>), BackendError> {
    match load_all_messages_with_comments(store.as_ref()).await {
        Ok(messages) => {
            tracing::debug!("Successfully loaded {} messages and comments", messages.len());
            Ok((StatusCode::OK, Html(view.render_index(&messages)?)))
        }
        Err(e) => {
            tracing::error!("Error getting messages and comments: {}", e);
            Ok((
                StatusCode::SERVICE_UNAVAILABLE,
                Html(view.render_unavailable()?),
            ))
        }
    }
}

/// `POST /message` creates a top-level message
pub async fn post_message(
    State(store): State<Arc<dyn BoardStore>>,
    form: Result<Form<MessageForm>, FormRejection>,
) -> Result<Redirect, BackendError> {
    let Form(form) = form?;

    let message = store
        .create_message(form.name, form.message)
        .await
        .map_err(|e| BackendError::store_write(WriteStage::Message, e))?;

    tracing::info!(message_id = %message.id, "Message posted");
    Ok(Redirect::to("/"))
}

/// `POST /comment` attaches a comment to the message named by `id`
///
/// An `id` that is missing or not a valid identifier cannot name a message,
/// so it is reported as `NotFound` like any other unknown id.
pub async fn post_comment(
    State(store): State<Arc<dyn BoardStore>>,
    form: Result<Form<CommentForm>, FormRejection>,
) -> Result<Redirect, BackendError> {
    let Form(form) = form?;

    let raw_id = form.id.unwrap_or_default();
    let target = Uuid::parse_str(raw_id.trim())
        .map_err(|_| BackendError::not_found("message", &raw_id))?;

    let fields = NewComment {
        message_ref: None,
        name: form.name,
        comment: form.comment,
    };
    let comment = submit_comment(store.as_ref(), target, fields).await?;

    tracing::info!(comment_id = %comment.id, message_id = %target, "Comment posted");
    Ok(Redirect::to("/"))
}
