/**
 * Board Data Structures
 *
 * This module defines the records stored by the board and the view model
 * handed to the presentation layer.
 *
 * # Association Model
 *
 * A `Message` owns the ordered list of its comment ids (`comment_refs`).
 * A `Comment` carries a back-reference (`message_ref`) to its message, which
 * is informational only: the message's list is the authoritative source of
 * which comments belong to it and in what order.
 */
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// A top-level post on the board
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    /// Store-assigned identifier
    pub id: Uuid,
    /// Author display name, stored as submitted
    pub name: Option<String>,
    /// Message body, stored as submitted
    pub message: Option<String>,
    /// Ids of the comments on this message, in display order
    ///
    /// Append-only. Never contains duplicates.
    pub comment_refs: Vec<Uuid>,
}

/// A reply attached to a message
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Comment {
    /// Store-assigned identifier
    pub id: Uuid,
    /// Id of the owning message
    pub message_ref: Option<Uuid>,
    /// Author display name
    pub name: Option<String>,
    /// Comment body
    pub comment: Option<String>,
}

/// Fields of a comment before the store assigns it an id
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewComment {
    pub message_ref: Option<Uuid>,
    pub name: Option<String>,
    pub comment: Option<String>,
}

impl NewComment {
    pub fn new(name: impl Into<String>, comment: impl Into<String>) -> Self {
        Self {
            message_ref: None,
            name: Some(name.into()),
            comment: Some(comment.into()),
        }
    }

    /// Point this payload at `message_id`, replacing whatever the caller set
    pub fn attached_to(self, message_id: Uuid) -> Self {
        Self {
            message_ref: Some(message_id),
            ..self
        }
    }

    /// Materialize the payload as a stored record with the given id
    pub fn into_comment(self, id: Uuid) -> Comment {
        Comment {
            id,
            message_ref: self.message_ref,
            name: self.name,
            comment: self.comment,
        }
    }
}

/// A message with its comments resolved, ready for rendering
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MessageView {
    pub id: Uuid,
    pub name: Option<String>,
    pub message: Option<String>,
    pub comments: Vec<Comment>,
}

impl MessageView {
    /// Attach comments to `message` in `comment_refs` order
    ///
    /// `resolved` may hold comments in any order and may hold comments that
    /// belong to other messages; they are taken out of the map as they are
    /// attached. References with no resolved record are skipped.
    pub fn assemble(message: Message, resolved: &mut HashMap<Uuid, Comment>) -> Self {
        let comments = message
            .comment_refs
            .iter()
            .filter_map(|id| resolved.remove(id))
            .collect();

        Self {
            id: message.id,
            name: message.name,
            message: message.message,
            comments,
        }
    }
}
