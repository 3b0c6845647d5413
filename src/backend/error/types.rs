/**
 * Backend Error Types
 *
 * This module defines the failures the board's operations report.
 *
 * # Error Categories
 *
 * - `NotFound` - a referenced record does not exist (comment target)
 * - `StoreWrite` - persistence failed while creating or updating a record;
 *   carries the stage of the write protocol that failed
 * - `StoreRead` - persistence failed while fetching or resolving records
 * - `Form` - the request body could not be decoded
 * - `Render` - the view template failed to render
 */

use std::fmt;

use axum::extract::rejection::FormRejection;
use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::store::StoreError;

/// Write that failed, in protocol order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteStage {
    /// Creating a message
    Message,
    /// Persisting a new comment (first write of a submission)
    Comment,
    /// Appending the comment id to its parent (second write of a submission)
    ParentUpdate,
    /// Repairing an orphaned comment during reconciliation
    Repair,
}

impl fmt::Display for WriteStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stage = match self {
            Self::Message => "message",
            Self::Comment => "comment",
            Self::ParentUpdate => "parent update",
            Self::Repair => "repair",
        };
        f.write_str(stage)
    }
}

/// Failure reported by a board operation
#[derive(Debug, Error)]
pub enum BackendError {
    /// A referenced record does not exist
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Kind of record that was looked up
        entity: &'static str,
        /// Identifier as the caller supplied it
        id: String,
    },

    /// A store write failed
    #[error("store write failed at {stage} stage: {source}")]
    StoreWrite {
        stage: WriteStage,
        #[source]
        source: StoreError,
    },

    /// A store read failed
    #[error("store read failed during {operation}: {source}")]
    StoreRead {
        operation: &'static str,
        #[source]
        source: StoreError,
    },

    /// The submitted form could not be decoded
    #[error("invalid form submission: {0}")]
    Form(#[from] FormRejection),

    /// The view template failed to render
    #[error("render error: {0}")]
    Render(#[from] minijinja::Error),
}

impl BackendError {
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    pub fn store_write(stage: WriteStage, source: StoreError) -> Self {
        Self::StoreWrite { stage, source }
    }

    pub fn store_read(operation: &'static str, source: StoreError) -> Self {
        Self::StoreRead { operation, source }
    }

    /// The write stage that failed, if this is a write failure
    pub fn write_stage(&self) -> Option<WriteStage> {
        match self {
            Self::StoreWrite { stage, .. } => Some(*stage),
            _ => None,
        }
    }

    /// Status of the response this error becomes
    ///
    /// Render failures are the only errors that are not folded into the
    /// redirect to `/`, since the redirect target is the page that failed.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::SEE_OTHER,
        }
    }
}
