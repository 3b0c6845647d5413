//! Shared Module
//!
//! This module contains the board's data structures. They are used by the
//! store adapters, the association and aggregation procedures, and the
//! presentation layer.

/// Message and comment records, and the rendered view model
pub mod board;

/// Re-export commonly used types for convenience
pub use board::{Comment, Message, MessageView, NewComment};
