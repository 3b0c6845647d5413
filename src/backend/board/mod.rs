//! Board Module
//!
//! The message board's operations and their HTTP surface.
//!
//! # Architecture
//!
//! - **`association`** - `submit_comment`, the two-write protocol linking a
//!   comment to its message
//! - **`aggregate`** - `load_all_messages_with_comments`, the read-side join
//! - **`reconcile`** - sweep that repairs comments orphaned by a failed
//!   second write
//! - **`view`** - HTML rendering of the board page
//! - **`handlers`** - Axum handlers for `/`, `/main`, `/message`, `/comment`
//!
//! All operations take the store as `&dyn BoardStore`; nothing here holds
//! global state.

pub mod aggregate;
pub mod association;
pub mod handlers;
pub mod reconcile;
pub mod view;

pub use aggregate::load_all_messages_with_comments;
pub use association::submit_comment;
pub use reconcile::{reconcile_orphans, ReconcileReport};
pub use view::BoardView;
