//! Backend Module
//!
//! This module contains all server-side code for the message board: the
//! store boundary, the board operations, and the Axum HTTP server that
//! exposes them.
//!
//! This module is only compiled when the `ssr` feature is enabled.
//!
//! # Architecture
//!
//! - **`server`** - Server initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`board`** - Comment association, aggregate read, reconciliation, view
//! - **`store`** - `BoardStore` trait with in-memory and PostgreSQL adapters
//! - **`error`** - Backend-specific error types
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── board/          - Board operations and handlers
//! ├── store/          - Persistence adapters
//! └── error/          - Error types
//! ```
//!
//! # Thread Safety
//!
//! Handlers share `AppState`, which holds the store as `Arc<dyn BoardStore>`.
//! Stores are `Send + Sync`; the only cross-request coordination is the
//! store's atomic comment-reference append.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Board operations and HTTP handlers
pub mod board;

/// Persistence boundary
pub mod store;

/// Backend error types
pub mod error;

/// Re-export commonly used types
pub use board::{load_all_messages_with_comments, reconcile_orphans, submit_comment};
pub use error::BackendError;
pub use server::create_app;
pub use store::{BoardStore, MemoryStore, PgStore, StoreError};
