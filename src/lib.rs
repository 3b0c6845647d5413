//! msgboard - Main Library
//!
//! A minimal message board: clients post top-level messages and threaded
//! comments, and a single page renders every message with its comments.
//!
//! # Module Structure
//!
//! - **`shared`** - Message and comment records and the rendered view model
//! - **`backend`** - Server-side code (only compiled with `ssr` feature)
//!   - Store boundary with in-memory and PostgreSQL adapters
//!   - Comment association and aggregate read procedures
//!   - Axum HTTP server
//!
//! # Association Model
//!
//! A message stores the ordered ids of its comments; a comment stores the id
//! of its message. Submitting a comment writes the comment first and then
//! appends its id to the message. Reading the board loads all messages and
//! resolves their comment ids in one batch.
//!
//! # Usage
//!
//! ```rust,no_run
//! use msgboard::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind(config.addr()).await?;
//! axum::serve(listener, app.router).await?;
//! # Ok(())
//! # }
//! ```

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;
