//! Server Module
//!
//! This module initializes and configures the Axum HTTP server.
//!
//! # Architecture
//!
//! - **`state`** - Application state structure and `FromRef` implementations
//! - **`config`** - Environment configuration and store selection
//! - **`init`** - Server initialization and app creation
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - ServerConfig and load_store
//! └── init.rs         - Server initialization and app creation
//! ```

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use config::{ConfigError, ServerConfig};
pub use init::{create_app, App, InitError};
pub use state::AppState;
