//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs           - Module exports and documentation
//! ├── router.rs        - Main router creation
//! └── board_routes.rs  - Board page and form routes
//! ```

/// Main router creation
pub mod router;

/// Board routes
pub mod board_routes;

// Re-export commonly used functions
pub use router::create_router;
