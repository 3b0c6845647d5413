//! Common test utilities and helpers
//!
//! This module provides shared utilities for the integration tests:
//! - A store double that fails on demand
//! - PostgreSQL fixtures
//! - Router and request helpers
//! - Custom assertion macros

#![allow(dead_code)]

pub mod assertions;
pub mod database;
pub mod http;
pub mod store;

pub use http::*;
pub use store::*;
