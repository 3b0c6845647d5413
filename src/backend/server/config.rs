/**
 * Server Configuration
 *
 * This module loads the server configuration from environment variables and
 * opens the board store it names.
 *
 * # Configuration Sources
 *
 * - `SERVER_PORT` - listening port (default 8000)
 * - `DATABASE_URL` - PostgreSQL URL; when unset the in-memory store is used
 * - `DATABASE_CONNECT_TIMEOUT_SECS` - how long to wait for the first
 *   database connection (default 30)
 * - `RECONCILE_INTERVAL_SECS` - period of the orphan sweep (default 300,
 *   `0` disables the periodic sweep)
 *
 * # Error Handling
 *
 * Malformed values are configuration errors. A configured database that
 * cannot be reached is a startup error; the in-memory store is only used
 * when no database is configured.
 */

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;

use crate::backend::store::{BoardStore, MemoryStore, PgStore, StoreError};

/// Port used when `SERVER_PORT` is unset
pub const DEFAULT_PORT: u16 = 8000;

/// Wait for the first database connection used when
/// `DATABASE_CONNECT_TIMEOUT_SECS` is unset
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// Sweep period used when `RECONCILE_INTERVAL_SECS` is unset
pub const DEFAULT_RECONCILE_INTERVAL: Duration = Duration::from_secs(300);

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub database_url: Option<String>,
    pub connect_timeout: Duration,
    /// `None` disables the periodic orphan sweep
    pub reconcile_interval: Option<Duration>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            database_url: None,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            reconcile_interval: Some(DEFAULT_RECONCILE_INTERVAL),
        }
    }
}

impl ServerConfig {
    /// Read the configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through `lookup`, which maps a variable name
    /// to its value
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(port) = lookup("SERVER_PORT") {
            config.port = port.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: "SERVER_PORT",
                value: port.clone(),
            })?;
        }

        config.database_url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());

        if let Some(secs) = lookup("DATABASE_CONNECT_TIMEOUT_SECS") {
            let secs: u64 = secs.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: "DATABASE_CONNECT_TIMEOUT_SECS",
                value: secs.clone(),
            })?;
            config.connect_timeout = Duration::from_secs(secs);
        }

        if let Some(secs) = lookup("RECONCILE_INTERVAL_SECS") {
            let secs: u64 = secs.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: "RECONCILE_INTERVAL_SECS",
                value: secs.clone(),
            })?;
            config.reconcile_interval = (secs > 0).then(|| Duration::from_secs(secs));
        }

        Ok(config)
    }

    /// Address to bind, on all interfaces
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

/// Open the board store named by the configuration
///
/// # Returns
///
/// - `MemoryStore` if `DATABASE_URL` is unset
/// - `PgStore` if the database is reachable
///
/// # Errors
///
/// Fails when `DATABASE_URL` is set but no connection can be made within
/// `connect_timeout`. A configured database is never replaced by the
/// in-memory store.
pub async fn load_store(config: &ServerConfig) -> Result<Arc<dyn BoardStore>, StoreError> {
    let Some(database_url) = config.database_url.as_deref() else {
        tracing::warn!("DATABASE_URL not set. Messages will be kept in memory only.");
        return Ok(Arc::new(MemoryStore::new()));
    };

    match PgStore::connect(database_url, config.connect_timeout).await {
        Ok(store) => Ok(Arc::new(store)),
        Err(e) => {
            tracing::error!("Failed to create database connection pool: {}", e);
            Err(e)
        }
    }
}
