/**
 * Server Initialization
 *
 * This module wires the board together at startup.
 *
 * # Initialization Process
 *
 * 1. Open the board store named by the configuration
 * 2. Run one orphan sweep, so comments stranded by a crash are visible
 * 3. Start the periodic sweep, if enabled
 * 4. Build the application state and router
 */

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use thiserror::Error;

use crate::backend::board::reconcile_orphans;
use crate::backend::routes::create_router;
use crate::backend::server::config::{load_store, ServerConfig};
use crate::backend::server::state::AppState;
use crate::backend::store::{BoardStore, StoreError};

/// Failures that prevent the server from starting
#[derive(Debug, Error)]
pub enum InitError {
    /// The configured board store could not be opened
    #[error("failed to open board store: {0}")]
    Store(#[from] StoreError),

    /// The embedded page template does not compile
    #[error("failed to load page template: {0}")]
    Template(#[from] minijinja::Error),
}

/// A configured application and the store it serves from
///
/// The store handle is kept so the caller can close it after the server
/// has shut down.
pub struct App {
    pub router: Router<()>,
    pub store: Arc<dyn BoardStore>,
}

/// Create and configure the Axum application
///
/// # Errors
///
/// Fails if a configured database cannot be reached or the embedded page
/// template does not compile. Reconciliation failures are logged and do
/// not prevent startup.
pub async fn create_app(config: &ServerConfig) -> Result<App, InitError> {
    tracing::info!("Initializing message board server");

    let store = load_store(config).await?;

    run_reconciliation(store.as_ref()).await;
    if let Some(period) = config.reconcile_interval {
        spawn_reconciliation(store.clone(), period);
    }

    let app_state = AppState::new(store.clone())?;
    let router = create_router(app_state);

    tracing::info!("Router configured");
    Ok(App { router, store })
}

async fn run_reconciliation(store: &dyn BoardStore) {
    match reconcile_orphans(store).await {
        Ok(report) if report.is_clean() => tracing::debug!("No orphaned comments found"),
        Ok(report) => tracing::info!(
            "Reconciliation repaired {} comments, {} left dangling",
            report.repaired.len(),
            report.dangling.len()
        ),
        Err(e) => tracing::error!("Reconciliation failed: {}", e),
    }
}

/// Run the orphan sweep every `period` for the life of the process
fn spawn_reconciliation(store: Arc<dyn BoardStore>, period: Duration) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        // The first tick completes immediately; startup already swept.
        interval.tick().await;
        loop {
            interval.tick().await;
            run_reconciliation(store.as_ref()).await;
        }
    });
}
