/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router, wrapped in request
 * tracing.
 */

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::backend::routes::board_routes::configure_board_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Route Details
///
/// - `GET /` - Redirect to `/main`
/// - `GET /main` - Board page
/// - `POST /message` - Post a message
/// - `POST /comment` - Post a comment
///
/// Unknown routes return 404.
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = configure_board_routes(Router::new());

    let router = router.fallback(|| async { (axum::http::StatusCode::NOT_FOUND, "404 Not Found") });

    router
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
