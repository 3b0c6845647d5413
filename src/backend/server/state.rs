/**
 * Application State Management
 *
 * This module defines the application state structure and implements the
 * `FromRef` traits that let handlers extract only the part they need.
 *
 * # Example
 *
 * ```rust,ignore
 * use axum::extract::State;
 *
 * async fn handler(State(store): State<Arc<dyn BoardStore>>) {
 *     let messages = store.find_all_messages().await;
 * }
 * ```
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::board::BoardView;
use crate::backend::store::BoardStore;

/// Application state shared by every handler
///
/// The store is injected at construction; there is no process-wide
/// connection handle.
#[derive(Clone)]
pub struct AppState {
    /// Message and comment persistence
    pub store: Arc<dyn BoardStore>,

    /// Board page renderer
    pub view: Arc<BoardView>,
}

impl AppState {
    /// Build the state around `store`
    ///
    /// Fails only if the embedded page template does not compile.
    pub fn new(store: Arc<dyn BoardStore>) -> Result<Self, minijinja::Error> {
        Ok(Self {
            store,
            view: Arc::new(BoardView::new()?),
        })
    }
}

impl FromRef<AppState> for Arc<dyn BoardStore> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.store.clone()
    }
}

impl FromRef<AppState> for Arc<BoardView> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.view.clone()
    }
}
