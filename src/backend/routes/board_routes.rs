/**
 * Board Routes
 *
 * # Routes
 *
 * - `GET /` - Redirect to the board page
 * - `GET /main` - Render all messages with their comments
 * - `POST /message` - Create a message from form fields `name`, `message`
 * - `POST /comment` - Create a comment from form fields `id`, `name`, `comment`
 *
 * Both POST routes redirect to `/` on success and on failure.
 */

use axum::routing::{get, post};
use axum::Router;

use crate::backend::board::handlers::{post_comment, post_message, redirect_to_board, show_board};
use crate::backend::server::state::AppState;

/// Add the board routes to `router`
pub fn configure_board_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/", get(redirect_to_board))
        .route("/main", get(show_board))
        .route("/message", post(post_message))
        .route("/comment", post(post_comment))
}
