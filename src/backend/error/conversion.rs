/**
 * Error Conversion
 *
 * All backend errors implement `IntoResponse` from Axum, allowing them to be
 * returned directly from handlers.
 *
 * # Degradation Policy
 *
 * The client never sees which operation failed: every failure is logged and
 * answered with a redirect to `/`. The exception is a render failure, which
 * becomes a plain 500 because `/` leads straight back to the failing page.
 */

use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};

use crate::backend::error::types::BackendError;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        match &self {
            Self::NotFound { .. } | Self::Form(_) => {
                tracing::warn!("Request rejected: {}", self);
            }
            Self::StoreWrite { .. } | Self::StoreRead { .. } | Self::Render(_) => {
                tracing::error!("Request failed: {}", self);
            }
        }

        let status = self.status_code();
        if status == StatusCode::SEE_OTHER {
            Redirect::to("/").into_response()
        } else {
            (status, "Internal Server Error").into_response()
        }
    }
}
