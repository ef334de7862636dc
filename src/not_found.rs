//! The fallback handler for unknown routes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::html::error_view;

/// Render the 404 page for routes that do not exist.
pub async fn get_404_not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        error_view(
            "Not Found",
            "404",
            "Page not found.",
            "Check the address and try again.",
        ),
    )
        .into_response()
}
