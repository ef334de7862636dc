//! Defines the app level error type and its conversion to rendered HTML pages.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::html::error_view;

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The split configuration given at startup is inconsistent.
    ///
    /// The server refuses to start rather than computing settlements
    /// with a split that cannot be honored.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The expense file could not be written.
    ///
    /// Load failures are deliberately swallowed (an unreadable file is
    /// treated as an empty expense list), but a failed save would lose
    /// the submitted expense, so it is surfaced to the client.
    #[error("could not save the expense file: {0}")]
    SaveFailed(String),

    /// The requested resource was not found.
    #[error("the requested resource could not be found")]
    NotFound,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => (
                StatusCode::NOT_FOUND,
                error_view(
                    "Not Found",
                    "404",
                    "Page not found.",
                    "Check the address and try again.",
                ),
            )
                .into_response(),
            error => {
                tracing::error!("An unexpected error occurred: {error}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    error_view(
                        "Server Error",
                        "500",
                        "Sorry, something went wrong.",
                        "Try again later or check the server logs.",
                    ),
                )
                    .into_response()
            }
        }
    }
}
