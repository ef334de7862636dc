//! Costsplit is a web app for tracking purchases shared between two
//! people and working out who owes whom.
//!
//! Each expense records who paid and how its cost is split between the
//! two parties (60/40 by default). The app serves HTML pages directly:
//! the overview page shows the running balance, charts, and the full
//! expense list, and a small JSON endpoint feeds external chart
//! consumers.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

mod aggregation;
mod app_state;
mod chart_data;
mod config;
mod delete_expense;
mod endpoints;
mod error;
mod expense;
mod html;
mod new_expense;
mod not_found;
mod overview;
mod routing;
mod settlement;

pub use app_state::AppState;
pub use config::SplitConfig;
pub use error::Error;
pub use routing::build_router;

/// An async task that waits for either the ctrl+c or terminate signal,
/// whichever comes first, and then signals the server to shut down
/// gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}
