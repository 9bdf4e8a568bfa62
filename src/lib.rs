//! Finboard is a small web app that serves a financial metrics dashboard.
//!
//! The dashboard renders a fixed sample dataset (twelve months of revenue,
//! expenses, profit, growth and customer counts, plus an expense breakdown by
//! category) as summary cards, interactive ECharts visualizations and a data
//! table. The main chart can be switched between bar, line and area views
//! without a full page reload.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::response::{IntoResponse, Response};
use axum_server::Handle;
use tokio::signal;

mod dashboard;
mod data;
mod endpoints;
mod html;
mod not_found;
mod routing;

pub use routing::build_router;

use crate::html::error_view;

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
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

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    /// Summary statistics were requested for an empty dataset.
    ///
    /// The bundled sample data always has twelve records, so the request
    /// handlers never hit this. It exists so that an empty dataset fails
    /// loudly instead of producing NaN averages.
    #[error("cannot summarize an empty dataset")]
    EmptyDataset,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::error!("An unexpected error occurred: {}", self);

        error_view(
            "Internal Server Error",
            "500",
            "Sorry, something went wrong.",
            "Try again later or check the server logs",
        )
        .into_response()
    }
}
