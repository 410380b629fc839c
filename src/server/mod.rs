//! HTTP server - serves the rendered homepage
//!
//! Routes:
//! - `/` and `/index.html`: the page
//! - `/api/year`: JSON copyright year
//! - `/healthz`: liveness check
//! - everything else: 404 (the router outlet has no views)

mod error;
mod handlers;
mod state;

pub use state::AppState;

use anyhow::{Context, Result};
use axum::{routing::get, Router};
use std::net::SocketAddr;
use tokio::net::TcpListener;

/// Build the router over shared state
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/index.html", get(handlers::index))
        .route("/api/year", get(handlers::year))
        .route("/healthz", get(handlers::healthz))
        .fallback(handlers::not_found)
        .with_state(state)
}

/// Start the HTTP server and run until `shutdown_rx` fires
pub async fn start_server(
    bind_addr: SocketAddr,
    state: AppState,
    shutdown_rx: tokio::sync::oneshot::Receiver<()>,
) -> Result<()> {
    let app = router(state);

    tracing::info!("Starting server on {}", bind_addr);

    let listener = TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {bind_addr}"))?;

    tracing::info!("Server listening on {}", bind_addr);

    // When shutdown_rx receives a signal, the server stops accepting new
    // connections and finishes in-flight requests
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown_rx.await.ok();
        })
        .await
        .context("Server error")?;

    tracing::info!("Server shut down gracefully");
    Ok(())
}
