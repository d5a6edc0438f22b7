//! HTTP API server for note generation
//!
//! - OPTIONS /* - CORS preflight (200, empty body)
//! - POST /*    - Generate a SOAP note from `{ transcript, patientName? }`
//! - GET /health - Health check
//!
//! Every note response is status 200; failures travel in the `error` field.

mod handlers;
mod routes;
mod state;

pub use routes::{create_router, ALLOWED_HEADERS};
pub use state::AppState;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::info;

use crate::config::Settings;

/// Bind the configured address and serve until Ctrl-C.
pub async fn serve(settings: &Settings) -> Result<()> {
    let addr = settings.listen_addr();
    let app = create_router(AppState::from_settings(settings));

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind HTTP server to {}", addr))?;

    info!("HTTP server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
