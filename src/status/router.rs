use super::response::{HealthResponse, StatusResponse};
use super::state::BotStatus;
use anyhow::Context as _;
use axum::{Json, Router, extract::State, routing::get};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

pub fn router(status: Arc<BotStatus>) -> Router {
    Router::new()
        .route("/", get(status_report))
        .route("/health", get(health))
        .with_state(status)
}

/// `GET /`: bot label, uptime, and guild count
pub async fn status_report(State(status): State<Arc<BotStatus>>) -> Json<StatusResponse> {
    Json(status.report())
}

/// `GET /health`: always healthy while the process serves requests
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::healthy_now())
}

/// Bind the status listener on all interfaces
pub async fn bind(port: u16) -> anyhow::Result<TcpListener> {
    TcpListener::bind(("0.0.0.0", port))
        .await
        .with_context(|| format!("Binding status server to port {}", port))
}

/// Serve the status routes until the listener fails
pub async fn serve(listener: TcpListener, status: Arc<BotStatus>) -> anyhow::Result<()> {
    info!(addr = %listener.local_addr()?, "Status server listening");

    axum::serve(listener, router(status))
        .await
        .context("Running status server")
}
