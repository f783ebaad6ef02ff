//! The HTTP API.
//!
//! - `POST /receipts/process` validates and stores a receipt, returning its id.
//! - `GET /receipts/{id}/points` returns the points awarded to a stored receipt.
//! - `GET /receipts/{id}/breakdown` returns the points awarded by each rule.
//! - `GET /schema/receipt`, `GET /health` and `GET /` describe the service.

mod error;
mod routes;

pub use error::{ApiError, ApiResult, ErrorResponse};

use crate::store::ReceiptStore;
use crate::{Config, Result};
use anyhow::Context;
use axum::routing::{get, post};
use axum::Router;
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

/// State shared by every request handler.
#[derive(Debug, Clone)]
pub struct AppState {
    store: Arc<ReceiptStore>,
}

impl AppState {
    pub fn new(store: Arc<ReceiptStore>) -> Self {
        Self { store }
    }
}

/// Builds the router for the receipt API backed by `store`.
pub fn router(store: Arc<ReceiptStore>) -> Router {
    Router::new()
        .route("/", get(routes::index))
        .route("/health", get(routes::health))
        .route("/schema/receipt", get(routes::receipt_schema))
        .route("/receipts/process", post(routes::process_receipt))
        .route("/receipts/:id/points", get(routes::get_points))
        .route("/receipts/:id/breakdown", get(routes::get_breakdown))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState::new(store))
}

/// Binds to the configured address and serves the API until the process receives Ctrl-C. The
/// store is created here and is dropped, with every receipt in it, when the server stops.
pub async fn run_server(config: &Config) -> Result<()> {
    let listener = TcpListener::bind(config.addr())
        .await
        .with_context(|| format!("Unable to listen on {}", config.addr()))?;
    serve(listener, Arc::new(ReceiptStore::new()), shutdown_signal()).await
}

/// Serves the API on `listener` until `shutdown` completes, then drains in-flight requests.
pub(crate) async fn serve<F>(
    listener: TcpListener,
    store: Arc<ReceiptStore>,
    shutdown: F,
) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener
        .local_addr()
        .context("Unable to read the listening address")?;
    info!("Receipt processor listening on http://{addr}");

    axum::serve(listener, router(store))
        .with_graceful_shutdown(shutdown)
        .await
        .context("The HTTP server failed")?;

    info!("Receipt processor shut down");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received Ctrl-C, shutting down"),
        Err(e) => {
            // Without a signal handler the server can only be stopped by killing the process.
            error!("Unable to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await
        }
    }
}
