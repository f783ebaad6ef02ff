//! Request handlers and their response bodies.

use crate::model::{Receipt, ReceiptPayload};
use crate::points::{self, Points};
use crate::server::error::{ApiError, ApiResult};
use crate::server::AppState;
use crate::store::ReceiptId;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use schemars::Schema;
use serde::Serialize;
use tracing::{debug, info};

#[derive(Debug, Serialize)]
pub struct ProcessResponse {
    pub id: ReceiptId,
}

#[derive(Debug, Serialize)]
pub struct PointsResponse {
    pub points: u64,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub receipts: usize,
}

#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub description: &'static str,
    pub endpoints: &'static [Endpoint],
}

#[derive(Debug, Serialize)]
pub struct Endpoint {
    pub method: &'static str,
    pub path: &'static str,
    pub description: &'static str,
}

const ENDPOINTS: &[Endpoint] = &[
    Endpoint {
        method: "POST",
        path: "/receipts/process",
        description: "Submit a receipt for processing and receive its id",
    },
    Endpoint {
        method: "GET",
        path: "/receipts/{id}/points",
        description: "Get the number of points awarded to a receipt",
    },
    Endpoint {
        method: "GET",
        path: "/receipts/{id}/breakdown",
        description: "Get the points awarded to a receipt by each rule",
    },
    Endpoint {
        method: "GET",
        path: "/schema/receipt",
        description: "Get the JSON Schema of a submitted receipt",
    },
    Endpoint {
        method: "GET",
        path: "/health",
        description: "Check that the service is running",
    },
];

/// GET / - Describes the service and its endpoints.
pub(super) async fn index() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        description: "Processes receipts and awards points based on a fixed set of rules",
        endpoints: ENDPOINTS,
    })
}

/// GET /health
pub(super) async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        receipts: state.store.len(),
    })
}

/// GET /schema/receipt
pub(super) async fn receipt_schema() -> Json<Schema> {
    Json(schemars::schema_for!(ReceiptPayload))
}

/// POST /receipts/process - Validates and stores a receipt.
pub(super) async fn process_receipt(
    State(state): State<AppState>,
    payload: Result<Json<ReceiptPayload>, JsonRejection>,
) -> ApiResult<Json<ProcessResponse>> {
    let Json(payload) = payload?;
    let receipt = Receipt::try_from(payload)?;
    let retailer = receipt.retailer().to_string();
    let id = state.store.put(receipt);
    info!("Accepted receipt {id} from '{retailer}'");
    Ok(Json(ProcessResponse { id }))
}

/// GET /receipts/{id}/points
pub(super) async fn get_points(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<PointsResponse>> {
    let points = lookup(&state, &id)?.total();
    debug!("Receipt {id} is worth {points} points");
    Ok(Json(PointsResponse { points }))
}

/// GET /receipts/{id}/breakdown
pub(super) async fn get_breakdown(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Points>> {
    let points = lookup(&state, &id)?;
    debug!("Receipt {id} is worth {} points", points.total());
    Ok(Json(points))
}

/// Scores the receipt stored under `id`. The score is computed fresh on every call.
fn lookup(state: &AppState, id: &str) -> ApiResult<Points> {
    let receipt = state
        .store
        .get_str(id)
        .ok_or_else(|| ApiError::NotFound(id.to_string()))?;
    Ok(points::breakdown(&receipt))
}
