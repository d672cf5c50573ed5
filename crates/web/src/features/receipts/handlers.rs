use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    response::{IntoResponse, Response},
};
use storage::{
    dto::receipt::{ErrorResponse, HealthResponse, PointsResponse, ProcessReceiptResponse},
    models::Receipt,
};

use crate::{error::WebError, state::AppState};

use super::services;

#[utoipa::path(
    post,
    path = "/receipts/process",
    request_body = Receipt,
    responses(
        (status = 200, description = "Receipt accepted and stored", body = ProcessReceiptResponse),
        (status = 400, description = "Malformed body or invalid receipt", body = ErrorResponse)
    ),
    tag = "receipts"
)]
pub async fn process_receipt(
    State(state): State<AppState>,
    payload: Result<Json<Receipt>, JsonRejection>,
) -> Result<Response, WebError> {
    let Json(receipt) = payload.map_err(|e| WebError::BadRequest(e.body_text()))?;

    let id = services::process_receipt(state.receipts.as_ref(), receipt).await?;

    Ok(Json(ProcessReceiptResponse { id }).into_response())
}

#[utoipa::path(
    get,
    path = "/receipts/{id}/points",
    params(
        ("id" = String, Path, description = "Receipt ID")
    ),
    responses(
        (status = 200, description = "Points awarded for the receipt", body = PointsResponse),
        (status = 400, description = "Malformed receipt ID", body = ErrorResponse),
        (status = 404, description = "Receipt not found", body = ErrorResponse)
    ),
    tag = "receipts"
)]
pub async fn get_points(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Response, WebError> {
    let Path(id) = id.map_err(|e| WebError::BadRequest(e.body_text()))?;

    let points = services::get_points(state.receipts.as_ref(), &id).await?;

    Ok(Json(PointsResponse { points }).into_response())
}

#[utoipa::path(
    get,
    path = "/receipts/health",
    responses(
        (status = 200, description = "Service is running", body = HealthResponse)
    ),
    tag = "receipts"
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
    })
}
