//! Barcode scan resolution endpoint

use axum::{extract::State, Json};

use crate::{
    error::AppResult,
    scanner::{ScanRequest, ScanResolution},
};

/// Resolve a scanned barcode to equipment and a follow-up route
#[utoipa::path(
    post,
    path = "/scan",
    tag = "scan",
    request_body = ScanRequest,
    responses(
        (status = 200, description = "Equipment found", body = ScanResolution),
        (status = 400, description = "Empty code", body = crate::error::ErrorResponse),
        (status = 404, description = "Barcode not registered", body = crate::error::ErrorResponse)
    )
)]
pub async fn resolve_scan(
    State(state): State<crate::AppState>,
    Json(request): Json<ScanRequest>,
) -> AppResult<Json<ScanResolution>> {
    let resolution = state
        .services
        .scanner
        .resolve(&request.code, request.purpose)
        .await?;
    Ok(Json(resolution))
}
