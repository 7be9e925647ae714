//! Inspection API endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    compliance::{FilterCriteria, ValidationReport},
    error::AppResult,
    export::{ExportFile, ExportQuery},
    models::{Equipment, Inspection, InspectionDetails, InspectionSubmission},
};

/// Result of completing an inspection
#[derive(Serialize, ToSchema)]
pub struct InspectionOutcome {
    /// Equipment after the inspection was applied
    pub equipment: Equipment,
    pub inspection: Inspection,
}

/// List inspections (status filters on result)
#[utoipa::path(
    get,
    path = "/inspections",
    tag = "inspections",
    params(FilterCriteria),
    responses(
        (status = 200, description = "Inspection log", body = Vec<InspectionDetails>)
    )
)]
pub async fn list_inspections(
    State(state): State<crate::AppState>,
    Query(criteria): Query<FilterCriteria>,
) -> AppResult<Json<Vec<InspectionDetails>>> {
    let inspections = state.services.inspections.list(&criteria).await?;
    Ok(Json(inspections))
}

/// Get inspection by ID
#[utoipa::path(
    get,
    path = "/inspections/{id}",
    tag = "inspections",
    params(("id" = String, Path, description = "Inspection ID")),
    responses(
        (status = 200, description = "Inspection details", body = InspectionDetails),
        (status = 404, description = "Inspection not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_inspection(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<InspectionDetails>> {
    let inspection = state.services.inspections.get_by_id(&id).await?;
    Ok(Json(inspection))
}

/// Download the report document of one inspection
#[utoipa::path(
    get,
    path = "/inspections/{id}/report",
    tag = "inspections",
    params(("id" = String, Path, description = "Inspection ID")),
    responses(
        (status = 200, description = "Inspection report", body = crate::export::InspectionReport, content_type = "application/json"),
        (status = 404, description = "Inspection not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn download_inspection_report(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<ExportFile> {
    let report = state.services.reports.inspection_report(&id).await?;
    report.to_file()
}

/// Export the inspection log as a spreadsheet
#[utoipa::path(
    get,
    path = "/inspections/export",
    tag = "inspections",
    params(ExportQuery),
    responses(
        (status = 200, description = "Spreadsheet export", body = String,
            content_type = ["application/vnd.openxmlformats-officedocument.spreadsheetml.sheet", "text/csv"])
    )
)]
pub async fn export_inspections(
    State(state): State<crate::AppState>,
    Query(query): Query<ExportQuery>,
) -> AppResult<ExportFile> {
    let format = query.format.unwrap_or(state.config.export.format);
    state.services.reports.export_inspections(format).await
}

/// Inspection history of one piece of equipment
#[utoipa::path(
    get,
    path = "/equipment/{id}/inspections",
    tag = "inspections",
    params(("id" = String, Path, description = "Equipment ID")),
    responses(
        (status = 200, description = "Inspection history", body = Vec<Inspection>),
        (status = 404, description = "Equipment not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_equipment_inspections(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<Inspection>>> {
    let inspections = state.services.inspections.list_for_equipment(&id).await?;
    Ok(Json(inspections))
}

/// Check checklist answers without recording them
#[utoipa::path(
    post,
    path = "/equipment/{id}/inspections/validate",
    tag = "inspections",
    params(("id" = String, Path, description = "Equipment ID")),
    request_body = InspectionSubmission,
    responses(
        (status = 200, description = "Validation report", body = ValidationReport),
        (status = 404, description = "Equipment not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn validate_inspection(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
    Json(submission): Json<InspectionSubmission>,
) -> AppResult<Json<ValidationReport>> {
    let report = state.services.inspections.validate(&id, &submission).await?;
    Ok(Json(report))
}

/// Complete an inspection
#[utoipa::path(
    post,
    path = "/equipment/{id}/inspections",
    tag = "inspections",
    params(("id" = String, Path, description = "Equipment ID")),
    request_body = InspectionSubmission,
    responses(
        (status = 201, description = "Inspection recorded", body = InspectionOutcome),
        (status = 404, description = "Equipment not found", body = crate::error::ErrorResponse),
        (status = 422, description = "Missing required fields", body = crate::error::ErrorResponse)
    )
)]
pub async fn complete_inspection(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
    Json(submission): Json<InspectionSubmission>,
) -> AppResult<(StatusCode, Json<InspectionOutcome>)> {
    let (equipment, inspection) = state.services.inspections.complete(&id, &submission).await?;
    Ok((
        StatusCode::CREATED,
        Json(InspectionOutcome {
            equipment,
            inspection,
        }),
    ))
}
