//! Report endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::{
    error::AppResult,
    export::{ExportFile, ExportQuery},
    services::reports::{ReportDefinition, ReportKind},
};

#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct ReportQuery {
    /// Report kind, or "all"
    pub kind: Option<String>,
}

/// Report catalogue
#[utoipa::path(
    get,
    path = "/reports",
    tag = "reports",
    params(ReportQuery),
    responses(
        (status = 200, description = "Available reports", body = Vec<ReportDefinition>)
    )
)]
pub async fn list_reports(
    State(state): State<crate::AppState>,
    Query(query): Query<ReportQuery>,
) -> Json<Vec<ReportDefinition>> {
    Json(state.services.reports.catalog(query.kind.as_deref()))
}

/// Generate a report as a spreadsheet
#[utoipa::path(
    get,
    path = "/reports/{kind}/export",
    tag = "reports",
    params(
        ("kind" = String, Path, description = "compliance, inspection, critical or inventory"),
        ExportQuery
    ),
    responses(
        (status = 200, description = "Spreadsheet export", body = String,
            content_type = ["application/vnd.openxmlformats-officedocument.spreadsheetml.sheet", "text/csv"]),
        (status = 404, description = "Unknown report", body = crate::error::ErrorResponse)
    )
)]
pub async fn export_report(
    State(state): State<crate::AppState>,
    Path(kind): Path<String>,
    Query(query): Query<ExportQuery>,
) -> AppResult<ExportFile> {
    let kind: ReportKind = kind.parse()?;
    let format = query.format.unwrap_or(state.config.export.format);
    state.services.reports.export_report(kind, format).await
}
