//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{
    equipment, equipment_types, health, inspections, reports, scan, schedule, stats,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Firesafe API",
        version = "1.0.0",
        description = "Fire Safety Equipment Inspection REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Equipment types
        equipment_types::list_equipment_types,
        equipment_types::get_checklist,
        // Equipment
        equipment::list_equipment,
        equipment::get_equipment,
        equipment::get_equipment_by_barcode,
        equipment::create_equipment,
        equipment::update_equipment,
        // Inspections
        inspections::list_inspections,
        inspections::get_inspection,
        inspections::download_inspection_report,
        inspections::export_inspections,
        inspections::list_equipment_inspections,
        inspections::validate_inspection,
        inspections::complete_inspection,
        // Schedule
        schedule::get_schedule,
        // Scanner
        scan::resolve_scan,
        // Stats
        stats::get_stats,
        stats::get_upcoming,
        // Reports
        reports::list_reports,
        reports::export_report,
    ),
    components(
        schemas(
            // Equipment
            crate::models::Equipment,
            crate::models::EquipmentDetails,
            crate::models::CreateEquipment,
            crate::models::UpdateEquipment,
            crate::models::EquipmentType,
            crate::models::EquipmentStatus,
            crate::models::Condition,
            crate::models::DueState,
            // Checklists
            crate::models::ChecklistItem,
            crate::models::ChecklistDefinition,
            crate::compliance::ValidationReport,
            crate::compliance::FilterCriteria,
            // Inspections
            crate::models::Inspection,
            crate::models::InspectionDetails,
            crate::models::InspectionSubmission,
            crate::models::InspectionResult,
            inspections::InspectionOutcome,
            crate::export::InspectionReport,
            crate::export::report::ChecklistResult,
            // Scanner
            crate::scanner::ScanPurpose,
            crate::scanner::ScanRequest,
            crate::scanner::ScanResolution,
            // Stats
            crate::services::stats::DashboardStats,
            crate::services::stats::EquipmentStats,
            crate::services::stats::InspectionStats,
            crate::services::stats::ScheduleStats,
            crate::services::stats::TypeCount,
            crate::services::stats::MonthlyTrend,
            crate::services::stats::AlertKind,
            crate::services::stats::Alert,
            // Reports
            reports::ReportQuery,
            crate::services::reports::ReportKind,
            crate::services::reports::ReportDefinition,
            crate::export::SpreadsheetFormat,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "equipment", description = "Equipment registry"),
        (name = "inspections", description = "Inspection log and checklists"),
        (name = "schedule", description = "Inspection schedule"),
        (name = "scan", description = "Barcode scan resolution"),
        (name = "stats", description = "Statistics"),
        (name = "reports", description = "Reports and exports")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
