//! API handlers for Firesafe REST endpoints

pub mod equipment;
pub mod equipment_types;
pub mod health;
pub mod inspections;
pub mod openapi;
pub mod reports;
pub mod scan;
pub mod schedule;
pub mod stats;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Equipment types
        .route("/equipment-types", get(equipment_types::list_equipment_types))
        .route("/equipment-types/:id/checklist", get(equipment_types::get_checklist))
        // Equipment
        .route(
            "/equipment",
            get(equipment::list_equipment).post(equipment::create_equipment),
        )
        .route(
            "/equipment/:id",
            get(equipment::get_equipment).put(equipment::update_equipment),
        )
        .route("/equipment/barcode/:barcode", get(equipment::get_equipment_by_barcode))
        // Inspections
        .route(
            "/equipment/:id/inspections",
            get(inspections::list_equipment_inspections).post(inspections::complete_inspection),
        )
        .route(
            "/equipment/:id/inspections/validate",
            post(inspections::validate_inspection),
        )
        .route("/inspections", get(inspections::list_inspections))
        .route("/inspections/export", get(inspections::export_inspections))
        .route("/inspections/:id", get(inspections::get_inspection))
        .route(
            "/inspections/:id/report",
            get(inspections::download_inspection_report),
        )
        // Schedule
        .route("/schedule", get(schedule::get_schedule))
        // Scanner
        .route("/scan", post(scan::resolve_scan))
        // Statistics
        .route("/stats", get(stats::get_stats))
        .route("/stats/upcoming", get(stats::get_upcoming))
        // Reports
        .route("/reports", get(reports::list_reports))
        .route("/reports/:kind/export", get(reports::export_report))
        .with_state(state);

    // OpenAPI documentation
    let openapi = openapi::create_openapi_router();

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
