//! Statistics endpoints

use axum::{extract::State, Json};

use crate::{
    error::AppResult,
    models::EquipmentDetails,
    services::stats::DashboardStats,
};

/// Dashboard statistics
#[utoipa::path(
    get,
    path = "/stats",
    tag = "stats",
    responses(
        (status = 200, description = "Equipment, inspection and schedule statistics", body = DashboardStats)
    )
)]
pub async fn get_stats(State(state): State<crate::AppState>) -> AppResult<Json<DashboardStats>> {
    let stats = state.services.stats.dashboard().await?;
    Ok(Json(stats))
}

/// Equipment due for inspection soon, soonest first
#[utoipa::path(
    get,
    path = "/stats/upcoming",
    tag = "stats",
    responses(
        (status = 200, description = "Upcoming inspections", body = Vec<EquipmentDetails>)
    )
)]
pub async fn get_upcoming(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<EquipmentDetails>>> {
    let upcoming = state.services.stats.upcoming().await?;
    Ok(Json(upcoming))
}
