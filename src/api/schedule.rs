//! Inspection schedule endpoint

use axum::{
    extract::{Query, State},
    Json,
};

use crate::{compliance::FilterCriteria, error::AppResult, models::EquipmentDetails};

/// Inspection schedule (status filters on due state)
#[utoipa::path(
    get,
    path = "/schedule",
    tag = "schedule",
    params(FilterCriteria),
    responses(
        (status = 200, description = "Equipment with due state", body = Vec<EquipmentDetails>)
    )
)]
pub async fn get_schedule(
    State(state): State<crate::AppState>,
    Query(criteria): Query<FilterCriteria>,
) -> AppResult<Json<Vec<EquipmentDetails>>> {
    let schedule = state.services.equipment.schedule(&criteria).await?;
    Ok(Json(schedule))
}
