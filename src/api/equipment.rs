//! Equipment API endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    compliance::FilterCriteria,
    error::AppResult,
    models::equipment::{CreateEquipment, Equipment, EquipmentDetails, UpdateEquipment},
};

/// List equipment
#[utoipa::path(
    get,
    path = "/equipment",
    tag = "equipment",
    params(FilterCriteria),
    responses(
        (status = 200, description = "Equipment list", body = Vec<Equipment>)
    )
)]
pub async fn list_equipment(
    State(state): State<crate::AppState>,
    Query(criteria): Query<FilterCriteria>,
) -> AppResult<Json<Vec<Equipment>>> {
    let equipment = state.services.equipment.list(&criteria).await?;
    Ok(Json(equipment))
}

/// Get equipment by ID
#[utoipa::path(
    get,
    path = "/equipment/{id}",
    tag = "equipment",
    params(("id" = String, Path, description = "Equipment ID")),
    responses(
        (status = 200, description = "Equipment details", body = EquipmentDetails),
        (status = 404, description = "Equipment not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_equipment(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<EquipmentDetails>> {
    let equipment = state.services.equipment.get_by_id(&id).await?;
    Ok(Json(equipment))
}

/// Get equipment by barcode
#[utoipa::path(
    get,
    path = "/equipment/barcode/{barcode}",
    tag = "equipment",
    params(("barcode" = String, Path, description = "Equipment barcode")),
    responses(
        (status = 200, description = "Equipment details", body = EquipmentDetails),
        (status = 404, description = "Equipment not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_equipment_by_barcode(
    State(state): State<crate::AppState>,
    Path(barcode): Path<String>,
) -> AppResult<Json<EquipmentDetails>> {
    let equipment = state.services.equipment.get_by_barcode(&barcode).await?;
    Ok(Json(equipment))
}

/// Register equipment
#[utoipa::path(
    post,
    path = "/equipment",
    tag = "equipment",
    request_body = CreateEquipment,
    responses(
        (status = 201, description = "Equipment created", body = EquipmentDetails),
        (status = 409, description = "Barcode already registered", body = crate::error::ErrorResponse),
        (status = 422, description = "Missing required fields", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_equipment(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateEquipment>,
) -> AppResult<(StatusCode, Json<EquipmentDetails>)> {
    let equipment = state.services.equipment.create(&data).await?;
    Ok((StatusCode::CREATED, Json(equipment)))
}

/// Update equipment descriptive fields
#[utoipa::path(
    put,
    path = "/equipment/{id}",
    tag = "equipment",
    params(("id" = String, Path, description = "Equipment ID")),
    request_body = UpdateEquipment,
    responses(
        (status = 200, description = "Equipment updated", body = EquipmentDetails),
        (status = 404, description = "Equipment not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_equipment(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
    Json(data): Json<UpdateEquipment>,
) -> AppResult<Json<EquipmentDetails>> {
    let equipment = state.services.equipment.update(&id, &data).await?;
    Ok(Json(equipment))
}
