//! Equipment type catalogue endpoints

use axum::{extract::Path, Json};

use crate::{
    error::{AppError, AppResult},
    models::{equipment_type, ChecklistDefinition, EquipmentType},
    services::inspections::checklist_for,
};

/// List equipment types with their inspection intervals
#[utoipa::path(
    get,
    path = "/equipment-types",
    tag = "equipment",
    responses(
        (status = 200, description = "Equipment types", body = Vec<EquipmentType>)
    )
)]
pub async fn list_equipment_types() -> Json<Vec<EquipmentType>> {
    Json(equipment_type::all().to_vec())
}

/// Get the inspection checklist of an equipment type
#[utoipa::path(
    get,
    path = "/equipment-types/{id}/checklist",
    tag = "equipment",
    params(("id" = String, Path, description = "Equipment type ID")),
    responses(
        (status = 200, description = "Checklist definition", body = ChecklistDefinition),
        (status = 404, description = "Unknown equipment type", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_checklist(Path(id): Path<String>) -> AppResult<Json<ChecklistDefinition>> {
    if equipment_type::find(&id).is_none() {
        return Err(AppError::NotFound(format!("Equipment type {} not found", id)));
    }
    Ok(Json(checklist_for(&id)?))
}
