//! Equipment model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::enums::{Condition, DueState, EquipmentStatus};

/// Equipment record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Equipment {
    pub id: String,
    /// Human-scannable code, unique across the registry
    pub barcode: String,
    pub name: String,
    /// Equipment type id (see `/equipment-types`)
    pub equipment_type: String,
    pub location: String,
    pub manufacturer: String,
    pub model: String,
    pub serial_number: String,
    pub installation_date: NaiveDate,
    /// None until the first inspection is completed
    pub last_inspection_date: Option<NaiveDate>,
    pub next_inspection_date: NaiveDate,
    pub status: EquipmentStatus,
    pub condition: Condition,
    pub notes: Option<String>,
}

impl Equipment {
    /// Date from which the next inspection is scheduled
    pub fn schedule_baseline(&self) -> NaiveDate {
        self.last_inspection_date.unwrap_or(self.installation_date)
    }
}

/// Equipment with derived scheduling information
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EquipmentDetails {
    pub equipment: Equipment,
    /// Display name of the equipment type
    pub type_name: String,
    pub due_state: DueState,
    /// Negative when overdue
    pub days_until_due: i64,
}

/// Create equipment request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateEquipment {
    #[validate(length(min = 1, message = "Barcode is required"))]
    pub barcode: String,
    #[validate(length(min = 1, message = "Equipment type is required"))]
    pub equipment_type: String,
    #[validate(length(min = 1, message = "Location is required"))]
    pub location: String,
    /// Defaults to "<type name> - <location>"
    pub name: Option<String>,
    #[serde(default)]
    pub manufacturer: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub serial_number: String,
    pub installation_date: NaiveDate,
    /// Date of an inspection done before registration, if any
    pub last_inspection_date: Option<NaiveDate>,
    pub status: Option<EquipmentStatus>,
    pub condition: Option<Condition>,
    pub notes: Option<String>,
}

/// Update equipment request.
///
/// Inspection dates, status and condition are absent on purpose: they only
/// change when an inspection is completed.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateEquipment {
    pub name: Option<String>,
    pub equipment_type: Option<String>,
    pub location: Option<String>,
    pub manufacturer: Option<String>,
    pub model: Option<String>,
    pub serial_number: Option<String>,
    pub notes: Option<String>,
}
