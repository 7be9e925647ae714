//! Inspection model

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::enums::{Condition, InspectionResult};

/// Immutable inspection record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Inspection {
    pub id: String,
    pub equipment_id: String,
    /// Equipment name at the time of the inspection
    pub equipment_name: String,
    pub inspector_name: String,
    pub inspection_date: NaiveDate,
    pub overall_condition: Condition,
    pub result: InspectionResult,
    /// Checklist key -> passed
    #[schema(value_type = Object)]
    pub checklist: IndexMap<String, bool>,
    /// Percentage of answered checklist items that passed
    pub score: u8,
    pub photos: Vec<String>,
    pub notes: String,
}

/// Inspection record before the log assigns it an id
#[derive(Debug, Clone, PartialEq)]
pub struct NewInspection {
    pub equipment_id: String,
    pub equipment_name: String,
    pub inspector_name: String,
    pub inspection_date: NaiveDate,
    pub overall_condition: Condition,
    pub result: InspectionResult,
    pub checklist: IndexMap<String, bool>,
    pub score: u8,
    pub photos: Vec<String>,
    pub notes: String,
}

impl NewInspection {
    pub fn with_id(self, id: String) -> Inspection {
        Inspection {
            id,
            equipment_id: self.equipment_id,
            equipment_name: self.equipment_name,
            inspector_name: self.inspector_name,
            inspection_date: self.inspection_date,
            overall_condition: self.overall_condition,
            result: self.result,
            checklist: self.checklist,
            score: self.score,
            photos: self.photos,
            notes: self.notes,
        }
    }
}

/// In-progress checklist answers submitted by an inspector
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct InspectionSubmission {
    /// Checklist key -> answer; `null` or absent means unanswered
    #[serde(default)]
    #[schema(value_type = Object)]
    pub checklist: IndexMap<String, Option<bool>>,
    /// One of excellent, good, fair, poor
    pub overall_condition: Option<String>,
    #[serde(default)]
    pub inspector_name: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub photos: Vec<String>,
}

/// Inspection joined with the current equipment record for display
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct InspectionDetails {
    pub inspection: Inspection,
    pub equipment_barcode: String,
    pub equipment_type: String,
    pub type_name: String,
    pub location: String,
}
