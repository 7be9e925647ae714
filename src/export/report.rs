//! Inspection report document

use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

use super::ExportFile;
use crate::{
    error::AppResult,
    models::{ChecklistDefinition, Condition, InspectionDetails, InspectionResult},
};

pub const JSON_CONTENT_TYPE: &str = "application/json";

#[derive(Debug, Serialize, ToSchema)]
pub struct ChecklistResult {
    pub key: String,
    pub label: String,
    pub passed: bool,
}

/// Printable summary of one inspection
#[derive(Debug, Serialize, ToSchema)]
pub struct InspectionReport {
    pub inspection_id: String,
    pub equipment_id: String,
    pub equipment_barcode: String,
    pub equipment_name: String,
    pub equipment_type: String,
    pub location: String,
    pub inspector: String,
    pub date: NaiveDate,
    pub result: InspectionResult,
    pub overall_condition: Condition,
    pub score: u8,
    pub checklist: Vec<ChecklistResult>,
    pub notes: String,
    pub photos: Vec<String>,
}

impl InspectionReport {
    pub fn build(details: &InspectionDetails, definition: Option<&ChecklistDefinition>) -> Self {
        let inspection = &details.inspection;
        let checklist = inspection
            .checklist
            .iter()
            .map(|(key, passed)| ChecklistResult {
                key: key.clone(),
                label: definition
                    .map(|d| d.label(key).to_string())
                    .unwrap_or_else(|| key.clone()),
                passed: *passed,
            })
            .collect();

        Self {
            inspection_id: inspection.id.clone(),
            equipment_id: inspection.equipment_id.clone(),
            equipment_barcode: details.equipment_barcode.clone(),
            equipment_name: inspection.equipment_name.clone(),
            equipment_type: details.type_name.clone(),
            location: details.location.clone(),
            inspector: inspection.inspector_name.clone(),
            date: inspection.inspection_date,
            result: inspection.result,
            overall_condition: inspection.overall_condition,
            score: inspection.score,
            checklist,
            notes: inspection.notes.clone(),
            photos: inspection.photos.clone(),
        }
    }

    /// `inspection-report-<barcode>-<date>.json`
    pub fn filename(&self) -> String {
        format!(
            "inspection-report-{}-{}.json",
            self.equipment_barcode,
            self.date.format("%Y-%m-%d")
        )
    }

    pub fn to_file(&self) -> AppResult<ExportFile> {
        Ok(ExportFile {
            filename: self.filename(),
            sheet_name: None,
            content_type: JSON_CONTENT_TYPE,
            bytes: serde_json::to_vec_pretty(self)?,
        })
    }
}
