//! Inspection log service

use std::{collections::HashMap, sync::Arc};

use crate::{
    clock::Clock,
    compliance::{self, filter, FilterCriteria, ValidationReport},
    error::{AppError, AppResult},
    models::{
        checklist, equipment_type, ChecklistDefinition, Equipment, Inspection, InspectionDetails,
        InspectionSubmission,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct InspectionsService {
    repository: Repository,
    clock: Arc<dyn Clock>,
}

/// Checklist for an equipment type id
pub fn checklist_for(equipment_type: &str) -> AppResult<ChecklistDefinition> {
    checklist::definition_for(equipment_type).ok_or_else(|| {
        AppError::NotFound(format!("No checklist for equipment type {}", equipment_type))
    })
}

fn join(inspection: Inspection, equipment: Option<&Equipment>) -> InspectionDetails {
    let (barcode, kind, location) = match equipment {
        Some(e) => (
            e.barcode.clone(),
            e.equipment_type.clone(),
            e.location.clone(),
        ),
        None => (String::new(), String::new(), String::new()),
    };
    InspectionDetails {
        type_name: equipment_type::display_name(&kind).to_string(),
        inspection,
        equipment_barcode: barcode,
        equipment_type: kind,
        location,
    }
}

impl InspectionsService {
    pub fn new(repository: Repository, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    /// All inspections joined with their equipment, filtered; the status
    /// filter applies to the inspection result
    pub async fn list(&self, criteria: &FilterCriteria) -> AppResult<Vec<InspectionDetails>> {
        let equipment: HashMap<String, Equipment> = self
            .repository
            .equipment
            .list()
            .await?
            .into_iter()
            .map(|e| (e.id.clone(), e))
            .collect();

        let details = self
            .repository
            .inspections
            .list()
            .await?
            .into_iter()
            .map(|i| {
                let e = equipment.get(&i.equipment_id);
                join(i, e)
            })
            .collect();
        Ok(filter(details, criteria))
    }

    pub async fn get_by_id(&self, id: &str) -> AppResult<InspectionDetails> {
        let inspection = self.repository.inspections.get_by_id(id).await?;
        let equipment = match self
            .repository
            .equipment
            .get_by_id(&inspection.equipment_id)
            .await
        {
            Ok(e) => Some(e),
            Err(AppError::EquipmentNotFound(_)) => None,
            Err(e) => return Err(e),
        };
        Ok(join(inspection, equipment.as_ref()))
    }

    /// Inspection history of one piece of equipment
    pub async fn list_for_equipment(&self, equipment_id: &str) -> AppResult<Vec<Inspection>> {
        self.repository.equipment.get_by_id(equipment_id).await?;
        self.repository.inspections.list_by_equipment(equipment_id).await
    }

    /// Check in-progress answers without recording anything
    pub async fn validate(
        &self,
        equipment_id: &str,
        submission: &InspectionSubmission,
    ) -> AppResult<ValidationReport> {
        let equipment = self.repository.equipment.get_by_id(equipment_id).await?;
        let definition = checklist_for(&equipment.equipment_type)?;
        Ok(compliance::validate(
            &definition,
            &submission.checklist,
            submission.overall_condition.as_deref(),
            &submission.inspector_name,
        ))
    }

    /// Record a completed inspection dated today and apply its outcome to
    /// the equipment
    pub async fn complete(
        &self,
        equipment_id: &str,
        submission: &InspectionSubmission,
    ) -> AppResult<(Equipment, Inspection)> {
        let equipment = self.repository.equipment.get_by_id(equipment_id).await?;
        let kind = equipment_type::find(&equipment.equipment_type).ok_or_else(|| {
            AppError::Internal(format!(
                "Equipment {} has unknown type {}",
                equipment.id, equipment.equipment_type
            ))
        })?;
        let definition = checklist_for(&kind.id)?;
        let today = self.clock.today();

        let (updated, record) =
            match compliance::complete_inspection(&equipment, kind, &definition, submission, today) {
                Ok(outcome) => outcome,
                Err(e) => {
                    tracing::warn!("Inspection of {} rejected: {}", equipment.id, e);
                    return Err(e);
                }
            };

        let inspection = self.repository.inspections.create(record).await?;
        let updated = self.repository.equipment.update(updated).await?;

        tracing::info!(
            "Inspection {} recorded for {} by {}: {} (next due {})",
            inspection.id,
            updated.barcode,
            inspection.inspector_name,
            inspection.result.as_str(),
            updated.next_inspection_date
        );
        Ok((updated, inspection))
    }
}
